// SPDX-FileCopyrightText: The linkfolio authors
// SPDX-License-Identifier: MPL-2.0

//! Best-effort click reporting

use std::fmt;

/// Structured event passed to the external tracking callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingEvent {
    /// Always `"Link"`.
    pub category: &'static str,

    /// The clicked card's title.
    pub label: String,

    /// The clicked card's URL.
    pub value: String,
}

type TrackingCallback = Box<dyn Fn(TrackingEvent) + Send + Sync>;

/// Reports clicks on tracked cards.
///
/// Every report is logged. If an external callback was injected, the
/// event is also forwarded to it; its absence is not an error.
#[derive(Default)]
pub struct ClickReporter {
    external: Option<TrackingCallback>,
}

impl fmt::Debug for ClickReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickReporter")
            .field("external", &self.external.is_some())
            .finish()
    }
}

impl ClickReporter {
    /// Create a reporter without an external callback.
    #[must_use]
    pub const fn new() -> Self {
        Self { external: None }
    }

    /// Create a reporter forwarding events to the given callback.
    #[must_use]
    pub fn with_external<F>(external: F) -> Self
    where
        F: Fn(TrackingEvent) + Send + Sync + 'static,
    {
        Self {
            external: Some(Box::new(external)),
        }
    }

    /// Report a click on a tracked card.
    pub fn report(&self, title: &str, url: &str) {
        tracing::info!(title, url, "link clicked");
        if let Some(external) = &self.external {
            external(TrackingEvent {
                category: "Link",
                label: title.to_owned(),
                value: url.to_owned(),
            });
        }
    }
}
