// SPDX-FileCopyrightText: The linkfolio authors
// SPDX-License-Identifier: MPL-2.0

//! The presentation port
//!
//! All user-facing texts and card attributes live here so concrete ports
//! and tests share a single source of truth.

use crate::{document::Link, icon};

/// `target` attribute of every card's activatable region.
pub const CARD_TARGET: &str = "_blank";

/// `rel` attribute of every card.
///
/// Keeps the new context from reaching the opener and from leaking
/// referrer information.
pub const CARD_REL: &str = "noopener noreferrer";

/// Trailing directional indicator, constant for every card.
pub const CARD_INDICATOR: &str = "↗";

/// Placeholder text shown when the document contains no links.
pub const NO_LINKS_TEXT: &str = "No links available";

/// Error text shown when the document cannot be loaded.
pub const LOAD_ERROR_TEXT: &str =
    "Unable to load links. The data file may be missing or invalid.";

/// Fallback label for the page heading when the profile has no title.
pub const DEFAULT_TITLE_LABEL: &str = "Links";

/// Profile slots addressable through the port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileSlot {
    /// The profile image.
    Image,
    /// The display name.
    Name,
    /// The title or tagline.
    Title,
    /// The biography text.
    Bio,
}

/// One rendered link entry.
///
/// The `target`/`rel` attributes and the trailing indicator are the same
/// for every card and therefore not part of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Activation target of the clickable region.
    pub url: String,

    /// Accessible label, equal to the link title.
    pub label: String,

    /// Leading glyph.
    pub glyph: String,

    /// Title text.
    pub title: String,

    /// Description text; `None` omits the slot entirely.
    pub description: Option<String>,

    /// Whether clicks on this card are reported, see
    /// [`ClickReporter`](crate::track::ClickReporter).
    pub tracked: bool,
}

impl Card {
    /// Build a card from a link record.
    #[must_use]
    pub fn from_link(link: &Link) -> Self {
        Self {
            url: link.url.clone(),
            label: link.title.clone(),
            glyph: icon::resolve(link.icon.as_deref()).to_owned(),
            title: link.title.clone(),
            description: link.description.clone(),
            tracked: link.is_tracked(),
        }
    }
}

impl From<&Link> for Card {
    fn from(link: &Link) -> Self {
        Self::from_link(link)
    }
}

/// Port projecting render output onto a concrete page.
///
/// The renderer only ever calls these operations; it never inspects the
/// page. Implementations are free to map slots and cards onto whatever
/// markup they like.
pub trait Presentation {
    /// Set a profile slot.
    ///
    /// Returns `false` if the page has no such slot. The renderer skips
    /// the field either way, so this is purely a host affordance.
    fn set_slot(&mut self, slot: ProfileSlot, value: &str) -> bool;

    /// Set the composite page heading.
    fn set_page_title(&mut self, title: &str);

    /// Append one card to the link container, preserving call order.
    fn append_card(&mut self, card: Card);

    /// Replace the link container with a placeholder message.
    fn show_placeholder(&mut self, text: &str);

    /// Replace the link container with the error view.
    fn show_error(&mut self, text: &str);
}
