// SPDX-FileCopyrightText: The linkfolio authors
// SPDX-License-Identifier: MPL-2.0

//! The link document data model

use serde::{Deserialize, Serialize};

/// Profile fields of a link document.
///
/// Every field is optional. An absent field leaves the corresponding
/// presentation slot untouched during rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// URL of the profile image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short title or tagline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Free-form biography text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// A single outbound link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Activation target of the rendered card.
    pub url: String,

    /// Title text, also used as the accessible label.
    pub title: String,

    /// Optional description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Icon token or literal glyph, see [`crate::icon::resolve`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Only an explicit `false` excludes the link from rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Enables click reporting for the rendered card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<bool>,
}

impl Link {
    /// Check if the link should be rendered.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.active, Some(false))
    }

    /// Check if clicks on the rendered card should be reported.
    #[must_use]
    pub const fn is_tracked(&self) -> bool {
        matches!(self.analytics, Some(true))
    }
}

/// The whole document backing one page load.
///
/// Fetched once, held only for the duration of the render pass,
/// never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDocument {
    /// The profile section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    /// Links in presentation order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_active_unless_explicitly_inactive() {
        assert!(
            Link {
                active: None,
                ..Default::default()
            }
            .is_active()
        );
        assert!(
            Link {
                active: Some(true),
                ..Default::default()
            }
            .is_active()
        );
        assert!(
            !Link {
                active: Some(false),
                ..Default::default()
            }
            .is_active()
        );
    }

    #[test]
    fn link_is_tracked_only_when_analytics_enabled() {
        assert!(
            !Link {
                analytics: None,
                ..Default::default()
            }
            .is_tracked()
        );
        assert!(
            !Link {
                analytics: Some(false),
                ..Default::default()
            }
            .is_tracked()
        );
        assert!(
            Link {
                analytics: Some(true),
                ..Default::default()
            }
            .is_tracked()
        );
    }

    #[test]
    fn deserialize_minimal_document() {
        let document: LinkDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(LinkDocument::default(), document);
    }

    #[test]
    fn deserialize_minimal_link() {
        let link: Link =
            serde_json::from_str(r#"{"url":"https://example.com","title":"Example"}"#).unwrap();
        assert_eq!(
            Link {
                url: "https://example.com".to_owned(),
                title: "Example".to_owned(),
                ..Default::default()
            },
            link
        );
    }

    #[test]
    fn deserialize_full_document() {
        let json = r#"{
            "profile": {
                "image": "avatar.png",
                "name": "Jo",
                "title": "Engineer",
                "bio": "Hello."
            },
            "links": [
                {
                    "url": "https://example.com",
                    "title": "Example",
                    "description": "A site",
                    "icon": "website",
                    "active": true,
                    "analytics": true
                }
            ]
        }"#;
        let document: LinkDocument = serde_json::from_str(json).unwrap();
        let profile = document.profile.unwrap();
        assert_eq!(Some("Jo"), profile.name.as_deref());
        assert_eq!(Some("avatar.png"), profile.image.as_deref());
        let links = document.links.unwrap();
        assert_eq!(1, links.len());
        assert!(links[0].is_active());
        assert!(links[0].is_tracked());
    }

    #[test]
    fn deserialize_tolerates_unknown_fields() {
        let json = r#"{"profile":{"name":"Jo","theme":"dark"},"links":[],"version":2}"#;
        let document: LinkDocument = serde_json::from_str(json).unwrap();
        assert_eq!(Some("Jo"), document.profile.unwrap().name.as_deref());
        assert_eq!(Some(0), document.links.map(|links| links.len()));
    }
}
