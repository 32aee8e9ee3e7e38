// SPDX-FileCopyrightText: The linkfolio authors
// SPDX-License-Identifier: MPL-2.0

//! Rendering the document onto the presentation port

use crate::{
    document::{Link, LinkDocument, Profile},
    loader::{self, FetchDocument, LoadError},
    presentation::{
        Card, DEFAULT_TITLE_LABEL, LOAD_ERROR_TEXT, NO_LINKS_TEXT, Presentation, ProfileSlot,
    },
};

/// Terminal state after one page load.
///
/// There are no further transitions; reloading the page starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The document was loaded and rendered.
    Rendered,
    /// The error view was shown instead.
    ErrorShown,
}

/// Project the profile fields onto their slots.
///
/// Each field is handled independently; an absent field leaves the slot
/// at its prior value. A present name additionally derives the composite
/// page heading `"{name} | {title}"`, falling back to
/// [`DEFAULT_TITLE_LABEL`] when the profile has no title.
pub fn render_profile<P>(profile: Option<&Profile>, presentation: &mut P)
where
    P: Presentation + ?Sized,
{
    let Some(profile) = profile else {
        return;
    };
    if let Some(image) = &profile.image {
        presentation.set_slot(ProfileSlot::Image, image);
    }
    if let Some(name) = &profile.name {
        presentation.set_slot(ProfileSlot::Name, name);
        let title = profile.title.as_deref().unwrap_or(DEFAULT_TITLE_LABEL);
        presentation.set_page_title(&format!("{name} | {title}"));
    }
    if let Some(title) = &profile.title {
        presentation.set_slot(ProfileSlot::Title, title);
    }
    if let Some(bio) = &profile.bio {
        presentation.set_slot(ProfileSlot::Bio, bio);
    }
}

/// Render the links as cards.
///
/// An absent or empty sequence renders the [`NO_LINKS_TEXT`] placeholder.
/// Otherwise one card is appended per record whose `active` field is not
/// explicitly `false`, preserving the original order. The full list is
/// always rendered.
pub fn render_links<P>(links: Option<&[Link]>, presentation: &mut P)
where
    P: Presentation + ?Sized,
{
    let Some(links) = links.filter(|links| !links.is_empty()) else {
        presentation.show_placeholder(NO_LINKS_TEXT);
        return;
    };
    for link in links.iter().filter(|link| link.is_active()) {
        presentation.append_card(Card::from_link(link));
    }
}

/// Render a loaded document: profile first, then the links.
pub fn render_document<P>(document: &LinkDocument, presentation: &mut P)
where
    P: Presentation + ?Sized,
{
    render_profile(document.profile.as_ref(), presentation);
    render_links(document.links.as_deref(), presentation);
}

/// Drive one page load from fetch to terminal state.
///
/// Any [`LoadError`] is logged once and converted into the error view.
/// Profile slots keep whatever state they reached before the failure;
/// there is no rollback.
pub async fn run<F, P>(fetcher: &F, resource: &str, presentation: &mut P) -> Outcome
where
    F: FetchDocument + ?Sized,
    P: Presentation + ?Sized,
{
    match loader::load(fetcher, resource).await {
        Ok(document) => {
            render_document(&document, presentation);
            Outcome::Rendered
        }
        Err(err) => {
            present_error(&err, presentation);
            Outcome::ErrorShown
        }
    }
}

fn present_error<P>(err: &LoadError, presentation: &mut P)
where
    P: Presentation + ?Sized,
{
    tracing::error!(error = %err, "failed to load the link document");
    presentation.show_error(LOAD_ERROR_TEXT);
}
