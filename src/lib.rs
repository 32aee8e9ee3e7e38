// SPDX-FileCopyrightText: The linkfolio authors
// SPDX-License-Identifier: MPL-2.0

//! Rendering core for a personal "link in bio" page.
//!
//! The crate loads a JSON [`LinkDocument`] once per page load, projects the
//! profile fields onto named presentation slots and renders the active links
//! as cards, everything going through the [`Presentation`] port. Concrete
//! pages implement the port; the core stays pure and host-agnostic.
//!
//! Refer to [`docs`] for the document format.

pub mod docs;
pub mod document;
pub mod icon;
pub mod loader;
pub mod presentation;
pub mod render;
pub mod track;

pub use self::{
    document::{Link, LinkDocument, Profile},
    loader::{FetchDocument, FileFetcher, LoadError},
    presentation::{Card, Presentation, ProfileSlot},
    render::{Outcome, run},
    track::{ClickReporter, TrackingEvent},
};
