//! Application state and derived queries.
//!
//! [`AppState`] is the single source of truth for the gallery core: which image
//! the modal shows, which images are favourites, and which favourite toggles are
//! still waiting on the service. It is only ever changed by
//! [`reduce`](super::reduce); everything else reads it.
//!
//! # State Components
//!
//! - **Selection**: `Closed` or `Open(image)` for the detail modal
//! - **Last shown**: the image most recently passed to `Select`, kept across a
//!   close so exit animations can still read it
//! - **Favourites**: confirmed favourite records, at most one per image id
//! - **Pending**: image ids with an add or remove request in flight
//!
//! # Example
//!
//! ```
//! use cat_gallery::app::AppState;
//!
//! let state = AppState::new();
//! assert!(state.selected().is_none());
//! assert!(state.favourites.is_empty());
//! assert!(!state.modal_viewmodel().is_open);
//! ```

use super::selection::Selection;
use crate::domain::{FavouriteImage, Image};
use crate::ui::viewmodel::ModalViewModel;
use std::collections::BTreeSet;

/// Central application state container.
///
/// Fields are public for reading and for building fixtures; production code
/// changes them only through dispatched actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// What the detail modal currently shows.
    pub selection: Selection,

    /// Image most recently passed to `Select`, including the close marker.
    ///
    /// `None` until the first selection. Never cleared by a close.
    pub last_shown: Option<Image>,

    /// Confirmed favourites in the order they were added or listed.
    pub favourites: Vec<FavouriteImage>,

    /// Image ids whose favourite toggle has not settled yet.
    pub pending: BTreeSet<String>,
}

impl AppState {
    /// Creates the start-of-session state: modal closed, no favourites.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the image open in the modal, or `None` when it is closed.
    ///
    /// This is the "is there a selection" predicate; `last_shown` must not be
    /// used for it.
    #[must_use]
    pub const fn selected(&self) -> Option<&Image> {
        self.selection.image()
    }

    /// Returns the favourite record for an image id, if the image is a favourite.
    #[must_use]
    pub fn favourite_for(&self, image_id: &str) -> Option<&FavouriteImage> {
        self.favourites.iter().find(|f| f.image.id == image_id)
    }

    /// Returns true if the image id has a favourite record.
    #[must_use]
    pub fn is_favourite(&self, image_id: &str) -> bool {
        self.favourite_for(image_id).is_some()
    }

    /// Returns true if the open image is a favourite. False when closed.
    #[must_use]
    pub fn selected_is_favourite(&self) -> bool {
        self.selected().is_some_and(|image| self.is_favourite(&image.id))
    }

    /// Returns true if a toggle for the image id has not settled yet.
    #[must_use]
    pub fn is_pending(&self, image_id: &str) -> bool {
        self.pending.contains(image_id)
    }

    /// Computes the props for the image detail modal.
    ///
    /// `image` is the last shown image even when the modal is closed, so a
    /// closing modal can fade out the picture it was showing.
    #[must_use]
    pub fn modal_viewmodel(&self) -> ModalViewModel {
        let selected = self.selected();
        ModalViewModel {
            image: self.last_shown.clone(),
            is_open: selected.is_some(),
            is_favourite: self.selected_is_favourite(),
            toggle_pending: selected.is_some_and(|image| self.is_pending(&image.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(selected: Option<Image>, favourites: Vec<FavouriteImage>) -> AppState {
        AppState {
            last_shown: selected.clone(),
            selection: selected.map_or(Selection::Closed, Selection::Open),
            favourites,
            pending: BTreeSet::new(),
        }
    }

    #[test]
    fn is_favourite_matches_on_image_id_not_record_id() {
        let state = state_with(None, vec![FavouriteImage::new("1", Image::new("abc", "u"))]);

        assert!(state.is_favourite("abc"));
        assert!(!state.is_favourite("1"));
    }

    #[test]
    fn selected_is_favourite_is_false_when_closed() {
        let mut state = state_with(
            Some(Image::new("abc", "u")),
            vec![FavouriteImage::new("f", Image::new("abc", "u"))],
        );
        assert!(state.selected_is_favourite());

        state.selection = Selection::Closed;
        assert!(!state.selected_is_favourite());
    }

    #[test]
    fn modal_viewmodel_keeps_last_image_after_close() {
        let mut state = state_with(Some(Image::new("abc", "u1")), vec![]);
        state.selection = Selection::Closed;
        state.last_shown = Some(Image::new("", "u1"));

        let vm = state.modal_viewmodel();
        assert!(!vm.is_open);
        assert_eq!(vm.image.map(|i| i.url), Some("u1".to_string()));
        assert!(!vm.toggle_pending);
    }

    #[test]
    fn modal_viewmodel_reports_pending_toggle_for_open_image() {
        let mut state = state_with(Some(Image::new("abc", "u1")), vec![]);
        state.pending.insert("abc".to_string());

        assert!(state.modal_viewmodel().toggle_pending);

        state.pending.clear();
        state.pending.insert("other".to_string());
        assert!(!state.modal_viewmodel().toggle_pending);
    }
}
