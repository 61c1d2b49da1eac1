//! Actions accepted by the state transition function.
//!
//! An [`Action`] is a discrete, already-decided change to application state.
//! Views dispatch `Select` directly; the orchestrator dispatches
//! `ToggleFavourite` only after the favourites service has confirmed the
//! change, and brackets each request with `ToggleStarted`/`ToggleSettled`.
//!
//! # Example
//!
//! ```
//! use cat_gallery::app::{reduce, Action, AppState};
//! use cat_gallery::domain::Image;
//!
//! let image = Image::new("1", "u1");
//! let state = reduce(AppState::default(), &Action::Select(image.clone()));
//! let state = reduce(state, &Action::close(&image));
//! assert!(state.selected().is_none());
//! assert_eq!(state.last_shown, Some(Image::new("", "u1")));
//! ```

use crate::domain::{FavouriteImage, Image};

/// State transitions understood by [`reduce`](super::reduce).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces the selection with this image.
    ///
    /// An image with an empty id closes the modal; its other fields become
    /// the last shown image.
    Select(Image),

    /// Mirrors a confirmed remote add or remove into the favourites list.
    ///
    /// Adds the record when no favourite exists for `record.image.id`,
    /// removes the existing one otherwise.
    ToggleFavourite(FavouriteImage),

    /// Replaces the favourites list with the records listed by the service.
    FavouritesLoaded(Vec<FavouriteImage>),

    /// Marks a toggle request for this image as in flight.
    ToggleStarted {
        /// Id of the image being toggled.
        image_id: String,
    },

    /// Clears the in-flight mark for this image, whatever the outcome.
    ToggleSettled {
        /// Id of the image that was toggled.
        image_id: String,
    },
}

impl Action {
    /// Builds the `Select` action that closes the modal over `image`.
    #[must_use]
    pub fn close(image: &Image) -> Self {
        Self::Select(image.closed())
    }

    /// Short variant name for span and log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::ToggleFavourite(_) => "toggle_favourite",
            Self::FavouritesLoaded(_) => "favourites_loaded",
            Self::ToggleStarted { .. } => "toggle_started",
            Self::ToggleSettled { .. } => "toggle_settled",
        }
    }
}
