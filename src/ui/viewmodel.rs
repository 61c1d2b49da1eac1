//! View model types computed from application state.
//!
//! View models carry display-ready data only. They are created via
//! [`AppState::modal_viewmodel`](crate::app::AppState::modal_viewmodel) and
//! handed to the external views as props.
//!
//! # Example
//!
//! ```rust
//! use cat_gallery::app::{reduce, Action, AppState};
//! use cat_gallery::domain::Image;
//!
//! let state = reduce(AppState::new(), &Action::Select(Image::new("1", "u1")));
//! let vm = state.modal_viewmodel();
//! assert!(vm.is_open);
//! assert!(!vm.is_favourite);
//! ```

use crate::domain::Image;

/// Props for the image detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalViewModel {
    /// Image to draw. Stays set after a close so the exit animation can fade
    /// out the previous picture; `None` only before anything was selected.
    pub image: Option<Image>,

    /// Whether the modal should be open.
    pub is_open: bool,

    /// Whether the open image is a favourite.
    pub is_favourite: bool,

    /// Whether a favourite toggle for the open image is in flight.
    ///
    /// Views disable the favourite control while this is set.
    pub toggle_pending: bool,
}
