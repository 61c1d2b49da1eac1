//! Modal selection state machine.
//!
//! The detail modal is either [`Selection::Closed`] or [`Selection::Open`] with
//! the image being shown. There is no terminal state; `Select` actions move the
//! machine back and forth for the whole session:
//!
//! ```text
//!            Select(img), img.id != ""
//!   Closed ─────────────────────────────▶ Open(img)
//!     ▲                                      │
//!     └──────────────────────────────────────┘
//!            Select(img), img.id == ""
//! ```
//!
//! The image that was last on screen is kept separately in
//! [`AppState::last_shown`](super::AppState::last_shown) so a close never strips
//! the data an exit animation needs.

use crate::domain::Image;

/// Whether the detail modal is showing an image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No image is open. The initial state.
    #[default]
    Closed,

    /// The modal shows this image. Its id is never empty.
    Open(Image),
}

impl Selection {
    /// Returns the open image, if any.
    #[must_use]
    pub const fn image(&self) -> Option<&Image> {
        match self {
            Self::Closed => None,
            Self::Open(image) => Some(image),
        }
    }

    /// Returns true if the modal shows an image.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

impl From<Image> for Selection {
    /// Maps the empty-id close marker to `Closed` and anything else to `Open`.
    fn from(image: Image) -> Self {
        if image.is_closed_marker() {
            Self::Closed
        } else {
            Self::Open(image)
        }
    }
}
