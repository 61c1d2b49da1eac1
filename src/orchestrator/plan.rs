//! Deciding what a favourite toggle should do.
//!
//! Planning is pure: it looks at the state once and picks `Add` or `Remove`,
//! or explains why there is nothing to do. The decision is taken from the
//! favourites list by image id, never by position.

use crate::app::AppState;
use crate::domain::{FavouriteImage, Image};
use thiserror::Error;

/// The remote operation a toggle will perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TogglePlan {
    /// The image is not a favourite yet; create a record for it.
    Add {
        /// The image being favourited, as currently selected.
        image: Image,
    },

    /// The image is a favourite; delete its existing record.
    Remove {
        /// The existing record, dispatched back unchanged on success.
        record: FavouriteImage,
    },
}

impl TogglePlan {
    /// Id of the image the plan acts on.
    #[must_use]
    pub fn image_id(&self) -> &str {
        match self {
            Self::Add { image } => &image.id,
            Self::Remove { record } => &record.image.id,
        }
    }

    /// Short operation name for span and log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
        }
    }
}

/// Why a toggle request was not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Skip {
    #[error("no image is open")]
    NothingSelected,

    /// Another toggle for the same image has not settled yet.
    #[error("a toggle for this image is already in flight")]
    InFlight,
}

/// Plans a toggle for the image open in the modal.
///
/// # Errors
///
/// Returns [`Skip::NothingSelected`] when the modal is closed and
/// [`Skip::InFlight`] when the open image already has a toggle pending.
///
/// # Example
///
/// ```
/// use cat_gallery::app::{reduce, Action, AppState};
/// use cat_gallery::domain::Image;
/// use cat_gallery::orchestrator::{plan_toggle, Skip, TogglePlan};
///
/// assert_eq!(plan_toggle(&AppState::new()), Err(Skip::NothingSelected));
///
/// let image = Image::new("1", "u1");
/// let state = reduce(AppState::new(), &Action::Select(image.clone()));
/// assert_eq!(plan_toggle(&state), Ok(TogglePlan::Add { image }));
/// ```
pub fn plan_toggle(state: &AppState) -> Result<TogglePlan, Skip> {
    let selected = state.selected().ok_or(Skip::NothingSelected)?;

    if state.is_pending(&selected.id) {
        return Err(Skip::InFlight);
    }

    Ok(state.favourite_for(&selected.id).map_or_else(
        || TogglePlan::Add {
            image: selected.clone(),
        },
        |existing| TogglePlan::Remove {
            record: existing.clone(),
        },
    ))
}
