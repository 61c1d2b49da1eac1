//! Event handling: translating view intents into commands.
//!
//! Views never touch state directly. They report what the user did as an
//! [`Event`]; [`handle_event`] looks at the current state and decides what, if
//! anything, should happen next:
//!
//! ```text
//! View intent → Event → handle_event → Command ─┬─ Dispatch(Action) → Store
//!                                               └─ ToggleFavourite / LoadFavourites → Orchestrator
//! ```
//!
//! The handler itself is synchronous and side-effect free; executing the
//! returned command is the runtime's job.

use super::{Action, AppState};
use crate::domain::Image;

/// User intents emitted by views.
///
/// Each variant corresponds to one callback views are wired with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `onSelectItem`: an image was picked from the image list.
    SelectItem(Image),
    /// `onSelectImage`: an image was picked from the breed filter.
    SelectImage(Image),
    /// `onShow`: the `/images/:id` route resolved its image and wants it shown.
    Show(Image),
    /// `onClose`: the modal's close control was used.
    Close,
    /// `onToggleFavourite`: the favourite control on the modal was used.
    ToggleFavourite,
    /// The favourites list was mounted and needs the service's records.
    LoadFavourites,
}

impl Event {
    /// Short variant name for span and log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectItem(_) => "select_item",
            Self::SelectImage(_) => "select_image",
            Self::Show(_) => "show",
            Self::Close => "close",
            Self::ToggleFavourite => "toggle_favourite",
            Self::LoadFavourites => "load_favourites",
        }
    }
}

/// What the runtime should do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply this action to the store right away.
    Dispatch(Action),
    /// Run the toggle-favourite workflow for the selected image.
    ToggleFavourite,
    /// Fetch the favourites list from the service.
    LoadFavourites,
}

/// Decides the command for an event given the current state.
///
/// Returns `None` when the event has nothing to act on: closing a modal that
/// is not open, or toggling a favourite with no image selected.
///
/// # Example
///
/// ```
/// use cat_gallery::app::{handle_event, Action, AppState, Command, Event};
/// use cat_gallery::domain::Image;
///
/// let state = AppState::new();
/// assert_eq!(handle_event(&state, &Event::Close), None);
///
/// let image = Image::new("1", "u1");
/// assert_eq!(
///     handle_event(&state, &Event::SelectItem(image.clone())),
///     Some(Command::Dispatch(Action::Select(image)))
/// );
/// ```
#[must_use]
pub fn handle_event(state: &AppState, event: &Event) -> Option<Command> {
    let _span = tracing::debug_span!("handle_event", event = event.name()).entered();

    match event {
        Event::SelectItem(image) | Event::SelectImage(image) | Event::Show(image) => {
            tracing::debug!(image_id = %image.id, "image selected");
            Some(Command::Dispatch(Action::Select(image.clone())))
        }
        Event::Close => {
            let Some(image) = state.selected() else {
                tracing::debug!("close requested with no open image");
                return None;
            };
            tracing::debug!(image_id = %image.id, "closing modal");
            Some(Command::Dispatch(Action::close(image)))
        }
        Event::ToggleFavourite => {
            if state.selected().is_none() {
                tracing::debug!("toggle requested with no open image");
                return None;
            }
            Some(Command::ToggleFavourite)
        }
        Event::LoadFavourites => Some(Command::LoadFavourites),
    }
}
