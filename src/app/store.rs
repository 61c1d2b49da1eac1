//! Owned application state with change notification.
//!
//! The [`Store`] holds the one `AppState` value for the session. Views and the
//! orchestrator dispatch actions into it; views subscribe to be told when the
//! state changed. Actions are applied one at a time in arrival order, so no
//! transition ever observes another half-applied.
//!
//! The store is a cheap cloneable handle. A clone shares the same state.

use super::reducer::apply;
use super::{Action, AppState};
use std::sync::Arc;
use tokio::sync::watch;

/// Shared handle to the application state.
///
/// # Example
///
/// ```
/// use cat_gallery::app::{Action, Store};
/// use cat_gallery::domain::Image;
///
/// let store = Store::default();
/// let mut updates = store.subscribe();
///
/// assert!(store.dispatch(Action::Select(Image::new("1", "u1"))));
/// assert!(updates.has_changed().unwrap());
/// assert_eq!(store.snapshot().selected(), Some(&Image::new("1", "u1")));
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    state: Arc<watch::Sender<AppState>>,
}

impl Store {
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            state: Arc::new(state),
        }
    }

    /// Applies an action and notifies subscribers if the state changed.
    ///
    /// Returns whether the state changed, i.e. whether views need to re-render.
    pub fn dispatch(&self, action: Action) -> bool {
        let _span = tracing::debug_span!("dispatch", action = action.name()).entered();

        let changed = self.state.send_if_modified(|state| apply(state, &action));

        if changed {
            tracing::debug!("state updated");
        } else {
            tracing::debug!("state unchanged, skipping notification");
        }
        changed
    }

    /// Decides an action from the current state and applies it in one step.
    ///
    /// No other dispatch can run between `decide` reading the state and the
    /// action being applied. When `decide` returns `Err` nothing is applied
    /// and the error is handed back.
    ///
    /// # Errors
    ///
    /// Returns whatever error `decide` returned.
    ///
    /// # Panics
    ///
    /// Never in practice: `watch::Sender::send_if_modified` calls its closure
    /// exactly once, so a decision is always recorded before it is returned.
    pub fn dispatch_with<T, E>(
        &self,
        decide: impl FnOnce(&AppState) -> Result<(Action, T), E>,
    ) -> Result<T, E> {
        let mut decided = None;

        self.state.send_if_modified(|state| match decide(&*state) {
            Ok((action, value)) => {
                let _span = tracing::debug_span!("dispatch", action = action.name()).entered();
                let changed = apply(state, &action);
                decided = Some(Ok(value));
                changed
            }
            Err(err) => {
                decided = Some(Err(err));
                false
            }
        });

        decided.unwrap_or_else(|| unreachable!("send_if_modified calls its closure exactly once"))
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Runs `f` against the current state without cloning it.
    ///
    /// Dispatches are blocked while `f` runs, so keep it short and never
    /// dispatch from inside it.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Returns a receiver that observes every state change from now on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FavouriteImage, Image};

    #[test]
    fn no_op_dispatch_does_not_notify() {
        let store = Store::default();
        let mut updates = store.subscribe();

        assert!(!store.dispatch(Action::ToggleSettled {
            image_id: "1".to_string()
        }));
        assert!(!updates.has_changed().unwrap());
    }

    #[test]
    fn clones_share_state() {
        let store = Store::default();
        let other = store.clone();

        other.dispatch(Action::ToggleFavourite(FavouriteImage::new(
            "f1",
            Image::new("1", "u1"),
        )));

        assert!(store.read(|s| s.is_favourite("1")));
    }

    #[test]
    fn dispatch_with_returns_decision_and_applies_only_on_ok() {
        let store = Store::default();
        let mut updates = store.subscribe();

        let rejected: Result<(), &str> = store.dispatch_with(|_| Err("nothing open"));
        assert_eq!(rejected, Err("nothing open"));
        assert!(!updates.has_changed().unwrap());

        let image_id = store.dispatch_with(|state| -> Result<_, &str> {
            assert!(state.pending.is_empty());
            let action = Action::ToggleStarted {
                image_id: "1".to_string(),
            };
            Ok((action, "1"))
        });
        assert_eq!(image_id, Ok("1"));
        assert!(updates.has_changed().unwrap());
        assert!(store.read(|s| s.is_pending("1")));
    }

    #[tokio::test]
    async fn subscriber_sees_latest_state() {
        let store = Store::default();
        let mut updates = store.subscribe();

        store.dispatch(Action::Select(Image::new("1", "u1")));
        store.dispatch(Action::close(&Image::new("1", "u1")));

        updates.changed().await.unwrap();
        let seen = updates.borrow_and_update().clone();
        assert!(seen.selected().is_none());
        assert_eq!(seen.last_shown, Some(Image::new("", "u1")));
    }
}
