//! Gallery runtime: wiring views to the store and the orchestrator.
//!
//! [`Gallery`] is the single object a host UI holds on to. It owns the
//! [`Store`] and the [`Orchestrator`], turns view events into commands via
//! [`handle_event`], and executes them.
//!
//! # Example
//!
//! ```no_run
//! use cat_gallery::app::Event;
//! use cat_gallery::domain::Image;
//! use cat_gallery::{initialize, Config};
//!
//! # async fn run() -> cat_gallery::Result<()> {
//! let gallery = initialize(&Config::default())?;
//! let mut updates = gallery.store().subscribe();
//!
//! gallery.handle(&Event::SelectItem(Image::new("9ccXTANkb", "https://cdn2.thecatapi.com/images/9ccXTANkb.jpg"))).await;
//! gallery.handle(&Event::ToggleFavourite).await;
//!
//! if updates.has_changed().unwrap_or(false) {
//!     let vm = updates.borrow_and_update().modal_viewmodel();
//!     println!("favourite: {}", vm.is_favourite);
//! }
//! # Ok(())
//! # }
//! ```

use crate::app::{handle_event, AppState, Command, Event, Store};
use crate::domain::ServiceError;
use crate::orchestrator::{Orchestrator, ToggleOutcome};
use crate::service::FavouritesService;

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// The event had nothing to act on.
    Ignored,
    /// An action was dispatched; `changed` tells whether state moved.
    Dispatched {
        changed: bool,
    },
    /// The toggle workflow ran.
    Toggled(ToggleOutcome),
    /// The favourites list was fetched, or failed to be.
    Loaded(Result<usize, ServiceError>),
}

/// The gallery core as seen by a host UI.
#[derive(Debug, Clone)]
pub struct Gallery<S> {
    store: Store,
    orchestrator: Orchestrator<S>,
}

impl<S: FavouritesService> Gallery<S> {
    /// Creates a gallery with start-of-session state.
    pub fn new(service: S) -> Self {
        Self::with_store(Store::default(), service)
    }

    /// Creates a gallery over an existing store.
    pub const fn with_store(store: Store, service: S) -> Self {
        Self {
            store,
            orchestrator: Orchestrator::new(service),
        }
    }

    /// Returns the store views subscribe to.
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the orchestrator running favourites workflows.
    pub const fn orchestrator(&self) -> &Orchestrator<S> {
        &self.orchestrator
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> AppState {
        self.store.snapshot()
    }

    /// Handles one view event to completion.
    ///
    /// Synchronous commands finish before this returns without suspending.
    /// Favourite toggles and loads suspend only this call; events handled
    /// concurrently through the same gallery are not blocked.
    pub async fn handle(&self, event: &Event) -> Handled {
        let command = self.store.read(|state| handle_event(state, event));

        match command {
            None => Handled::Ignored,
            Some(Command::Dispatch(action)) => Handled::Dispatched {
                changed: self.store.dispatch(action),
            },
            Some(Command::ToggleFavourite) => {
                Handled::Toggled(self.orchestrator.toggle_favourite(&self.store).await)
            }
            Some(Command::LoadFavourites) => {
                Handled::Loaded(self.orchestrator.load_favourites(&self.store).await)
            }
        }
    }
}
