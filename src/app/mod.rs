//! Application layer: state, actions, reducer and event handling.
//!
//! This module is the core of the gallery client. It implements a
//! unidirectional data flow:
//!
//! ```text
//! View intent → Event → handle_event → Command → Action → reduce → AppState
//!                                         │                   ▲
//!                                         └── Orchestrator ───┘  (after the service answers)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: State transitions accepted by the reducer
//! - [`handler`]: View events and the commands they produce
//! - [`reducer`]: The pure transition function
//! - [`route`]: Typed routing surface
//! - [`selection`]: Modal open/closed state machine
//! - [`state`]: Application state and derived queries
//! - [`store`]: Shared state handle with change notification

pub mod actions;
pub mod handler;
pub mod reducer;
pub mod route;
pub mod selection;
pub mod state;
pub mod store;

pub use actions::Action;
pub use handler::{handle_event, Command, Event};
pub use reducer::reduce;
pub use route::Route;
pub use selection::Selection;
pub use state::AppState;
pub use store::Store;
