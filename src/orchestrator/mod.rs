//! Effect layer reconciling application state with the favourites service.
//!
//! The reducer never performs I/O; everything that waits on the network lives
//! here and feeds its results back as actions.
//!
//! # Modules
//!
//! - `plan`: Pure decision of what a toggle should do
//! - `workflow`: Async workflows that call the service and dispatch results

pub mod plan;
pub mod workflow;

pub use plan::{plan_toggle, Skip, TogglePlan};
pub use workflow::{Orchestrator, ToggleOutcome};
