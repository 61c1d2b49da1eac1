//! Structured logging via `tracing`.
//!
//! The core emits spans around event handling, dispatch and every favourites
//! workflow, and `warn` events for service failures it absorbs. This module
//! installs a subscriber that prints them.
//!
//! # Configuration
//!
//! The filter is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Hosts that install their own subscriber can skip [`init_tracing`]
//! entirely; the core only uses the `tracing` macros.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup

pub mod init;

pub use init::init_tracing;
