//! Presentation boundary.
//!
//! Rendering happens outside this crate. The core only computes the view
//! models external views are driven by:
//!
//! ```text
//! AppState → modal_viewmodel → ModalViewModel → (external view)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state

pub mod viewmodel;

pub use viewmodel::ModalViewModel;
