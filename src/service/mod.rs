//! Favourites service client layer.
//!
//! The orchestrator only sees the [`FavouritesService`] trait; the HTTP
//! implementation and its wire records live behind it.
//!
//! # Modules
//!
//! - `backend`: The service trait
//! - `http`: TheCatAPI implementation over reqwest
//! - `models`: Wire records and body decoding

pub mod backend;
pub mod http;
pub mod models;

pub use backend::FavouritesService;
pub use http::HttpFavouritesService;
