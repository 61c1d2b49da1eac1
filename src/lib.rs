//! cat-gallery: state and favourites coordination core for a cat image gallery.
//!
//! The gallery client lets a user browse cat images from TheCatAPI, filter them
//! by breed, open one in a modal and mark it as a favourite. Rendering and
//! routing live in the host UI; this crate is the part with invariants:
//! - A single reducer-driven state machine for the selected image and favourites
//! - Optimistic favourite toggling that commits only what the service confirmed
//! - Modal close semantics that keep the last image around for exit animations
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host UI (views, router)                            │  ← External
//! └─────────────────────────────────────────────────────┘
//!                        │ Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime.rs)                               │  ← Gallery facade
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────────────┐   ┌───────────────────────────┐
//! │ Application Layer (app/)  │   │ Orchestrator              │
//! │ - Event handling          │◀──│ (orchestrator/)           │
//! │ - Pure reducer            │   │ - Toggle plan + workflow  │
//! │ - Store + subscriptions   │   │ - Favourites loading      │
//! └───────────────────────────┘   └───────────────────────────┘
//!                                              │
//!                                 ┌───────────────────────────┐
//!                                 │ Service Layer (service/)  │
//!                                 │ - FavouritesService trait │
//!                                 │ - TheCatAPI over HTTP     │
//!                                 └───────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: State, actions, reducer, store and event handling
//! - [`domain`]: Image models and error types
//! - [`orchestrator`]: Async favourites workflows
//! - [`service`]: Favourites service trait and HTTP client
//! - [`runtime`]: The [`Gallery`] facade for host UIs
//! - [`ui`]: View models
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Hosts pass settings either as a flat key/value map or as a TOML file:
//!
//! ```toml
//! api_base_url = "https://api.thecatapi.com/v1"
//! api_key = "live_xxx"
//! sub_id = "user-42"
//! request_timeout_ms = 10000
//! trace_level = "cat_gallery=debug"
//! ```
//!
//! # Key Design Decisions
//!
//! ## Confirm, then commit
//!
//! A favourite is added to or removed from local state only after the service
//! has confirmed it. A failed request leaves state exactly as it was.
//!
//! ## One toggle per image
//!
//! While a toggle for an image is in flight, further toggles for that image are
//! skipped and the modal view model reports `toggle_pending` so the control
//! can be disabled.
//!
//! ## Closed is not empty
//!
//! Closing the modal switches the selection to `Closed` but keeps the last
//! shown image, so the modal can animate out the picture it was showing.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod observability;
pub mod orchestrator;
pub mod runtime;
pub mod service;
pub mod ui;

pub use app::{handle_event, reduce, Action, AppState, Event, Route, Selection, Store};
pub use domain::{FavouriteImage, GalleryError, Image, Result, ServiceError};
pub use runtime::{Gallery, Handled};
pub use service::{FavouritesService, HttpFavouritesService};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Default TheCatAPI endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.thecatapi.com/v1";

/// Gallery configuration.
///
/// # Example
///
/// ```toml
/// api_key = "live_xxx"
/// request_timeout_ms = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the cat API, including the version path.
    ///
    /// Default: `https://api.thecatapi.com/v1`
    pub api_base_url: String,

    /// API key sent as `x-api-key`. Favourites require one on TheCatAPI.
    pub api_key: Option<String>,

    /// Optional end-user id favourites are scoped to.
    pub sub_id: Option<String>,

    /// Per-request timeout in milliseconds. No timeout when unset.
    pub request_timeout_ms: Option<u64>,

    /// Tracing filter directives.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or full
    /// `EnvFilter` syntax. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            sub_id: None,
            request_timeout_ms: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - Values are trimmed; empty values count as unset
    /// - `api_base_url`: falls back to the default when unset
    /// - `request_timeout_ms`: `u64`, ignored (no timeout) on parse error or `0`
    /// - `api_key`, `sub_id`, `trace_level`: taken as-is
    /// - Unknown keys are ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use cat_gallery::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "live_xxx".to_string());
    /// map.insert("request_timeout_ms".to_string(), "2500".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_key.as_deref(), Some("live_xxx"));
    /// assert_eq!(config.request_timeout_ms, Some(2500));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let request_timeout_ms = get("request_timeout_ms").and_then(|raw| {
            raw.parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .or_else(|| {
                    tracing::debug!(value = %raw, "ignoring invalid request_timeout_ms");
                    None
                })
        });

        Self {
            api_base_url: get("api_base_url").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            api_key: get("api_key"),
            sub_id: get("sub_id"),
            request_timeout_ms,
            trace_level: get("trace_level"),
        }
    }

    /// Parses configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] on invalid TOML, wrong value types or
    /// unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| GalleryError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Io`] if the file cannot be read and
    /// [`GalleryError::Config`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration file");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Per-request timeout, if configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}

/// Creates a gallery talking to TheCatAPI over HTTP.
///
/// State starts empty: modal closed, no favourites. Dispatch
/// [`Event::LoadFavourites`] to fetch the user's existing favourites.
///
/// # Errors
///
/// Returns [`GalleryError::Config`] if the HTTP client cannot be built from
/// `config`.
pub fn initialize(config: &Config) -> Result<Gallery<HttpFavouritesService>> {
    tracing::debug!("initializing gallery core");
    let service = HttpFavouritesService::new(config)?;
    Ok(Gallery::new(service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_map_uses_defaults_for_missing_and_blank_values() {
        let mut map = BTreeMap::new();
        map.insert("api_base_url".to_string(), "   ".to_string());
        map.insert("sub_id".to_string(), String::new());

        assert_eq!(Config::from_map(&map), Config::default());
    }

    #[test]
    fn from_map_ignores_bad_timeout() {
        for raw in ["soon", "-1", "0"] {
            let map = BTreeMap::from([("request_timeout_ms".to_string(), raw.to_string())]);
            let config = Config::from_map(&map);
            assert_eq!(config.request_timeout_ms, None, "{raw}");
            assert_eq!(config.request_timeout(), None);
        }
    }

    #[test]
    fn from_toml_fills_defaults() {
        let config = Config::from_toml_str(
            r#"
            api_key = "live_xxx"
            request_timeout_ms = 1500
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api_key.as_deref(), Some("live_xxx"));
        assert_eq!(config.request_timeout(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn from_toml_rejects_unknown_keys_and_bad_types() {
        assert!(matches!(
            Config::from_toml_str("api_keyy = \"x\""),
            Err(GalleryError::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str("request_timeout_ms = \"fast\""),
            Err(GalleryError::Config(_))
        ));
    }

    #[test]
    fn from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sub_id = \"user-42\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.sub_id.as_deref(), Some("user-42"));
    }

    #[test]
    fn from_file_reports_missing_file_as_io() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("missing.toml"));

        assert!(matches!(result, Err(GalleryError::Io(_))));
    }

    #[test]
    fn initialize_builds_http_gallery() {
        let gallery = initialize(&Config::default()).unwrap();
        assert_eq!(gallery.state(), AppState::default());
    }
}
