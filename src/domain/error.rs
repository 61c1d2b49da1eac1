//! Error types for the gallery core.
//!
//! Two enums live here. [`ServiceError`] is the single failure kind for calls
//! against the remote favourites service; the orchestrator absorbs it and never
//! writes it into application state. [`GalleryError`] is the crate-level error
//! for everything around the core (configuration, I/O) and wraps
//! `ServiceError` for callers that want to propagate it with `?`.

use thiserror::Error;

/// Failure of an add, remove or list call against the favourites service.
///
/// Every way a remote call can go wrong collapses into this type so the
/// orchestrator has exactly one thing to absorb.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status.
    #[error("service responded with status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// The main error type for gallery operations outside the reducer.
///
/// # Examples
///
/// ```
/// use cat_gallery::domain::{GalleryError, ServiceError};
///
/// let err: GalleryError = ServiceError::Timeout.into();
/// assert_eq!(err.to_string(), "favourites service error: request timed out");
/// ```
#[derive(Debug, Error)]
pub enum GalleryError {
    /// A favourites service call failed.
    #[error("favourites service error: {0}")]
    Service(#[from] ServiceError),

    /// Configuration is invalid or could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for gallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;
