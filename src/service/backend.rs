//! Favourites service abstraction.
//!
//! This module defines the [`FavouritesService`] trait the orchestrator talks
//! to: one method per remote operation the gallery needs, each returning a
//! boxed future so implementations work as trait objects.

use crate::domain::{FavouriteImage, ServiceError};
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Remote store of favourite records.
///
/// # Implementations
///
/// - [`HttpFavouritesService`](super::HttpFavouritesService): TheCatAPI over HTTPS
///
/// # Examples
///
/// ```
/// use cat_gallery::domain::{FavouriteImage, ServiceError};
/// use cat_gallery::service::FavouritesService;
/// use futures_util::future::{self, BoxFuture, FutureExt};
///
/// struct Offline;
///
/// impl FavouritesService for Offline {
///     fn add<'a>(&'a self, _image_id: &'a str) -> BoxFuture<'a, Result<String, ServiceError>> {
///         future::ready(Err(ServiceError::Network("offline".into()))).boxed()
///     }
///
///     fn remove<'a>(&'a self, _favourite_id: &'a str) -> BoxFuture<'a, Result<(), ServiceError>> {
///         future::ready(Err(ServiceError::Network("offline".into()))).boxed()
///     }
///
///     fn list(&self) -> BoxFuture<'_, Result<Vec<FavouriteImage>, ServiceError>> {
///         future::ready(Ok(Vec::new())).boxed()
///     }
/// }
/// ```
pub trait FavouritesService: Send + Sync {
    /// Marks an image as a favourite.
    ///
    /// Returns the id of the new favourite record, which is distinct from the
    /// image id.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the request fails or the response lacks an id.
    fn add<'a>(&'a self, image_id: &'a str) -> BoxFuture<'a, Result<String, ServiceError>>;

    /// Deletes a favourite record by its record id.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the request fails.
    fn remove<'a>(&'a self, favourite_id: &'a str) -> BoxFuture<'a, Result<(), ServiceError>>;

    /// Lists all favourite records.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the request fails or the body is malformed.
    fn list(&self) -> BoxFuture<'_, Result<Vec<FavouriteImage>, ServiceError>>;
}

impl<T: FavouritesService + ?Sized> FavouritesService for Arc<T> {
    fn add<'a>(&'a self, image_id: &'a str) -> BoxFuture<'a, Result<String, ServiceError>> {
        (**self).add(image_id)
    }

    fn remove<'a>(&'a self, favourite_id: &'a str) -> BoxFuture<'a, Result<(), ServiceError>> {
        (**self).remove(favourite_id)
    }

    fn list(&self) -> BoxFuture<'_, Result<Vec<FavouriteImage>, ServiceError>> {
        (**self).list()
    }
}
