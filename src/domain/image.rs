//! Image and favourite record models.
//!
//! An [`Image`] is a remote cat picture identified by its `id`; the `url` is
//! presentational only. A [`FavouriteImage`] links a favourite record, whose
//! id is assigned by the favourites service, to the image it marks.

use serde::{Deserialize, Serialize};

/// A remote cat picture.
///
/// Identity is `id`. An image whose `id` is empty is the "closed" marker sent
/// with a `Select` action: it closes the modal while keeping the other fields
/// around for the exit animation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub url: String,
}

impl Image {
    /// Creates an image from its id and display URL.
    ///
    /// ```
    /// use cat_gallery::domain::Image;
    ///
    /// let image = Image::new("abc", "https://cdn2.thecatapi.com/images/abc.jpg");
    /// assert_eq!(image.id, "abc");
    /// assert!(!image.is_closed_marker());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }

    /// Returns true if this image carries the empty id used to close the modal.
    #[must_use]
    pub fn is_closed_marker(&self) -> bool {
        self.id.is_empty()
    }

    /// Returns a copy of this image with the id cleared and every other field kept.
    ///
    /// ```
    /// use cat_gallery::domain::Image;
    ///
    /// let closed = Image::new("abc", "u1").closed();
    /// assert_eq!(closed, Image::new("", "u1"));
    /// ```
    #[must_use]
    pub fn closed(&self) -> Self {
        Self {
            id: String::new(),
            url: self.url.clone(),
        }
    }
}

/// A favourite record as confirmed by the favourites service.
///
/// `id` is the record id issued by the service and is distinct from
/// `image.id`. Removal on the service is keyed by `id`; membership in the
/// local favourites list is keyed by `image.id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavouriteImage {
    pub id: String,
    pub image: Image,
}

impl FavouriteImage {
    /// Links a service-issued record id to the image it marks.
    #[must_use]
    pub fn new(id: impl Into<String>, image: Image) -> Self {
        Self {
            id: id.into(),
            image,
        }
    }
}
