//! Domain layer for the gallery core.
//!
//! Plain data types and error definitions, free of any service or runtime
//! concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`image`]: Image and favourite record models
//!
//! # Examples
//!
//! ```
//! use cat_gallery::domain::{FavouriteImage, Image};
//!
//! let image = Image::new("9ccXTANkb", "https://cdn2.thecatapi.com/images/9ccXTANkb.jpg");
//! let favourite = FavouriteImage::new("232413577", image.clone());
//! assert_eq!(favourite.image, image);
//! ```

pub mod error;
pub mod image;

pub use error::{GalleryError, Result, ServiceError};
pub use image::{FavouriteImage, Image};
