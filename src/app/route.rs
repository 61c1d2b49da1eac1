//! Typed routing surface.
//!
//! The core does not drive navigation, but the routes views are mounted under
//! decide which callbacks are wired: every route except `/favourites` hosts the
//! image modal, and `/images/:id` additionally deep-links into it. Unknown
//! paths redirect to the gallery root.

use std::fmt;

/// A route of the gallery client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: the image list.
    Gallery,
    /// `/images/:id`: the image list with the modal open on `id`.
    Image(String),
    /// `/breeds`: the breed filter.
    Breeds,
    /// `/favourites`: the favourites list.
    Favourites,
}

impl Route {
    /// Parses a path into a route. Returns `None` for unknown paths.
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    ///
    /// ```
    /// use cat_gallery::app::Route;
    ///
    /// assert_eq!(Route::parse("/images/abc?x=1"), Some(Route::Image("abc".into())));
    /// assert_eq!(Route::parse("/breeds/"), Some(Route::Breeds));
    /// assert_eq!(Route::parse("/nope"), None);
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_matches('/');
        let mut segments = trimmed.split('/');

        let route = match (segments.next(), segments.next(), segments.next()) {
            (Some(""), None, None) => Self::Gallery,
            (Some("breeds"), None, None) => Self::Breeds,
            (Some("favourites"), None, None) => Self::Favourites,
            (Some("images"), Some(id), None) if !id.is_empty() => Self::Image(id.to_string()),
            _ => return None,
        };
        Some(route)
    }

    /// Parses a path, redirecting anything unknown to [`Route::Gallery`].
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        Self::parse(path).unwrap_or_else(|| {
            tracing::debug!(path = %path, "unknown route, redirecting to gallery");
            Self::Gallery
        })
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Gallery => "/".to_string(),
            Self::Image(id) => format!("/images/{id}"),
            Self::Breeds => "/breeds".to_string(),
            Self::Favourites => "/favourites".to_string(),
        }
    }

    /// Whether the image modal is mounted on this route.
    #[must_use]
    pub const fn shows_modal(&self) -> bool {
        !matches!(self, Self::Favourites)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
