//! HTTP favourites service backed by TheCatAPI.
//!
//! Talks to the `/favourites` endpoints of TheCatAPI v1. Every failure mode
//! (transport, non-2xx status, undecodable body, timeout) surfaces as a
//! [`ServiceError`]; nothing here panics.

use super::backend::FavouritesService;
use super::models::{parse_created, parse_list, NewFavourite};
use crate::domain::error::{GalleryError, Result, ServiceError};
use crate::domain::FavouriteImage;
use crate::Config;
use futures_util::future::{BoxFuture, FutureExt};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Url};
use tracing::Instrument;

/// Header carrying the TheCatAPI key.
const API_KEY_HEADER: &str = "x-api-key";

/// Favourites service speaking HTTP to TheCatAPI.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpFavouritesService {
    client: Client,
    base_url: Url,
    sub_id: Option<String>,
}

impl HttpFavouritesService {
    /// Builds the client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] if the base URL is not an absolute
    /// http(s) URL, the API key is not a valid header value, or the HTTP client
    /// cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_builder(config, Client::builder())
    }

    /// Builds the client on top of a caller-supplied builder.
    fn with_builder(config: &Config, builder: ClientBuilder) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| GalleryError::Config(format!("invalid api_base_url: {e}")))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(GalleryError::Config(format!(
                "api_base_url must be an http(s) URL: {base_url}"
            )));
        }

        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| GalleryError::Config(format!("invalid api_key: {e}")))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let mut builder = builder.default_headers(headers);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GalleryError::Config(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!(base_url = %base_url, has_api_key = config.api_key.is_some(), "favourites client ready");

        Ok(Self {
            client,
            base_url,
            sub_id: config.sub_id.clone(),
        })
    }

    /// Returns the base URL with `segments` appended as path segments.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Reads the body and turns non-success statuses into errors.
    async fn read_body(response: reqwest::Response) -> std::result::Result<String, ServiceError> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            tracing::debug!(status = status.as_u16(), "favourites request rejected");
            Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl FavouritesService for HttpFavouritesService {
    fn add<'a>(&'a self, image_id: &'a str) -> BoxFuture<'a, std::result::Result<String, ServiceError>> {
        let span = tracing::debug_span!("favourites_add", image_id = %image_id);
        async move {
            let payload = NewFavourite {
                image_id,
                sub_id: self.sub_id.as_deref(),
            };
            let response = self
                .client
                .post(self.endpoint(&["favourites"]))
                .json(&payload)
                .send()
                .await?;
            let id = parse_created(&Self::read_body(response).await?)?;
            tracing::debug!(favourite_id = %id, "favourite created");
            Ok(id)
        }
        .instrument(span)
        .boxed()
    }

    fn remove<'a>(&'a self, favourite_id: &'a str) -> BoxFuture<'a, std::result::Result<(), ServiceError>> {
        let span = tracing::debug_span!("favourites_remove", favourite_id = %favourite_id);
        async move {
            let response = self
                .client
                .delete(self.endpoint(&["favourites", favourite_id]))
                .send()
                .await?;
            Self::read_body(response).await?;
            tracing::debug!("favourite removed");
            Ok(())
        }
        .instrument(span)
        .boxed()
    }

    fn list(&self) -> BoxFuture<'_, std::result::Result<Vec<FavouriteImage>, ServiceError>> {
        let span = tracing::debug_span!("favourites_list");
        async move {
            let mut url = self.endpoint(&["favourites"]);
            if let Some(sub_id) = &self.sub_id {
                url.query_pairs_mut().append_pair("sub_id", sub_id);
            }
            let response = self.client.get(url).send().await?;
            let favourites = parse_list(&Self::read_body(response).await?)?;
            tracing::debug!(count = favourites.len(), "favourites listed");
            Ok(favourites)
        }
        .instrument(span)
        .boxed()
    }
}
