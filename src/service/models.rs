//! Wire records for TheCatAPI favourites endpoints.
//!
//! These types mirror the JSON the service speaks and are kept apart from the
//! domain models. Record ids come back as numbers today; strings are accepted
//! too so an API change does not break decoding.

use crate::domain::{FavouriteImage, Image, ServiceError};
use serde::{Deserialize, Serialize};

/// Body of `POST /favourites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFavourite<'a> {
    pub image_id: &'a str,

    /// Optional end-user scope for the favourite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_id: Option<&'a str>,
}

/// A favourite record id, numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Response of `POST /favourites`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedFavourite {
    pub id: RecordId,
    #[serde(default)]
    pub message: Option<String>,
}

/// Image embedded in a listed favourite. Empty when the image was deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One entry of `GET /favourites`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FavouriteRecord {
    pub id: RecordId,
    pub image_id: String,
    #[serde(default)]
    pub image: ImageRecord,
}

impl From<FavouriteRecord> for FavouriteImage {
    fn from(record: FavouriteRecord) -> Self {
        Self {
            id: record.id.to_string(),
            image: Image {
                id: record.image_id,
                url: record.image.url.unwrap_or_default(),
            },
        }
    }
}

/// Decodes a `POST /favourites` body into the new record id.
///
/// # Errors
///
/// Returns [`ServiceError::Malformed`] if the body is not the expected JSON or
/// reports something other than success.
pub fn parse_created(body: &str) -> Result<String, ServiceError> {
    let created: CreatedFavourite = serde_json::from_str(body)?;
    match created.message.as_deref() {
        None | Some("SUCCESS") => Ok(created.id.to_string()),
        Some(other) => Err(ServiceError::Malformed(format!(
            "unexpected add result: {other}"
        ))),
    }
}

/// Decodes a `GET /favourites` body into domain records.
///
/// # Errors
///
/// Returns [`ServiceError::Malformed`] if the body is not a JSON array of records.
pub fn parse_list(body: &str) -> Result<Vec<FavouriteImage>, ServiceError> {
    let records: Vec<FavouriteRecord> = serde_json::from_str(body)?;
    Ok(records.into_iter().map(FavouriteImage::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_accepts_numeric_and_text_ids() {
        assert_eq!(
            parse_created(r#"{"message":"SUCCESS","id":232413577}"#).unwrap(),
            "232413577"
        );
        assert_eq!(parse_created(r#"{"id":"abc"}"#).unwrap(), "abc");
    }

    #[test]
    fn created_without_id_is_malformed() {
        assert!(matches!(
            parse_created(r#"{"message":"SUCCESS"}"#),
            Err(ServiceError::Malformed(_))
        ));
        assert!(matches!(
            parse_created("<html>"),
            Err(ServiceError::Malformed(_))
        ));
    }

    #[test]
    fn created_with_failure_message_is_malformed() {
        assert!(matches!(
            parse_created(r#"{"message":"DUPLICATE_FAVOURITE","id":1}"#),
            Err(ServiceError::Malformed(_))
        ));
    }

    #[test]
    fn list_maps_image_id_and_url() {
        let body = r#"[
            {"id":1,"user_id":"x","image_id":"abc","sub_id":null,
             "created_at":"2023-01-01T00:00:00.000Z",
             "image":{"id":"abc","url":"https://cdn2.thecatapi.com/images/abc.jpg"}},
            {"id":2,"image_id":"gone","image":{}}
        ]"#;

        let favourites = parse_list(body).unwrap();

        assert_eq!(
            favourites,
            vec![
                FavouriteImage::new(
                    "1",
                    Image::new("abc", "https://cdn2.thecatapi.com/images/abc.jpg")
                ),
                FavouriteImage::new("2", Image::new("gone", "")),
            ]
        );
    }

    #[test]
    fn new_favourite_omits_missing_sub_id() {
        let body = serde_json::to_string(&NewFavourite {
            image_id: "abc",
            sub_id: None,
        })
        .unwrap();
        assert_eq!(body, r#"{"image_id":"abc"}"#);
    }
}
