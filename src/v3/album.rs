/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::macros::obj_from_id;
use crate::v3::parsers::{from_empty_str_to_none, from_null_to_zero, from_privacy};
use crate::v3::{ApiResponse, Client, Image, Privacy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Album API.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#5369b915-ad8d-47b1-b44b-8e2561e41cee) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Album {
    pub id: String,

    pub title: Option<String>,

    pub description: Option<String>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub datetime: DateTime<Utc>,

    // Image id of the album cover
    pub cover: Option<String>,

    pub cover_width: Option<u32>,

    pub cover_height: Option<u32>,

    pub account_url: Option<String>,

    pub account_id: Option<u64>,

    #[serde(deserialize_with = "from_privacy")]
    pub privacy: Option<Privacy>,

    pub layout: Option<String>,

    #[serde(deserialize_with = "from_null_to_zero")]
    pub views: u64,

    pub link: String,

    pub favorite: Option<bool>,

    pub nsfw: Option<bool>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub section: Option<String>,

    pub images_count: u64,

    pub images: Vec<Image>,

    pub in_gallery: bool,

    pub deletehash: Option<String>,
}

impl Album {
    const BASE_URI: &'static str = "album/";

    /// Returns information for the specified album id, including its images
    pub async fn from_id(client: &Client, id: &str) -> Result<ApiResponse<Self>, ImgurError> {
        obj_from_id!(client, Self::BASE_URI, id, Self)
    }

    /// The image used as the album cover, if it is part of the returned images
    pub fn cover_image(&self) -> Option<&Image> {
        let cover = self.cover.as_deref()?;
        self.images.iter().find(|img| img.id == cover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_with_cover() {
        let album: Album = serde_json::from_str(
            r#"{"id":"xyz789","title":null,"datetime":1451248840,"cover":"b2","privacy":"hidden",
                "views":null,"link":"https://imgur.com/a/xyz789","images_count":2,
                "images":[{"id":"a1","link":"https://i.imgur.com/a1.png"},
                          {"id":"b2","link":"https://i.imgur.com/b2.png"}]}"#,
        )
        .unwrap();
        assert_eq!(album.privacy, Some(Privacy::Hidden));
        assert_eq!(album.views, 0);
        assert_eq!(album.cover_image().map(|img| img.link.as_str()), Some("https://i.imgur.com/b2.png"));

        let no_cover = Album {
            cover: Some("gone".into()),
            ..album
        };
        assert!(no_cover.cover_image().is_none());
    }
}
