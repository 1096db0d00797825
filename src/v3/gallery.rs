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

/// An image as it is listed in the public gallery.
///
/// Carries the voting and community information that plain [`Image`] records lack.
/// See [Imgur API Docs](https://apidocs.imgur.com/#gallery) for more details.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GalleryImage {
    pub id: String,

    pub title: Option<String>,

    pub description: Option<String>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub datetime: DateTime<Utc>,

    #[serde(rename = "type")]
    pub mime_type: String,

    pub animated: bool,

    pub width: u32,

    pub height: u32,

    pub size: u64,

    #[serde(deserialize_with = "from_null_to_zero")]
    pub views: u64,

    #[serde(deserialize_with = "from_null_to_zero")]
    pub bandwidth: u64,

    pub deletehash: Option<String>,

    pub link: String,

    pub gifv: Option<String>,

    pub mp4: Option<String>,

    pub mp4_size: Option<u64>,

    pub looping: Option<bool>,

    pub vote: Option<String>,

    pub favorite: Option<bool>,

    pub nsfw: Option<bool>,

    pub comment_count: Option<u64>,

    pub topic: Option<String>,

    pub topic_id: Option<u64>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub section: Option<String>,

    pub account_url: Option<String>,

    pub account_id: Option<u64>,

    pub ups: i64,

    pub downs: i64,

    pub points: i64,

    pub score: i64,

    pub is_album: bool,
}

impl GalleryImage {
    const BASE_URI: &'static str = "gallery/image/";

    /// Returns gallery information for the specified image id
    pub async fn from_id(client: &Client, id: &str) -> Result<ApiResponse<Self>, ImgurError> {
        obj_from_id!(client, Self::BASE_URI, id, Self)
    }
}

/// An album as it is listed in the public gallery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GalleryAlbum {
    pub id: String,

    pub title: Option<String>,

    pub description: Option<String>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub datetime: DateTime<Utc>,

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

    pub ups: i64,

    pub downs: i64,

    pub points: i64,

    pub score: i64,

    pub is_album: bool,

    pub vote: Option<String>,

    pub favorite: Option<bool>,

    pub nsfw: Option<bool>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub section: Option<String>,

    pub comment_count: Option<u64>,

    pub topic: Option<String>,

    pub topic_id: Option<u64>,

    pub images_count: u64,

    pub images: Vec<Image>,
}

impl GalleryAlbum {
    const BASE_URI: &'static str = "gallery/album/";

    /// Returns gallery information for the specified album id
    pub async fn from_id(client: &Client, id: &str) -> Result<ApiResponse<Self>, ImgurError> {
        obj_from_id!(client, Self::BASE_URI, id, Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_album_with_images() {
        let album: GalleryAlbum = serde_json::from_str(
            r#"{"id":"lDRB2","title":"Imgur Office","description":null,"datetime":1357856292,
                "cover":"24nLu","account_url":"Alan","account_id":4,"privacy":"public",
                "layout":"blog","views":13780,"link":"https://imgur.com/a/lDRB2",
                "ups":1602,"downs":14,"points":1588,"score":1917,"is_album":true,"vote":null,
                "favorite":false,"nsfw":false,"section":"","comment_count":1,"topic":"No Topic",
                "topic_id":29,"images_count":11,
                "images":[{"id":"24nLu","datetime":1357856352,"type":"image/jpeg","animated":false,
                           "width":2592,"height":1944,"size":544702,"views":31829,
                           "bandwidth":17337319958,"link":"https://i.imgur.com/24nLu.jpg"}]}"#,
        )
        .unwrap();
        assert!(album.is_album);
        assert_eq!(album.privacy, Some(Privacy::Public));
        assert_eq!(album.section, None);
        assert_eq!(album.images.len(), 1);
        assert_eq!(album.images[0].bandwidth, 17337319958);
        assert_eq!(album.points, 1588);
    }
}
