/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::macros::obj_from_id;
use crate::v3::parsers::{from_empty_str_to_none, from_null_to_zero};
use crate::v3::{ApiResponse, Client};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Image API.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#2078c7e0-c2b8-4bc8-a646-6e544b087d0f) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Image {
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

    // Only returned when the image belongs to the requesting user
    pub deletehash: Option<String>,

    pub name: Option<String>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub section: Option<String>,

    pub link: String,

    pub gifv: Option<String>,

    pub mp4: Option<String>,

    pub mp4_size: Option<u64>,

    pub looping: Option<bool>,

    pub favorite: Option<bool>,

    pub nsfw: Option<bool>,

    pub vote: Option<String>,

    pub in_gallery: bool,

    pub account_url: Option<String>,

    pub account_id: Option<u64>,
}

impl Image {
    const BASE_URI: &'static str = "image/";

    /// Returns information for the specified image id
    pub async fn from_id(client: &Client, id: &str) -> Result<ApiResponse<Self>, ImgurError> {
        obj_from_id!(client, Self::BASE_URI, id, Self)
    }

    /// Downloads the image data this record links to
    pub async fn download(&self, client: &Client) -> Result<Bytes, ImgurError> {
        log::debug!("Downloading image {} from {}", self.id, self.link);
        let data = client
            .https_client()
            .get(self.link.as_str())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(data)
    }
}
