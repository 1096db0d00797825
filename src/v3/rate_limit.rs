/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::client::header_u64;
use crate::v3::errors::ImgurError;
use crate::v3::{ApiResponse, Client};
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Holds the current rate limits for the client and user.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#rate-limits) for more details.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RateLimit {
    #[serde(rename = "UserLimit")]
    pub user_limit: u64,

    #[serde(rename = "UserRemaining")]
    pub user_remaining: u64,

    #[serde(rename = "UserReset", with = "chrono::serde::ts_seconds")]
    pub user_reset: DateTime<Utc>,

    #[serde(rename = "ClientLimit")]
    pub client_limit: u64,

    #[serde(rename = "ClientRemaining")]
    pub client_remaining: u64,
}

impl RateLimit {
    const BASE_URI: &'static str = "credits";

    /// Returns the current rate limit from the credits endpoint
    pub async fn current(client: &Client) -> Result<ApiResponse<Self>, ImgurError> {
        client.get::<Self>(Self::BASE_URI).await
    }

    /// Reads the rate limit headers returned with every API response.
    /// Returns None unless all of them are present.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let user_reset = header_u64(headers, "X-RateLimit-UserReset")?;
        Some(Self {
            user_limit: header_u64(headers, "X-RateLimit-UserLimit")?,
            user_remaining: header_u64(headers, "X-RateLimit-UserRemaining")?,
            user_reset: DateTime::from_timestamp(i64::try_from(user_reset).ok()?, 0)?,
            client_limit: header_u64(headers, "X-RateLimit-ClientLimit")?,
            client_remaining: header_u64(headers, "X-RateLimit-ClientRemaining")?,
        })
    }
}

impl Client {
    /// Returns the current rate limit
    pub async fn rate_limit(&self) -> Result<ApiResponse<RateLimit>, ImgurError> {
        RateLimit::current(self).await
    }
}
