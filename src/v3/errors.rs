/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v3::{ApiStatusCode, ResourceKind, UrlShape};
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum ImgurError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Imgur client ID is empty")]
    MissingClientId(),

    #[error("Refresh token is empty")]
    MissingRefreshToken(),

    #[error("Client secret is empty")]
    MissingClientSecret(),

    #[error("API Response was error: {status}, msg: {message}")]
    ApiResponse { status: u16, message: String },

    #[error("API Response is a too many requests error")]
    ApiResponseTooManyRequests(),

    #[error("API Response is malformed: {0:?}")]
    ApiResponseMalformed(serde_json::Error),

    #[error("URL pattern matching for URL {0} failed")]
    UnrecognizedUrlShape(String),

    #[error("Could not find ID in URL {url}. Was going down the {shape} path")]
    IdentifierExtraction { url: String, shape: UrlShape },

    #[error("{probe} lookup failed{}", fallback_note(.fallback_from))]
    ProbeFailed {
        probe: ResourceKind,
        fallback_from: Option<ResourceKind>,
        #[source]
        source: Box<ImgurError>,
    },
}

impl ImgurError {
    /// HTTP status carried by this error, if a request got far enough to produce one.
    ///
    /// Errors raised before any request is sent (URL classification, missing
    /// credentials, ...) have no status.
    pub fn status(&self) -> Option<u16> {
        match self {
            ImgurError::Request(err) => err.status().map(|s| s.as_u16()),
            ImgurError::ApiResponse { status, .. } => Some(*status),
            ImgurError::ApiResponseTooManyRequests() => Some(ApiStatusCode::TooManyRequests as u16),
            ImgurError::ProbeFailed { source, .. } => source.status(),
            _ => None,
        }
    }

    /// The documented API status code for this error, if it carries a known one.
    pub fn status_code(&self) -> Option<ApiStatusCode> {
        self.status().and_then(|s| ApiStatusCode::try_from(s).ok())
    }
}

fn fallback_note(fallback_from: &Option<ResourceKind>) -> String {
    match fallback_from {
        Some(kind) => format!(" after falling back from {kind} lookup"),
        None => String::new(),
    }
}
