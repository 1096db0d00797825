/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::RateLimit;
use num_enum::TryFromPrimitive;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Deserialize;

// Root Imgur API
pub const API_ORIGIN: &str = "https://api.imgur.com/3/";

// Imgur API as proxied through RapidAPI (commercial usage)
pub const RAPID_API_ORIGIN: &str = "https://imgur-apiv3.p.rapidapi.com/3/";
const RAPID_API_HOST: &str = "imgur-apiv3.p.rapidapi.com";

/// Credentials used for talking to the Imgur API.
///
/// The client id is always required. An access token is only needed for requests made on
/// behalf of a user. The RapidAPI key is only needed for the commercial endpoint.
#[derive(Default, Clone)]
pub struct Creds {
    pub(crate) client_id: String,
    pub(crate) access_token: Option<String>,
    pub(crate) rapid_api_key: Option<String>,
}

impl Creds {
    /// Creates credentials from the provided tokens
    pub fn from_tokens(
        client_id: &str,
        access_token: Option<&str>,
        rapid_api_key: Option<&str>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            access_token: access_token.filter(|v| !v.is_empty()).map(Into::into),
            rapid_api_key: rapid_api_key.filter(|v| !v.is_empty()).map(Into::into),
        }
    }

    /// Reads credentials from `IMGUR_CLIENT_ID`, `IMGUR_ACCESS_TOKEN` and `IMGUR_RAPIDAPI_KEY`.
    /// Only the client id is required to be set.
    pub fn from_env() -> Result<Self, ImgurError> {
        let client_id = std::env::var("IMGUR_CLIENT_ID").map_err(|_| ImgurError::MissingClientId())?;
        let access_token = std::env::var("IMGUR_ACCESS_TOKEN").ok();
        let rapid_api_key = std::env::var("IMGUR_RAPIDAPI_KEY").ok();
        Ok(Self::from_tokens(
            &client_id,
            access_token.as_deref(),
            rapid_api_key.as_deref(),
        ))
    }

    // Bearer token when acting as a user, otherwise anonymous client usage
    fn authorization(&self) -> String {
        match &self.access_token {
            Some(token) => format!("Bearer {token}"),
            None => format!("Client-ID {}", self.client_id),
        }
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("client_id", &"xxx")
            .field("access_token", &self.access_token.as_ref().map(|_| "xxx"))
            .field("rapid_api_key", &self.rapid_api_key.as_ref().map(|_| "xxx"))
            .finish()
    }
}

/// Directly communicates with the API.
#[derive(Clone)]
pub struct Client {
    creds: Creds,
    https_client: reqwest::Client,
}

impl Client {
    /// Creates a new Imgur client instance from the provided credentials
    pub fn new(creds: Creds) -> Result<Self, ImgurError> {
        Self::with_http_client(creds, reqwest::Client::new())
    }

    /// Creates a new client on top of a caller configured http client (timeouts, proxies, ...)
    pub fn with_http_client(creds: Creds, https_client: reqwest::Client) -> Result<Self, ImgurError> {
        if creds.client_id.is_empty() {
            log::error!("imgur client ID is empty");
            return Err(ImgurError::MissingClientId());
        }
        if creds.rapid_api_key.is_none() {
            log::info!("rapid api key is empty");
        }
        Ok(Self {
            creds,
            https_client,
        })
    }

    /// Origin all API endpoints are relative to
    pub fn api_origin(&self) -> &'static str {
        match self.creds.rapid_api_key {
            Some(_) => RAPID_API_ORIGIN,
            None => API_ORIGIN,
        }
    }

    pub(crate) fn creds(&self) -> &Creds {
        &self.creds
    }

    pub(crate) fn creds_mut(&mut self) -> &mut Creds {
        &mut self.creds
    }

    pub(crate) fn https_client(&self) -> &reqwest::Client {
        &self.https_client
    }

    /// Performs a get request to the given endpoint (relative to [`Client::api_origin`])
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<ApiResponse<T>, ImgurError> {
        let req_url = url::Url::parse(self.api_origin())?.join(endpoint)?;
        log::debug!("Requesting URL {}", req_url);
        let req = self.https_client.get(req_url);
        self.send(req).await
    }

    /// Performs a post request with a form encoded body
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: &[(&str, &str)],
    ) -> Result<ApiResponse<T>, ImgurError> {
        let req_url = url::Url::parse(self.api_origin())?.join(endpoint)?;
        log::debug!("Posting to URL {}", req_url);
        let req = self
            .https_client
            .post(req_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(encode_form(form));
        self.send(req).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<ApiResponse<T>, ImgurError> {
        let mut req = req
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.creds.authorization());
        if let Some(key) = &self.creds.rapid_api_key {
            req = req
                .header("X-RapidAPI-Key", key)
                .header("X-RapidAPI-Host", RAPID_API_HOST);
        }

        let resp = req.send().await?;
        let http_status = resp.status().as_u16();
        let rate_limit = RateLimit::from_headers(resp.headers());
        let body = resp.bytes().await?;
        decode_response(http_status, &body, rate_limit)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("creds", &self.creds)
            .field("api_origin", &self.api_origin())
            .finish()
    }
}

/// A successful API response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// The decoded `data` member of the response
    pub payload: T,

    /// Status reported by the API for this request
    pub status: u16,

    /// Rate limit information from the response headers, if returned
    pub rate_limit: Option<RateLimit>,
}

impl<T> ApiResponse<T> {
    /// Converts the payload while keeping the status and rate limit information
    pub fn map<U>(self, op: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            payload: op(self.payload),
            status: self.status,
            rate_limit: self.rate_limit,
        }
    }
}

/// Status codes per the Imgur API docs
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u16)]
pub enum ApiStatusCode {
    Ok = 200,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    TooManyRequests = 429,
    InternalServerError = 500,
}

// Base expected response body to be returned from the API
#[derive(Deserialize, Debug)]
struct ResponseBody {
    #[serde(default)]
    data: serde_json::Value,

    success: bool,

    status: u16,
}

// Interprets a raw API response body
pub(crate) fn decode_response<T: DeserializeOwned>(
    http_status: u16,
    body: &[u8],
    rate_limit: Option<RateLimit>,
) -> Result<ApiResponse<T>, ImgurError> {
    let body = match serde_json::from_slice::<ResponseBody>(body) {
        Ok(body) => body,
        Err(err) if http_status >= 400 => {
            log::debug!("Non JSON error body with http status {}: {:?}", http_status, err);
            return Err(ImgurError::ApiResponse {
                status: http_status,
                message: format!("http status {http_status}"),
            });
        }
        Err(err) => return Err(ImgurError::ApiResponseMalformed(err)),
    };

    if !body.success {
        if body.status == ApiStatusCode::TooManyRequests as u16 {
            return Err(ImgurError::ApiResponseTooManyRequests());
        }
        let message = body
            .data
            .get("error")
            .and_then(error_message)
            .unwrap_or_else(|| format!("request failed with status {}", body.status));
        return Err(ImgurError::ApiResponse {
            status: body.status,
            message,
        });
    }

    let payload = serde_json::from_value::<T>(body.data).map_err(ImgurError::ApiResponseMalformed)?;
    Ok(ApiResponse {
        payload,
        status: body.status,
        rate_limit,
    })
}

// The error member is either a plain string or an object with a message
fn error_message(error: &serde_json::Value) -> Option<String> {
    match error {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Object(o) => o.get("message").and_then(|m| m.as_str()).map(Into::into),
        _ => None,
    }
}

fn encode_form(form: &[(&str, &str)]) -> String {
    form.iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

// Numeric header value, None when missing or not a number
pub(crate) fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
