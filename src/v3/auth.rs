/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::Client;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};

// OAuth2 token endpoint, not part of the versioned API
pub const TOKEN_ENDPOINT: &str = "https://api.imgur.com/oauth2/token";

// Body sent to reissue an access token
#[derive(Serialize, Debug)]
struct RefreshTokenRequest<'a> {
    refresh_token: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
}

/// Tokens returned when an access token is reissued
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct AccessToken {
    pub access_token: String,

    /// Lifetime of the access token in seconds
    pub expires_in: u64,

    pub token_type: String,

    #[serde(default)]
    pub scope: Option<String>,

    /// Refresh token to use the next time the access token expires
    pub refresh_token: String,

    #[serde(default)]
    pub account_id: Option<u64>,

    #[serde(default)]
    pub account_username: Option<String>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"xxx")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("refresh_token", &"xxx")
            .field("account_id", &self.account_id)
            .field("account_username", &self.account_username)
            .finish()
    }
}

impl Client {
    /// Reissues an expired access token.
    ///
    /// On success the client uses the new access token for all further requests. The returned
    /// [`AccessToken`] holds the new refresh token which should be persisted by the caller.
    pub async fn refresh_access_token(
        &mut self,
        refresh_token: &str,
        client_secret: &str,
    ) -> Result<AccessToken, ImgurError> {
        if refresh_token.is_empty() {
            log::error!("Refresh token is empty");
            return Err(ImgurError::MissingRefreshToken());
        }
        if client_secret.is_empty() {
            log::error!("Client secret is empty");
            return Err(ImgurError::MissingClientSecret());
        }

        let body = RefreshTokenRequest {
            refresh_token,
            client_id: self.creds().client_id.as_str(),
            client_secret,
            grant_type: "refresh_token",
        };

        log::info!("Sending request to refresh access token");
        let resp = self
            .https_client()
            .post(TOKEN_ENDPOINT)
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;
        let http_status = resp.status().as_u16();
        let data = resp.bytes().await?;
        let token = parse_token_response(http_status, &data)?;

        log::info!(
            "Token was successfully updated and will be valid for the next {} seconds",
            token.expires_in
        );
        self.creds_mut().access_token = Some(token.access_token.clone());
        Ok(token)
    }
}

fn parse_token_response(http_status: u16, data: &[u8]) -> Result<AccessToken, ImgurError> {
    if http_status >= 400 {
        let message = serde_json::from_slice::<serde_json::Value>(data)
            .ok()
            .and_then(|v| v.get("data")?.get("error")?.as_str().map(Into::into))
            .unwrap_or_else(|| format!("token refresh failed with http status {http_status}"));
        return Err(ImgurError::ApiResponse {
            status: http_status,
            message,
        });
    }
    serde_json::from_slice::<AccessToken>(data).map_err(|err| {
        log::error!("Decoding token response failed: {err}");
        ImgurError::ApiResponseMalformed(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v3::Creds;

    #[test]
    fn parses_token_response() {
        let token = parse_token_response(
            200,
            br#"{"access_token":"new-access","expires_in":315360000,"token_type":"bearer","scope":null,"refresh_token":"new-refresh","account_id":384077,"account_username":"joshTest"}"#,
        )
        .unwrap();
        assert_eq!(token.access_token, "new-access");
        assert_eq!(token.refresh_token, "new-refresh");
        assert_eq!(token.account_id, Some(384077));
        assert!(!format!("{token:?}").contains("new-access"));
    }

    #[test]
    fn failed_refresh_keeps_status() {
        let err = parse_token_response(
            400,
            br#"{"data":{"error":"Invalid refresh token","request":"\/oauth2\/token","method":"POST"},"success":false,"status":400}"#,
        )
        .unwrap_err();
        match err {
            ImgurError::ApiResponse { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid refresh token");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_inputs_are_rejected_before_any_request() {
        let mut client = Client::new(Creds::from_tokens("cid", None, None)).unwrap();
        let err = client.refresh_access_token("", "secret").await.unwrap_err();
        assert!(matches!(err, ImgurError::MissingRefreshToken()));
        let err = client.refresh_access_token("refresh", "").await.unwrap_err();
        assert!(matches!(err, ImgurError::MissingClientSecret()));
        assert!(client.creds().access_token.is_none());
    }
}
