use chrono::Utc;
use reqwest::{StatusCode, header::AUTHORIZATION};
use serde_json::Value;
use url::Url;

use crate::{
    error::{Error, Res},
    spotify::SpotifyClient,
    types::{Credentials, Token},
    utils,
};

impl SpotifyClient {
    /// Exchanges client credentials for an access token.
    ///
    /// Sends `grant_type=client_credentials` to the token endpoint with a
    /// Basic `Authorization` header built from the client id and secret.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Token))` - the endpoint answered 200 with an `access_token`
    /// - `Ok(None)` - the endpoint answered 200 but no token could be read
    ///   from the body; the caller decides how to handle the absence
    ///
    /// # Errors
    ///
    /// - `Error::InvalidUrl` - the configured token endpoint is not a URL
    /// - `Error::Transport` - the request could not be sent or timed out
    /// - `Error::InvalidRequest` - any status other than 200, e.g. rejected
    ///   credentials
    ///
    /// Every call performs a fresh exchange; tokens are neither cached nor
    /// refreshed.
    pub async fn get_token(&self, creds: &Credentials) -> Res<Option<Token>> {
        let token_url = &self.endpoints.token_url;
        let url = Url::parse(token_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", token_url, e)))?;

        log::debug!("requesting client-credentials token from {}", url);

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, utils::basic_auth_header(creds))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        log::debug!("token endpoint answered {}", status);
        if status != StatusCode::OK {
            return Err(Error::InvalidRequest {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let token = parse_token(&body);
        if token.is_none() {
            log::warn!("token response did not contain an access token");
        }

        Ok(token)
    }
}

fn parse_token(body: &[u8]) -> Option<Token> {
    let json: Value = serde_json::from_slice(body).ok()?;
    let access_token = json["access_token"].as_str().filter(|t| !t.is_empty())?;

    Some(Token {
        access_token: access_token.to_string(),
        token_type: json["token_type"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or_default(),
        obtained_at: Utc::now().timestamp() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_token_response() {
        let body = br#"{"access_token":"abc","token_type":"Bearer","expires_in":3600}"#;
        let token = parse_token(body).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
        assert!(token.obtained_at > 0);
    }

    #[test]
    fn missing_or_empty_access_token_yields_none() {
        assert!(parse_token(br#"{"token_type":"Bearer"}"#).is_none());
        assert!(parse_token(br#"{"access_token":""}"#).is_none());
        assert!(parse_token(br#"{"access_token":42}"#).is_none());
        assert!(parse_token(b"not json").is_none());
    }
}
