//! # Spotify Integration Module
//!
//! Thin client for the two Spotify endpoints plbackup needs:
//!
//! ```text
//! link ──► utils::extract_id ──► playlist id
//! credentials ──► POST /api/token ──► bearer token
//! playlist id + token ──► GET /playlists/{id} ──► Playlist
//! ```
//!
//! - [`auth`] - client-credentials grant (`POST /api/token`), no user
//!   authorization and no refresh: one exchange per call.
//! - [`playlist`] - playlist metadata and track list (`GET /playlists/{id}`).
//!   Only the first page of tracks the API returns is used.
//!
//! Both endpoints are configurable through [`Endpoints`] so the client can be
//! pointed at a local mock server. Every request goes through one shared
//! `reqwest::Client` with an explicit timeout. Nothing is retried: transport
//! failures, unexpected status codes and undecodable bodies are all returned
//! to the caller as [`Error`] values.

pub mod auth;
pub mod playlist;

use std::time::Duration;

use reqwest::Client;

use crate::{
    config,
    error::{Error, Res},
    types::{Credentials, Playlist},
    utils,
};

/// Base URLs for the token endpoint and the Web API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub api_url: String,
    pub token_url: String,
}

impl Endpoints {
    pub fn from_config() -> Self {
        Self {
            api_url: config::spotify_apiurl(),
            token_url: config::spotify_apitoken_url(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_url: config::DEFAULT_SPOTIFY_API_URL.to_string(),
            token_url: config::DEFAULT_SPOTIFY_API_TOKEN_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    endpoints: Endpoints,
}

impl SpotifyClient {
    pub fn new(endpoints: Endpoints) -> Res<Self> {
        Self::with_timeout(
            endpoints,
            Duration::from_secs(config::DEFAULT_HTTP_TIMEOUT_SECS),
        )
    }

    pub fn with_timeout(endpoints: Endpoints, timeout: Duration) -> Res<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoints })
    }

    /// Builds a client from the environment configuration.
    pub fn from_config() -> Res<Self> {
        Self::with_timeout(Endpoints::from_config(), config::http_timeout()?)
    }
}

/// Resolves a sharing link into a fully decoded playlist.
///
/// The identifier is extracted before any network traffic, so an invalid
/// link fails with `Error::InvalidInput` without contacting Spotify. A token
/// response without an access token is reported as `Error::TokenUnavailable`.
pub async fn fetch_playlist_from_link(
    client: &SpotifyClient,
    link: &str,
    creds: &Credentials,
) -> Res<Playlist> {
    let id =
        utils::extract_id(link).ok_or_else(|| Error::InvalidInput(link.trim().to_string()))?;

    let token = client
        .get_token(creds)
        .await?
        .ok_or(Error::TokenUnavailable)?;

    client.fetch_playlist(&id, &token).await
}
