use std::fmt;

use serde::{Deserialize, Deserializer, de};
use tabled::Tabled;

/// Client credentials for the Spotify client-credentials grant.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

// keep the secret out of logs and panic messages
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Access token returned by the token endpoint.
///
/// Only `access_token` is required; the rest is informational since the
/// token is fetched once per session and never refreshed.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Playlist {
    #[serde(deserialize_with = "non_empty_string")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub tracks: Tracks,
}

impl Playlist {
    pub fn track_count(&self) -> usize {
        self.tracks.items.len()
    }

    /// Assigns each item its position as a local key.
    pub(crate) fn with_item_keys(mut self) -> Self {
        for (idx, item) in self.tracks.items.iter_mut().enumerate() {
            item.id = idx;
        }
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tracks {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackItem {
    /// Synthetic key used for listing only; the API provides none.
    #[serde(skip)]
    pub id: usize,
    pub track: Track,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub name: String,
    pub artists: Vec<Artist>,
}

impl Track {
    pub fn artist_names(&self) -> impl Iterator<Item = &str> {
        self.artists.iter().map(|a| a.name.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub name: String,
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Err(de::Error::invalid_value(
            de::Unexpected::Str(&value),
            &"a non-empty playlist id",
        ));
    }
    Ok(value)
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub artists: String,
}

impl From<&TrackItem> for TrackTableRow {
    fn from(item: &TrackItem) -> Self {
        TrackTableRow {
            position: item.id + 1,
            name: item.track.name.clone(),
            artists: item.track.artist_names().collect::<Vec<_>>().join(", "),
        }
    }
}
