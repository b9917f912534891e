use base64::{Engine, engine::general_purpose::STANDARD};
use url::Url;

use crate::types::Credentials;

const PLAYLIST_SEGMENT: &str = "playlist";

/// Extracts the playlist identifier from a sharing link.
///
/// The link is first parsed as a URL and its path scanned for a `playlist`
/// segment; if that fails the raw string is split on `/` and scanned the same
/// way, which covers scheme-less input such as
/// `open.spotify.com/playlist/<id>`. The first `playlist` segment wins.
///
/// Any `?query` or `#fragment` attached to the identifier is dropped, so
/// `https://open.spotify.com/playlist/3cEYpjA9oz9GiPac4AsH4n?si=abc` yields
/// `3cEYpjA9oz9GiPac4AsH4n`.
///
/// Returns `None` when no `playlist` segment with a non-empty successor is
/// found.
pub fn extract_id(link: &str) -> Option<String> {
    let link = link.trim();

    if let Ok(url) = Url::parse(link) {
        if let Some(id) = find_playlist_id(url.path()) {
            return Some(id);
        }
    }

    find_playlist_id(link)
}

fn find_playlist_id(path: &str) -> Option<String> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    segments.find(|s| *s == PLAYLIST_SEGMENT)?;

    let candidate = segments.next()?;
    let id = candidate
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Builds the `Authorization` header value for the client-credentials grant.
pub fn basic_auth_header(creds: &Credentials) -> String {
    let raw = format!("{}:{}", creds.client_id, creds.client_secret);
    format!("Basic {}", STANDARD.encode(raw))
}

/// Time-of-day greeting shown before a backup starts.
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        6..=11 => "morning.",
        12..=16 => "afternoon.",
        17..=20 => "evening.",
        _ => "good.night.",
    }
}
