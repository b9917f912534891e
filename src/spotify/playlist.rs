use reqwest::StatusCode;
use url::Url;

use crate::{
    error::{Error, Res},
    spotify::SpotifyClient,
    types::{Playlist, Token},
};

impl SpotifyClient {
    /// Fetches a playlist and its track list.
    ///
    /// Issues `GET {api_url}/playlists/{id}` with the bearer token and decodes
    /// the body strictly: a response missing `id`, `name`, `description`,
    /// `tracks.items` or any track's `name`/`artists` fails as
    /// `Error::Decode` rather than producing a partial playlist. Fields the
    /// API sends beyond these are ignored.
    ///
    /// Only the tracks included in the response are returned; subsequent
    /// pages of large playlists are not requested.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidPlaylistId` - `id` cannot be placed in a request path
    /// - `Error::InvalidUrl` - the configured API base is not a URL
    /// - `Error::Transport` - the request could not be sent or timed out
    /// - `Error::InvalidResponse` - any status other than 200
    /// - `Error::Decode` - the body does not have the playlist shape
    pub async fn fetch_playlist(&self, id: &str, token: &Token) -> Res<Playlist> {
        let url = self.playlist_url(id)?;
        log::debug!("fetching playlist from {}", url);

        let response = self
            .http
            .get(url)
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        let status = response.status();
        log::debug!("playlist endpoint answered {}", status);
        if status != StatusCode::OK {
            return Err(Error::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let playlist: Playlist = serde_json::from_slice(&body)?;

        Ok(playlist.with_item_keys())
    }

    fn playlist_url(&self, id: &str) -> Res<Url> {
        if !is_valid_playlist_id(id) {
            return Err(Error::InvalidPlaylistId(id.to_string()));
        }

        let api_url = &self.endpoints.api_url;
        let invalid_base = || Error::InvalidUrl(format!("{} cannot be used as a base", api_url));

        let mut url =
            Url::parse(api_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", api_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| invalid_base())?
            .pop_if_empty()
            .push("playlists")
            .push(id);

        Ok(url)
    }
}

fn is_valid_playlist_id(id: &str) -> bool {
    !id.is_empty()
        && !id
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace() || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spotify::Endpoints;

    fn client(api_url: &str) -> SpotifyClient {
        SpotifyClient::new(Endpoints {
            api_url: api_url.to_string(),
            token_url: "http://localhost/api/token".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn playlist_url_appends_to_versioned_base() {
        let url = client("https://api.spotify.com/v1")
            .playlist_url("37i9dQZF1DXcBWIGoYBM5M")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.spotify.com/v1/playlists/37i9dQZF1DXcBWIGoYBM5M"
        );
    }

    #[test]
    fn playlist_url_tolerates_trailing_slash() {
        let url = client("http://127.0.0.1:9000/").playlist_url("abc").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/playlists/abc");
    }

    #[test]
    fn malformed_ids_are_rejected_before_any_request() {
        let c = client("https://api.spotify.com/v1");
        for id in ["", "a/b", "abc?si=1", "abc#x", "with space"] {
            match c.playlist_url(id) {
                Err(Error::InvalidPlaylistId(got)) => assert_eq!(got, id),
                other => panic!("expected InvalidPlaylistId for {:?}, got {:?}", id, other),
            }
        }
    }

    #[test]
    fn unusable_base_is_invalid_url() {
        let err = client("not a url").playlist_url("abc").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
