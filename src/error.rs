//! Error types shared by every playlist backup operation.

use thiserror::Error;

/// Broad category of a failure.
///
/// Callers (and tests) use this to decide how to react without matching on
/// every variant: configuration problems are fatal for the token flow,
/// network and decode failures are recoverable, invalid input is reported
/// back to the user as an invalid link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Network,
    Decode,
    InvalidInput,
    Io,
}

#[derive(Error, Debug)]
pub enum Error {
    /// Credentials or other settings are missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// The link does not contain a playlist identifier
    #[error("Invalid playlist link: {0}")]
    InvalidInput(String),

    /// The identifier cannot be used to build a request URL
    #[error("Invalid playlist id: {0:?}")]
    InvalidPlaylistId(String),

    /// A configured endpoint is not a valid URL
    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token endpoint answered with something other than 200
    #[error("Token request rejected with status {status}")]
    InvalidRequest { status: u16 },

    /// The playlist endpoint answered with something other than 200
    #[error("Playlist request rejected with status {status}")]
    InvalidResponse { status: u16 },

    /// The token endpoint answered 200 but carried no access token
    #[error("No access token obtained")]
    TokenUnavailable,

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) | Error::InvalidUrl(_) => ErrorKind::Config,
            Error::InvalidInput(_) | Error::InvalidPlaylistId(_) => ErrorKind::InvalidInput,
            Error::Transport(_)
            | Error::InvalidRequest { .. }
            | Error::InvalidResponse { .. }
            | Error::TokenUnavailable => ErrorKind::Network,
            Error::Decode(_) => ErrorKind::Decode,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type for playlist backup operations.
pub type Res<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_are_network_failures() {
        assert_eq!(
            Error::InvalidRequest { status: 401 }.kind(),
            ErrorKind::Network
        );
        assert_eq!(
            Error::InvalidResponse { status: 404 }.kind(),
            ErrorKind::Network
        );
        assert_eq!(Error::TokenUnavailable.kind(), ErrorKind::Network);
    }

    #[test]
    fn decode_errors_keep_their_kind() {
        let err: Error = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn bad_ids_and_links_are_invalid_input() {
        assert_eq!(
            Error::InvalidPlaylistId("a/b".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            Error::InvalidInput("nothing".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(Error::Config("x".into()).kind(), ErrorKind::Config);
    }
}
