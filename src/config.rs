//! Configuration management for plbackup.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the platform-specific local data directory:
//!
//! - Linux: `~/.local/share/plbackup/.env`
//! - macOS: `~/Library/Application Support/plbackup/.env`
//! - Windows: `%LOCALAPPDATA%/plbackup/.env`
//!
//! Variables already present in the environment take precedence over the file.
//! Only the client credentials are required; every endpoint and path has a
//! default.

use std::{env, path::PathBuf, time::Duration};

use crate::{
    error::{Error, Res},
    types::Credentials,
};

pub const APP_DIR: &str = "plbackup";

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 20;
pub const EXPORT_FILE_NAME: &str = "playlist.csv";

const CLIENT_ID_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
const TIMEOUT_VAR: &str = "PLBACKUP_HTTP_TIMEOUT_SECS";
const EXPORT_DIR_VAR: &str = "PLBACKUP_EXPORT_DIR";

/// Loads environment variables from the `.env` file in the local data directory.
///
/// Creates the directory if needed so users know where to put the file. A
/// missing `.env` is not an error: credentials may come from the environment
/// directly. A file that exists but cannot be parsed is reported.
///
/// # Example
///
/// ```
/// use plbackup::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Res<()> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if !path.is_file() {
        log::debug!("no env file at {}", path.display());
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
    log::debug!("loaded env file {}", path.display());
    Ok(())
}

pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(".env");
    path
}

/// Returns the Spotify client credentials from the environment.
///
/// # Errors
///
/// `Error::Config` naming the variable when either value is missing or blank.
pub fn spotify_credentials() -> Res<Credentials> {
    credentials_from(optional_var)
}

fn credentials_from<F>(lookup: F) -> Res<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |name: &str| {
        lookup(name).ok_or_else(|| Error::Config(format!("{} must be set", name)))
    };

    Ok(Credentials::new(
        required(CLIENT_ID_VAR)?,
        required(CLIENT_SECRET_VAR)?,
    ))
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    optional_var("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the token endpoint used for the client-credentials grant.
pub fn spotify_apitoken_url() -> String {
    optional_var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string())
}

/// Returns the request timeout applied to every HTTP call.
///
/// # Errors
///
/// `Error::Config` when `PLBACKUP_HTTP_TIMEOUT_SECS` is set but not a
/// positive integer.
pub fn http_timeout() -> Res<Duration> {
    http_timeout_from(optional_var)
}

fn http_timeout_from<F>(lookup: F) -> Res<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(TIMEOUT_VAR) {
        None => Ok(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)),
        Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(Error::Config(format!(
                "{} must be a positive number of seconds, got {:?}",
                TIMEOUT_VAR, raw
            ))),
        },
    }
}

/// Returns the directory the CSV export is written to.
///
/// `PLBACKUP_EXPORT_DIR` wins; otherwise the user's documents directory, then
/// the local data directory, then the current directory, each with a
/// `plbackup` subdirectory.
pub fn export_dir() -> PathBuf {
    export_dir_from(optional_var)
}

fn export_dir_from<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(EXPORT_DIR_VAR) {
        return PathBuf::from(dir);
    }

    let mut dir = dirs::document_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    dir.push(APP_DIR);
    dir
}

pub fn default_export_path() -> PathBuf {
    export_dir().join(EXPORT_FILE_NAME)
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::ErrorKind;

    fn lookup_in(vars: &HashMap<&str, &str>) -> impl Fn(&str) -> Option<String> {
        move |name: &str| vars.get(name).map(|v| v.to_string())
    }

    #[test]
    fn credentials_from_complete_environment() {
        let vars = HashMap::from([(CLIENT_ID_VAR, "id"), (CLIENT_SECRET_VAR, "secret")]);
        let creds = credentials_from(lookup_in(&vars)).unwrap();
        assert_eq!(creds, Credentials::new("id", "secret"));
    }

    #[test]
    fn missing_secret_is_a_config_error() {
        let vars = HashMap::from([(CLIENT_ID_VAR, "id")]);
        let err = credentials_from(lookup_in(&vars)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains(CLIENT_SECRET_VAR));
    }

    #[test]
    fn timeout_defaults_when_unset() {
        let vars = HashMap::new();
        assert_eq!(
            http_timeout_from(lookup_in(&vars)).unwrap(),
            Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)
        );
    }

    #[test]
    fn timeout_reads_seconds() {
        let vars = HashMap::from([(TIMEOUT_VAR, "45")]);
        assert_eq!(
            http_timeout_from(lookup_in(&vars)).unwrap(),
            Duration::from_secs(45)
        );
    }

    #[test]
    fn zero_or_garbage_timeout_is_a_config_error() {
        for raw in ["0", "ten", "-5", "1.5"] {
            let vars = HashMap::from([(TIMEOUT_VAR, raw)]);
            let err = http_timeout_from(lookup_in(&vars)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Config, "value {:?}", raw);
            assert!(err.to_string().contains(TIMEOUT_VAR));
        }
    }

    #[test]
    fn export_dir_override_wins() {
        let vars = HashMap::from([(EXPORT_DIR_VAR, "/srv/backups")]);
        assert_eq!(export_dir_from(lookup_in(&vars)), PathBuf::from("/srv/backups"));
    }

    #[test]
    fn export_dir_defaults_to_app_subdirectory() {
        let vars = HashMap::new();
        assert!(export_dir_from(lookup_in(&vars)).ends_with(APP_DIR));
    }

    #[test]
    fn export_path_ends_with_csv_name() {
        assert!(default_export_path().ends_with(EXPORT_FILE_NAME));
    }
}
