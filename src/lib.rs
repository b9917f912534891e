//! Spotify Playlist Backup Library
//!
//! This library resolves a Spotify playlist sharing link into its track list
//! and exports it as CSV. It includes modules for extracting playlist ids,
//! talking to the Spotify Web API with a client-credentials token, rendering
//! and atomically writing the CSV, and the command-line front end.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type and result alias
//! - `export` - CSV rendering and atomic file output
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Playlist id extraction and small helpers
//!
//! # Example
//!
//! ```
//! use plbackup::{config, export, spotify};
//!
//! #[tokio::main]
//! async fn main() -> plbackup::Res<()> {
//!     config::load_env().await?;
//!     let creds = config::spotify_credentials()?;
//!     let client = spotify::SpotifyClient::from_config()?;
//!     let playlist = spotify::fetch_playlist_from_link(
//!         &client,
//!         "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M",
//!         &creds,
//!     )
//!     .await?;
//!     print!("{}", export::to_csv(&playlist));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, ErrorKind, Res};

/// Prints a status line with a blue "o" marker to stdout.
///
/// Accepts the same arguments as `println!`.
///
/// ```
/// info!("Requesting access token...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a completion line with a green "✓" marker to stdout.
///
/// ```
/// success!("Finished backing up {}", playlist.name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error with a red "!" marker to stderr and exits with status 1.
///
/// Reserved for the command-line layer: library functions return
/// [`Error`] values instead. Code after the macro does not run.
///
/// ```
/// error!("Invalid playlist link: {}", link);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a recoverable problem with a yellow "!" marker to stderr.
///
/// ```
/// warning!("Overwriting existing export at {}", path.display());
/// warning!("Playlist {} has no tracks", name);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
