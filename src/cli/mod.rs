//! # CLI Module
//!
//! User-facing commands of plbackup. Each command resolves errors itself: it
//! reports them with the crate's output macros and exits non-zero, so
//! `main` only dispatches.
//!
//! | Command | Network | Writes files |
//! |---|---|---|
//! | `id` | no | no |
//! | `show` | token + playlist | no |
//! | `backup` | token + playlist | the CSV export |

mod backup;
mod id;
mod show;

pub use backup::backup;
pub use id::id;
pub use show::show;

use std::time::Duration;

use chrono::{Local, Timelike};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error, info,
    spotify::{self, SpotifyClient},
    types::Playlist,
    utils,
};

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Greeting printed before a fetch, or `None` when stdout carries data.
fn greeting_line(hour: u32, quiet: bool) -> Option<&'static str> {
    if quiet { None } else { Some(utils::greeting(hour)) }
}

/// Fetches the playlist behind `link`, exiting with an error message on failure.
///
/// With `quiet` nothing is printed to stdout; errors and the spinner still go
/// to stderr.
async fn load_playlist(link: &str, quiet: bool) -> Playlist {
    if let Some(greeting) = greeting_line(Local::now().hour(), quiet) {
        info!("{}", greeting);
    }

    let Some(id) = utils::extract_id(link) else {
        error!("Invalid playlist link: {}", link.trim());
    };

    let creds = match config::spotify_credentials() {
        Ok(creds) => creds,
        Err(e) => error!(
            "{}\nAdd the Spotify client credentials to {}",
            e,
            config::env_file_path().display()
        ),
    };

    let client = match SpotifyClient::from_config() {
        Ok(client) => client,
        Err(e) => error!("Cannot create Spotify client. Err: {}", e),
    };

    let pb = spinner(format!("Fetching playlist {}...", id));
    let result = spotify::fetch_playlist_from_link(&client, link, &creds).await;
    pb.finish_and_clear();

    match result {
        Ok(playlist) => playlist,
        Err(e) => error!("Cannot fetch playlist {}. Err: {}", id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_fetch_prints_no_greeting() {
        for hour in 0..24 {
            assert_eq!(greeting_line(hour, true), None);
        }
    }

    #[test]
    fn normal_fetch_greets_by_hour() {
        assert_eq!(greeting_line(9, false), Some("morning."));
        assert_eq!(greeting_line(23, false), Some("good.night."));
    }
}
