use std::{
    io::{self, Write},
    path::PathBuf,
};

use crate::{config, error, export, info, success, types::Playlist, warning};

use super::{load_playlist, show::print_playlist, spinner};

/// Fetches the playlist and writes it as CSV.
///
/// With `to_stdout` the CSV is the only thing printed to stdout, so it can be
/// redirected into a file. Otherwise it goes
/// to `output`, or to the default export path when none is given, replacing
/// any earlier export atomically.
pub async fn backup(link: &str, output: Option<PathBuf>, to_stdout: bool) {
    let playlist = load_playlist(link, to_stdout).await;

    if to_stdout {
        if let Err(e) = write_csv_to(io::stdout().lock(), &playlist) {
            error!("Cannot print CSV. Err: {}", e);
        }
        return;
    }

    let csv = export::to_csv(&playlist);

    print_playlist(&playlist);

    let path = output.unwrap_or_else(config::default_export_path);
    if path.exists() {
        warning!("Overwriting existing export at {}", path.display());
    }

    info!("Backing up {} tracks...", playlist.track_count());
    let pb = spinner(format!("Writing {}...", path.display()));
    let result = export::write_csv(&path, &csv).await;
    pb.finish_and_clear();

    if let Err(e) = result {
        error!("Cannot save CSV file to {}. Err: {}", path.display(), e);
    }

    success!("Finished backing up. CSV file saved to {}", path.display());
}

fn write_csv_to<W: Write>(mut out: W, playlist: &Playlist) -> io::Result<()> {
    out.write_all(export::to_csv(playlist).as_bytes())?;
    out.flush()
}
