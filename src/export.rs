//! CSV export of a fetched playlist.
//!
//! [`to_csv`] only renders text; [`write_csv`] puts it on disk with
//! write-then-rename so an interrupted export never leaves a truncated file
//! under the final name.

use std::{
    ffi::{OsStr, OsString},
    io,
    path::{Path, PathBuf},
    process,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{error::Res, types::Playlist};

pub const CSV_HEADER: &str = "Track Name,Artists";

/// Renders the playlist as two-column CSV, one line per track in order.
///
/// Commas in track names become semicolons and artists are joined with
/// semicolons. No other quoting or escaping is applied, so names containing
/// quotes or newlines are written as-is.
pub fn to_csv(playlist: &Playlist) -> String {
    let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + playlist.track_count() * 32);
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for item in &playlist.tracks.items {
        let name = item.track.name.replace(',', ";");
        let artists = item.track.artist_names().collect::<Vec<_>>().join(";");
        csv.push_str(&format!("{},{}\n", name, artists));
    }

    csv
}

/// Atomically replaces `path` with `contents`.
///
/// Creates missing parent directories, writes a hidden sibling temp file,
/// flushes it to disk, renames it over `path` and flushes the directory entry.
/// On failure the temp file is removed and any previous file at `path` is left
/// untouched. Each call uses its own temp file, so concurrent exports to the
/// same path never write into each other's data; the last rename wins.
pub async fn write_csv(path: &Path, contents: &str) -> Res<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    async_fs::create_dir_all(parent).await?;

    let tmp = temp_path(path);
    let result = match write_synced(&tmp, contents.as_bytes()).await {
        Ok(()) => async_fs::rename(&tmp, path).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        let _ = async_fs::remove_file(&tmp).await;
        return Err(e.into());
    }

    sync_dir(parent).await?;

    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

async fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    async_fs::write(path, bytes).await?;
    let file = async_fs::OpenOptions::new().write(true).open(path).await?;
    file.sync_all().await
}

// the rename is only durable once the directory itself is flushed
#[cfg(unix)]
async fn sync_dir(dir: &Path) -> io::Result<()> {
    async_fs::File::open(dir).await?.sync_all().await
}

#[cfg(not(unix))]
async fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

fn temp_path(path: &Path) -> PathBuf {
    let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new("export")));
    name.push(format!(".{}.{}.tmp", process::id(), seq));
    path.with_file_name(name)
}
