use tabled::Table;

use crate::{
    info,
    types::{Playlist, TrackTableRow},
    warning,
};

use super::load_playlist;

pub async fn show(link: &str) {
    let playlist = load_playlist(link, false).await;
    print_playlist(&playlist);
}

pub(super) fn print_playlist(playlist: &Playlist) {
    info!("{} ({} tracks)", playlist.name, playlist.track_count());
    if !playlist.description.is_empty() {
        println!("{}", playlist.description);
    }

    if playlist.tracks.items.is_empty() {
        warning!("Playlist {} has no tracks", playlist.name);
        return;
    }

    let rows: Vec<TrackTableRow> = playlist.tracks.items.iter().map(TrackTableRow::from).collect();
    println!("{}", Table::new(rows));
}
