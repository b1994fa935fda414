use super::{Playlist, Track};
use serde::Serialize;

/// Column header written at the top of every exported CSV
pub const CSV_HEADER: [&str; 6] = ["序号", "标题", "歌手", "专辑", "列表名称", "歌单类型"];

/// One flattened CSV row: a track in the context of its playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    /// 1-based position among the playlist's exported tracks
    pub sequence: usize,
    pub title: String,
    pub artists: String,
    pub album: String,
    pub playlist_name: String,
    pub playlist_type: &'static str,
}

impl ExportRow {
    pub fn new(sequence: usize, track: &Track, playlist: &Playlist) -> Self {
        Self {
            sequence,
            title: track.title.clone(),
            artists: track.artist_line(),
            album: track.album.clone().unwrap_or_default(),
            playlist_name: playlist.name.clone(),
            playlist_type: playlist.type_label(),
        }
    }

    /// Number tracks 1..=n in the order given
    pub fn from_tracks(tracks: &[Track], playlist: &Playlist) -> Vec<Self> {
        tracks
            .iter()
            .enumerate()
            .map(|(i, track)| Self::new(i + 1, track, playlist))
            .collect()
    }
}
