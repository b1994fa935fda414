//! Source trait definitions

use anyhow::Result;

/// An `(id, JSON payload)` row as stored in the playlist or track table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub id: i64,

    /// Raw JSON bytes from a TEXT or BLOB cell, `None` when the cell is NULL
    pub payload: Option<Vec<u8>>,
}

impl RawRecord {
    pub fn new(id: i64, json: &str) -> Self {
        Self {
            id,
            payload: Some(json.as_bytes().to_vec()),
        }
    }
}

/// Read access to a playlist library - allows swapping the SQLite reader
/// for other backends
pub trait PlaylistSource {
    /// All playlist rows, fetched eagerly
    fn playlists(&self) -> Result<Vec<RawRecord>>;

    /// Track IDs of a playlist in their stored order
    fn track_ids(&self, playlist_id: i64) -> Result<Vec<i64>>;

    /// Look up one track row; `None` if the track table has no such ID
    fn track(&self, track_id: i64) -> Result<Option<RawRecord>>;

    /// Release the underlying resource at the end of a run
    fn close(self) -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}
