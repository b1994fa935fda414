//! SQLite reader for `webdb.dat`

use super::source::{PlaylistSource, RawRecord};
use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use std::path::{Path, PathBuf};

const PLAYLISTS_SQL: &str = "SELECT pid, playlist FROM web_playlist";
const TRACK_IDS_SQL: &str = "SELECT tid FROM web_playlist_track WHERE pid = ?1 ORDER BY [order]";
const TRACK_SQL: &str = "SELECT track FROM web_track WHERE tid = ?1";

/// Read-only handle on the client database
pub struct WebDb {
    conn: Connection,
    path: PathBuf,
}

impl WebDb {
    /// Open the database read-only. Fails if the file does not exist.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open database: {:?}", path))?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }
}

impl PlaylistSource for WebDb {
    fn playlists(&self) -> Result<Vec<RawRecord>> {
        let mut stmt = self
            .conn
            .prepare(PLAYLISTS_SQL)
            .context("Failed to prepare playlist query")?;

        let rows = stmt.query_map([], |row| {
            Ok(RawRecord {
                id: row.get(0)?,
                payload: payload_at(row, 1)?,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read playlists")
    }

    fn track_ids(&self, playlist_id: i64) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare_cached(TRACK_IDS_SQL)?;
        let rows = stmt.query_map(params![playlist_id], |row| track_id_at(row, 0))?;

        let ids = rows
            .collect::<rusqlite::Result<Vec<Option<i64>>>>()
            .with_context(|| format!("Failed to read track list of playlist {}", playlist_id))?;

        // A NULL or non-numeric tid can never match a track row
        Ok(ids.into_iter().flatten().collect())
    }

    fn track(&self, track_id: i64) -> Result<Option<RawRecord>> {
        let mut stmt = self.conn.prepare_cached(TRACK_SQL)?;
        stmt.query_row(params![track_id], |row| {
            Ok(RawRecord {
                id: track_id,
                payload: payload_at(row, 0)?,
            })
        })
        .optional()
        .with_context(|| format!("Failed to look up track {}", track_id))
    }

    fn close(self) -> Result<()> {
        log::debug!("Closing database {:?}", self.path);
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close database")
    }
}

/// JSON payload bytes of a cell, whatever storage class SQLite gave it
fn payload_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Vec<u8>>> {
    let payload = match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Some(bytes.to_vec()),
        ValueRef::Integer(n) => Some(n.to_string().into_bytes()),
        ValueRef::Real(f) => Some(f.to_string().into_bytes()),
    };
    Ok(payload)
}

fn track_id_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<i64>> {
    let id = match row.get_ref(idx)? {
        ValueRef::Integer(n) => Some(n),
        ValueRef::Text(text) => std::str::from_utf8(text)
            .ok()
            .and_then(|t| t.trim().parse().ok()),
        ValueRef::Null | ValueRef::Real(_) | ValueRef::Blob(_) => None,
    };
    Ok(id)
}
