//! Error types for the record parse step

use std::fmt;
use thiserror::Error;

/// Which table a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Playlist,
    Track,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Playlist => f.write_str("playlist"),
            RecordKind::Track => f.write_str("track"),
        }
    }
}

/// Failure to turn a stored JSON payload into a model type
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{kind} {id} has no JSON payload")]
    MissingPayload { kind: RecordKind, id: i64 },

    #[error("could not parse JSON for {kind} {id}: {source}")]
    InvalidJson {
        kind: RecordKind,
        id: i64,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON that is not a record object
    #[error("unexpected JSON structure for {kind} {id}: {source}")]
    UnexpectedShape {
        kind: RecordKind,
        id: i64,
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    pub fn record_id(&self) -> i64 {
        match self {
            ParseError::MissingPayload { id, .. }
            | ParseError::InvalidJson { id, .. }
            | ParseError::UnexpectedShape { id, .. } => *id,
        }
    }
}
