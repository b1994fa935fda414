//! NetEase Cloud Music client database
//!
//! The desktop client keeps its library in an SQLite file (`webdb.dat`).
//! Playlists and tracks are stored as JSON blobs, one per row; playlist
//! membership lives in a separate ordering table.

mod database;
mod model;
mod source;

pub use database::WebDb;
pub use source::{PlaylistSource, RawRecord};

use crate::error::{ParseError, RecordKind};
use crate::model::{Playlist, Track};
use model::{PlaylistRecord, TrackRecord};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a `web_playlist` row into a [`Playlist`]
pub fn parse_playlist(raw: &RawRecord) -> Result<Playlist, ParseError> {
    let record: PlaylistRecord = decode(raw, RecordKind::Playlist)?;
    Ok(record.into_playlist(raw.id))
}

/// Parse a `web_track` row into a [`Track`]
pub fn parse_track(raw: &RawRecord) -> Result<Track, ParseError> {
    let record: TrackRecord = decode(raw, RecordKind::Track)?;
    Ok(record.into_track(raw.id))
}

fn decode<T: DeserializeOwned>(raw: &RawRecord, kind: RecordKind) -> Result<T, ParseError> {
    let payload = raw
        .payload
        .as_deref()
        .ok_or(ParseError::MissingPayload { kind, id: raw.id })?;

    // Syntax first, so a structurally odd but valid document is reported
    // separately from text that is not JSON at all
    let value: Value = serde_json::from_slice(payload).map_err(|source| ParseError::InvalidJson {
        kind,
        id: raw.id,
        source,
    })?;

    serde_json::from_value(value).map_err(|source| ParseError::UnexpectedShape {
        kind,
        id: raw.id,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlaylistKind;

    fn raw(id: i64, json: &str) -> RawRecord {
        RawRecord::new(id, json)
    }

    #[test]
    fn test_parse_subscribed_playlist() {
        let playlist = parse_playlist(&raw(5, r#"{"name":"Road Trip","subscribed":true}"#)).unwrap();
        assert_eq!(playlist.id, 5);
        assert_eq!(playlist.name, "Road Trip");
        assert_eq!(playlist.kind, PlaylistKind::Subscribed);
    }

    #[test]
    fn test_playlist_defaults() {
        let playlist = parse_playlist(&raw(9, r#"{"trackCount": 3}"#)).unwrap();
        assert_eq!(playlist.name, "Unknown_Playlist_9");
        assert_eq!(playlist.kind, PlaylistKind::Created);

        let nulls = parse_playlist(&raw(9, r#"{"name":null,"subscribed":null}"#)).unwrap();
        assert_eq!(nulls.name, "Unknown_Playlist_9");
        assert_eq!(nulls.kind, PlaylistKind::Created);
    }

    #[test]
    fn test_malformed_playlist_json() {
        let err = parse_playlist(&raw(3, "{not json")).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidJson {
                kind: RecordKind::Playlist,
                id: 3,
                ..
            }
        ));
        assert_eq!(err.record_id(), 3);
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let err = parse_playlist(&raw(1, "[1, 2, 3]")).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedShape { id: 1, .. }));
        assert!(parse_track(&raw(1, "\"just a string\"")).is_err());
    }

    #[test]
    fn test_subscribed_uses_truthiness() {
        let cases = [
            ("1", PlaylistKind::Subscribed),
            ("0", PlaylistKind::Created),
            ("\"yes\"", PlaylistKind::Subscribed),
            ("\"\"", PlaylistKind::Created),
            ("[]", PlaylistKind::Created),
            ("{\"a\":1}", PlaylistKind::Subscribed),
            ("0.5", PlaylistKind::Subscribed),
        ];
        for (value, kind) in cases {
            let json = format!(r#"{{"name":"Fav","subscribed":{}}}"#, value);
            let playlist = parse_playlist(&raw(1, &json)).unwrap();
            assert_eq!(playlist.kind, kind, "subscribed = {}", value);
        }
    }

    #[test]
    fn test_non_string_names_are_kept_as_text() {
        let playlist = parse_playlist(&raw(2, r#"{"name":2024}"#)).unwrap();
        assert_eq!(playlist.name, "2024");

        let track = parse_track(&raw(
            3,
            r#"{"name":7,"artists":[{"name":true}],"album":{"name":1.5}}"#,
        ))
        .unwrap();
        assert_eq!(track.title, "7");
        assert_eq!(track.artists, vec!["true"]);
        assert_eq!(track.album.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_invalid_utf8_payload_is_a_parse_error() {
        let record = RawRecord {
            id: 6,
            payload: Some(vec![b'{', 0xFF, b'}']),
        };
        let err = parse_track(&record).unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson { id: 6, .. }));
    }

    #[test]
    fn test_missing_payload() {
        let err = parse_track(&RawRecord { id: 4, payload: None }).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingPayload {
                kind: RecordKind::Track,
                id: 4
            }
        ));
    }

    #[test]
    fn test_parse_track() {
        let json = r#"{
            "id": 100,
            "name": "晴天",
            "artists": [{"id": 1, "name": "周杰伦"}, {"name": "Guest"}],
            "album": {"id": 2, "name": "叶惠美", "picUrl": "http://example.invalid"}
        }"#;
        let track = parse_track(&raw(100, json)).unwrap();
        assert_eq!(track.id, 100);
        assert_eq!(track.title, "晴天");
        assert_eq!(track.artists, vec!["周杰伦", "Guest"]);
        assert_eq!(track.album.as_deref(), Some("叶惠美"));
    }

    #[test]
    fn test_track_defaults() {
        let track = parse_track(&raw(8, r#"{"artists":[{"id":5}],"album":null}"#)).unwrap();
        assert_eq!(track.title, "Unknown");
        assert_eq!(track.artists, vec!["Unknown"]);
        assert_eq!(track.album, None);

        let bare = parse_track(&raw(8, "{}")).unwrap();
        assert!(bare.artists.is_empty());
        assert_eq!(bare.album, None);

        let no_album_name = parse_track(&raw(8, r#"{"album":{}}"#)).unwrap();
        assert_eq!(no_album_name.album, None);
    }
}
