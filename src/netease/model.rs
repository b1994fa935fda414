//! JSON record shapes stored in the client database
//!
//! Only the fields the exporter reads are declared; everything else in
//! the payload is ignored. Scalar fields accept any JSON type the client
//! has been seen to write, so a valid document is rarely rejected.

use crate::model::{Playlist, PlaylistKind, Track};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const UNKNOWN: &str = "Unknown";

/// Payload of a `web_playlist.playlist` cell
#[derive(Debug, Deserialize)]
pub struct PlaylistRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "truthy")]
    pub subscribed: bool,
}

/// Payload of a `web_track.track` cell
#[derive(Debug, Deserialize)]
pub struct TrackRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    pub artists: Option<Vec<ArtistRecord>>,
    pub album: Option<AlbumRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AlbumRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

impl PlaylistRecord {
    pub fn into_playlist(self, id: i64) -> Playlist {
        Playlist {
            id,
            name: self.name.unwrap_or_else(|| Playlist::fallback_name(id)),
            kind: PlaylistKind::from_subscribed(self.subscribed),
        }
    }
}

impl TrackRecord {
    pub fn into_track(self, id: i64) -> Track {
        let artists = self
            .artists
            .unwrap_or_default()
            .into_iter()
            .map(|a| a.name.unwrap_or_else(|| UNKNOWN.to_string()))
            .collect();

        Track {
            id,
            title: self.name.unwrap_or_else(|| UNKNOWN.to_string()),
            artists,
            album: self.album.and_then(|a| a.name),
        }
    }
}

/// Truthiness of any JSON value: null, false, 0, "" and empty
/// containers are false
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let truth = match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    };
    Ok(truth)
}

/// Strings as-is, null as `None`, other values as their JSON text
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let text = match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    };
    Ok(text)
}
