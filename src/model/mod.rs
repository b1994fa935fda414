//! Domain model for exported playlists
//!
//! These types are independent of the JSON layout stored in the
//! client database and of the CSV layout written on export.

mod playlist;
mod row;
mod track;

pub use playlist::{Playlist, PlaylistKind};
pub use row::{ExportRow, CSV_HEADER};
pub use track::Track;
