//! NetEase Playlist Exporter - NetEase Cloud Music playlists to CSV
//!
//! This library reads the NetEase Cloud Music desktop client's local
//! database and writes one CSV per playlist plus an aggregate CSV.

pub mod error;
pub mod export;
pub mod model;
pub mod netease;
pub mod validation;

pub use export::config::ExportConfig;
pub use export::pipeline::{ExportPipeline, ExportSummary};
pub use export::run;
pub use netease::{PlaylistSource, WebDb};
