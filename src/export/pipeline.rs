//! Main export pipeline orchestration

use super::config::ExportConfig;
use super::organizer::OutputOrganizer;
use super::writer;
use crate::model::{ExportRow, Playlist, Track};
use crate::netease::{parse_playlist, parse_track, PlaylistSource, RawRecord};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::PathBuf;

/// What happened to one playlist during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistOutcome {
    /// CSV written with `rows` data rows
    Exported {
        playlist_id: i64,
        name: String,
        path: PathBuf,
        rows: usize,
    },

    /// Nothing written for this playlist
    Skipped { playlist_id: i64, reason: String },
}

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Directory the files were written to
    pub output_dir: PathBuf,

    /// Number of rows returned by the playlist query
    pub playlists_found: usize,

    /// One entry per playlist, in processing order
    pub outcomes: Vec<PlaylistOutcome>,

    /// Rows collected into the aggregate export
    pub total_rows: usize,

    /// Aggregate file, `None` if writing it failed
    pub summary_path: Option<PathBuf>,
}

impl ExportSummary {
    pub fn exported_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, PlaylistOutcome::Exported { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.exported_count()
    }
}

/// Main export pipeline
pub struct ExportPipeline<S: PlaylistSource> {
    config: ExportConfig,
    organizer: OutputOrganizer,
    source: S,
}

impl<S: PlaylistSource> ExportPipeline<S> {
    /// Create a new export pipeline reading from `source`
    pub fn new(config: ExportConfig, source: S) -> Self {
        let organizer =
            OutputOrganizer::new(config.output_dir.clone(), config.summary_file_name.clone());

        Self {
            config,
            organizer,
            source,
        }
    }

    /// Run the complete export process
    ///
    /// Only a failure to create the output directory or to list the
    /// playlists is returned as an error. Problems with individual
    /// playlists are logged and recorded in the summary.
    pub fn export(&self) -> Result<ExportSummary> {
        log::info!("Starting playlist export");
        log::info!("Target: {:?}", self.config.output_dir);

        self.organizer.init()?;

        log::info!("Executing query...");
        let playlists = self
            .source
            .playlists()
            .context("Failed to query playlists")?;
        log::info!("Found {} playlists.", playlists.len());

        let mut aggregate = Vec::new();
        let mut outcomes = Vec::with_capacity(playlists.len());
        let mut written: HashSet<PathBuf> = HashSet::new();

        for raw in &playlists {
            let outcome = match self.export_playlist(raw, &mut aggregate) {
                Ok(outcome) => outcome,
                Err(e) => {
                    log::error!("Error processing playlist {}: {:#}", raw.id, e);
                    PlaylistOutcome::Skipped {
                        playlist_id: raw.id,
                        reason: format!("{:#}", e),
                    }
                }
            };

            if let PlaylistOutcome::Exported { path, .. } = &outcome {
                if !written.insert(path.clone()) {
                    log::warn!(
                        "Playlist {} overwrote {:?}, written earlier in this run",
                        raw.id,
                        path
                    );
                }
            }
            outcomes.push(outcome);
        }

        let summary_path = self.write_summary(&aggregate);
        log::info!("Playlists exported to folder: {:?}", self.organizer.output_dir());

        Ok(ExportSummary {
            output_dir: self.config.output_dir.clone(),
            playlists_found: playlists.len(),
            outcomes,
            total_rows: aggregate.len(),
            summary_path,
        })
    }

    /// Export one playlist and append its rows to `aggregate`
    ///
    /// Rows are appended only once the playlist's own file is written, so a
    /// failing playlist leaves the aggregate untouched.
    fn export_playlist(
        &self,
        raw: &RawRecord,
        aggregate: &mut Vec<ExportRow>,
    ) -> Result<PlaylistOutcome> {
        let playlist = match parse_playlist(raw) {
            Ok(playlist) => playlist,
            Err(e) => {
                log::error!("Error parsing playlist JSON for ID {}: {}", raw.id, e);
                return Ok(PlaylistOutcome::Skipped {
                    playlist_id: raw.id,
                    reason: e.to_string(),
                });
            }
        };

        log::info!(
            "Processing playlist: {} (ID: {}, Type: {})",
            playlist.name,
            playlist.id,
            playlist.type_label()
        );

        let tracks = self.resolve_tracks(&playlist)?;
        let rows = ExportRow::from_tracks(&tracks, &playlist);

        let path = self.organizer.playlist_path(&playlist);
        writer::write_rows(&path, &rows)?;
        log::debug!("Wrote {} rows to {:?}", rows.len(), path);

        let outcome = PlaylistOutcome::Exported {
            playlist_id: playlist.id,
            name: playlist.name,
            path,
            rows: rows.len(),
        };
        aggregate.extend(rows);

        Ok(outcome)
    }

    /// Look up and parse a playlist's tracks in stored order
    ///
    /// Track IDs with no row in the track table are dropped silently;
    /// rows whose JSON does not parse are dropped with a warning.
    fn resolve_tracks(&self, playlist: &Playlist) -> Result<Vec<Track>> {
        let track_ids = self.source.track_ids(playlist.id)?;
        let mut tracks = Vec::with_capacity(track_ids.len());

        for track_id in track_ids {
            let raw = match self.source.track(track_id)? {
                Some(raw) => raw,
                None => continue,
            };

            match parse_track(&raw) {
                Ok(track) => tracks.push(track),
                Err(e) => log::warn!("  Warning: {}", e),
            }
        }

        Ok(tracks)
    }

    /// Write the aggregate file; failures are logged, not returned
    fn write_summary(&self, rows: &[ExportRow]) -> Option<PathBuf> {
        let path = self.organizer.summary_path();

        match writer::write_rows(&path, rows) {
            Ok(()) => {
                log::info!("All playlists summary exported to: {:?}", path);
                Some(path)
            }
            Err(e) => {
                log::error!("Error writing summary file: {:#}", e);
                None
            }
        }
    }

    /// Close the underlying source
    pub fn close(self) -> Result<()> {
        self.source.close()
    }
}
