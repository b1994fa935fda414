//! Export orchestration and CSV output

pub mod config;
pub mod organizer;
pub mod pipeline;
pub mod writer;

pub use config::ExportConfig;
pub use organizer::{sanitize_file_name, OutputOrganizer};
pub use pipeline::{ExportPipeline, ExportSummary, PlaylistOutcome};

use crate::netease::WebDb;
use crate::validation::validate_export;
use anyhow::Result;

/// Export every playlist in the configured database
///
/// The database is opened before anything is written, so a missing or
/// unreadable database fails the run with no output directory created.
/// Validation and close problems are logged and do not fail the run.
pub fn run(config: ExportConfig) -> Result<ExportSummary> {
    log::info!("Opening database at: {:?}", config.database_path);
    let db = WebDb::open(&config.database_path)?;

    let pipeline = ExportPipeline::new(config, db);
    let summary = pipeline.export()?;

    log::info!(
        "Exported {} of {} playlists ({} skipped), {} rows total",
        summary.exported_count(),
        summary.playlists_found,
        summary.skipped_count(),
        summary.total_rows
    );

    if let Err(e) = validate_export(&summary) {
        log::warn!("Post-export validation: {:#}", e);
    }

    if let Err(e) = pipeline.close() {
        log::warn!("{:#}", e);
    }

    Ok(summary)
}
