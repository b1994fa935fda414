//! Round-trip validation using the csv reader

use crate::export::writer::UTF8_BOM;
use crate::export::{ExportSummary, PlaylistOutcome};
use crate::model::CSV_HEADER;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Validate the files written by one export run
///
/// Checks every per-playlist file and the aggregate file for the
/// byte-order mark and header, contiguous sequence numbers, and row
/// counts matching what the run recorded.
///
/// # Returns
/// Ok(()) if validation passes, Err listing the number of problems otherwise
pub fn validate_export(summary: &ExportSummary) -> Result<()> {
    log::info!("Validating export at: {:?}", summary.output_dir);

    let mut problems = Vec::new();
    let mut checked = HashSet::new();

    // A later playlist with the same file name overwrote the earlier one,
    // so only the last outcome for each path describes the file on disk
    for outcome in summary.outcomes.iter().rev() {
        let (path, rows) = match outcome {
            PlaylistOutcome::Exported { path, rows, .. } => (path, *rows),
            PlaylistOutcome::Skipped { .. } => continue,
        };
        if !checked.insert(path) {
            continue;
        }

        match read_sequences(path) {
            Ok(sequences) => {
                if sequences.len() != rows {
                    problems.push(format!(
                        "{:?}: expected {} rows, found {}",
                        path,
                        rows,
                        sequences.len()
                    ));
                }
                if !sequences.iter().copied().eq(1..=sequences.len()) {
                    problems.push(format!("{:?}: sequence numbers are not 1..n", path));
                }
            }
            Err(e) => problems.push(format!("{:?}: {:#}", path, e)),
        }
    }
    log::info!("  Checked {} playlist files", checked.len());

    match &summary.summary_path {
        Some(path) => match read_sequences(path) {
            Ok(sequences) => {
                if sequences.len() != summary.total_rows {
                    problems.push(format!(
                        "{:?}: expected {} rows, found {}",
                        path,
                        summary.total_rows,
                        sequences.len()
                    ));
                }
                if !restarts_cleanly(&sequences) {
                    problems.push(format!("{:?}: sequence numbers have gaps", path));
                }
            }
            Err(e) => problems.push(format!("{:?}: {:#}", path, e)),
        },
        None => problems.push("summary file was not written".to_string()),
    }

    if problems.is_empty() {
        log::info!("✅ Export is consistent: {} rows in summary", summary.total_rows);
        return Ok(());
    }

    for problem in &problems {
        log::warn!("  - {}", problem);
    }
    anyhow::bail!("{} problem(s) found in export", problems.len())
}

/// Read an exported file and return its sequence column
pub fn read_sequences(path: &Path) -> Result<Vec<usize>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    let body = bytes
        .strip_prefix(UTF8_BOM)
        .context("missing UTF-8 byte-order mark")?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(body);

    let headers = reader.headers().context("missing header row")?;
    if !headers.iter().eq(CSV_HEADER) {
        anyhow::bail!("unexpected header: {:?}", headers);
    }

    let mut sequences = Vec::new();
    for record in reader.records() {
        let record = record?;
        let sequence = record
            .get(0)
            .context("empty record")?
            .parse::<usize>()
            .with_context(|| format!("invalid sequence number in {:?}", record))?;
        sequences.push(sequence);
    }

    Ok(sequences)
}

/// Sequence numbers of concatenated playlists: each value is either 1
/// (a new playlist starts) or one more than the previous value
fn restarts_cleanly(sequences: &[usize]) -> bool {
    let mut previous = 0;
    for &sequence in sequences {
        if sequence != 1 && sequence != previous + 1 {
            return false;
        }
        previous = sequence;
    }
    true
}
