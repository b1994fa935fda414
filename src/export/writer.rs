//! CSV file writer
//!
//! Files are UTF-8 with a byte-order mark so spreadsheet applications pick
//! the right encoding for the Chinese header.

use crate::model::{ExportRow, CSV_HEADER};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Create (or truncate) `path` and write the header plus `rows`
pub fn write_rows(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    write_to(BufWriter::new(file), rows).with_context(|| format!("Failed to write {:?}", path))
}

/// Write BOM, header and rows to any sink
pub fn write_to<W: Write>(mut sink: W, rows: &[ExportRow]) -> Result<()> {
    sink.write_all(UTF8_BOM)?;

    // The header is written by hand so an empty playlist still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(sink);

    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
