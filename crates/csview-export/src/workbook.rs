//! Single-sheet workbook export.
//!
//! The workbook container format is opaque to this crate: rows go in, an
//! `.xlsx` byte buffer comes out and is forwarded to the download mechanism.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rust_xlsxwriter::Workbook;

use csview_model::{FieldSet, Record};

use crate::artifact::{DownloadFile, ExportArtifact, XLSX_MEDIA_TYPE, export_filename};

/// Sheet name used for every export.
pub const SHEET_NAME: &str = "data";

/// Encode the record set as a single-sheet workbook download.
///
/// Header row first, then one row per record in set order; every cell is
/// written as text, matching how the table renders.
pub fn export_workbook(
    fields: &FieldSet,
    records: &[Record],
    at: DateTime<Utc>,
) -> Result<ExportArtifact> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).context("name worksheet")?;

    for (col, name) in fields.iter().enumerate() {
        sheet
            .write_string(0, col as u16, name)
            .context("write header row")?;
    }
    for (row, record) in records.iter().enumerate() {
        for (col, name) in fields.iter().enumerate() {
            sheet
                .write_string((row + 1) as u32, col as u16, record.value(name))
                .context("write data row")?;
        }
    }

    let bytes = workbook
        .save_to_buffer()
        .context("encode workbook buffer")?;
    tracing::debug!(rows = records.len(), bytes = bytes.len(), "workbook encoded");

    Ok(ExportArtifact::Download(DownloadFile {
        filename: export_filename("csv", "xlsx", at),
        media_type: XLSX_MEDIA_TYPE,
        bytes,
    }))
}
