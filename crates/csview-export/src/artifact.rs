#![deny(unsafe_code)]

use chrono::{DateTime, Utc};

/// Media type attached to JSON downloads.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Media type attached to workbook downloads.
pub const XLSX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A payload handed to the browser's save mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub filename: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Result of an export transform: either text for the inline code block or
/// a file for the download mechanism. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportArtifact {
    Inline { text: String },
    Download(DownloadFile),
}

impl ExportArtifact {
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline { .. })
    }

    pub fn is_download(&self) -> bool {
        matches!(self, Self::Download(_))
    }
}

/// Deterministic prefix plus timestamp suffix, `{prefix}_export_{millis}.{ext}`.
///
/// The instant is a parameter so transforms stay pure; callers pass
/// `Utc::now()`.
pub fn export_filename(prefix: &str, extension: &str, at: DateTime<Utc>) -> String {
    format!("{prefix}_export_{}.{extension}", at.timestamp_millis())
}
