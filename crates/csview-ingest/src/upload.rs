//! Upload acceptance and byte decoding.
//!
//! Both checks run before any parsing: a rejected upload never reaches the
//! parser and leaves prior session state untouched.

use csview_model::UploadedFile;

use crate::error::{IngestError, Result};

/// Maximum accepted upload size (10 MB, matching the file-picker ceiling).
pub const MAX_UPLOAD_BYTES: u64 = 10_000_000;

/// Media types accepted as CSV input, compared without parameters.
pub const ACCEPTED_MEDIA_TYPES: &[&str] = &["text/csv", "text/plain", "application/csv"];

/// Media type with any parameters stripped (`text/csv; charset=utf-8` →
/// `text/csv`), lowercased for comparison.
fn essence(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Check the declared media type and size ceiling.
pub fn validate_upload(file: &UploadedFile) -> Result<()> {
    validate_upload_with_limit(file, MAX_UPLOAD_BYTES)
}

/// Check an upload against a custom size limit.
pub fn validate_upload_with_limit(file: &UploadedFile, max_size: u64) -> Result<()> {
    let media_type = essence(&file.media_type);
    if !ACCEPTED_MEDIA_TYPES.contains(&media_type.as_str()) {
        tracing::warn!(media_type = %file.media_type, "rejected upload: media type");
        return Err(IngestError::UnsupportedMediaType {
            media_type: file.media_type.clone(),
        });
    }

    if file.len() > max_size {
        tracing::warn!(size = file.len(), max_size, "rejected upload: size");
        return Err(IngestError::FileTooLarge {
            size: file.len(),
            max_size,
        });
    }

    Ok(())
}

/// Decode uploaded bytes to text.
///
/// UTF-16 inputs are rejected outright (detected via BOM). A UTF-8 BOM is
/// stripped; malformed UTF-8 is an error rather than being replaced lossily.
pub fn decode_upload(file: &UploadedFile) -> Result<String> {
    let bytes = &file.bytes;

    if bytes.len() >= 2 {
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
            });
        }
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 BE",
            });
        }
    }

    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(IngestError::Decode);
    }
    Ok(text.into_owned())
}
