//! Error types for CSV ingestion.

use thiserror::Error;

/// Errors raised at the ingestion boundary, before parsing starts.
///
/// Structural CSV problems are not errors at this level: they are a regular
/// [`csview_model::ParseOutcome`] variant, since the application treats them
/// as a displayable result rather than a failure of the pipeline itself.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Declared media type does not indicate CSV or plain text.
    #[error("invalid file type '{media_type}': expected a CSV or plain-text file")]
    UnsupportedMediaType { media_type: String },

    /// Upload exceeds the fixed size ceiling.
    #[error("file too large: {size} bytes exceeds the {max_size} byte limit")]
    FileTooLarge { size: u64, max_size: u64 },

    /// File bytes carry a BOM for an encoding we do not accept.
    #[error("unsupported encoding: {encoding}")]
    UnsupportedEncoding { encoding: &'static str },

    /// File bytes are not valid UTF-8.
    #[error("file is not valid UTF-8 text")]
    Decode,
}

pub type Result<T> = std::result::Result<T, IngestError>;
