//! Session-level errors, surfaced by the presentation layer as transient
//! warnings. None alter parsed state.

use thiserror::Error;

use csview_ingest::IngestError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Upload rejected at the boundary; prior state is untouched.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// An export was requested with no successful parse to export from.
    #[error("no parsed CSV data to export")]
    NoParsedData,

    /// Selection export requested with zero rows selected.
    #[error("Please select a row.")]
    EmptySelection,

    /// The underlying export transform failed.
    #[error(transparent)]
    Export(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
