#![deny(unsafe_code)]

use crate::record::{FieldSet, RecordSet};

/// Three-way classification of a parse run.
///
/// A run lands in exactly one variant; there is no partial or
/// success-with-warnings state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ParseOutcome {
    /// Input parsed into at least one data row. `fields` is non-empty and
    /// ordered as the header row was.
    Success {
        records: RecordSet,
        fields: FieldSet,
    },
    /// The input could not be tokenized into rows and columns. Carries the
    /// first error message reported by the parser; partial rows are dropped.
    StructuralError { message: String },
    /// The input tokenized cleanly but produced zero data rows.
    EmptyResult { message: String },
}

impl ParseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Error text for the two failure variants, `None` on success.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::StructuralError { message } | Self::EmptyResult { message } => Some(message),
        }
    }
}
