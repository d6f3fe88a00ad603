//! Shared data model for the CSV viewer core.
//!
//! The types here carry parsed data between the ingestion, inference, export,
//! and session crates:
//!
//! - [`RawInput`] — the single active input source (pasted text or upload)
//! - [`FieldSet`] — ordered, unique column names from the header row
//! - [`Record`] / [`RecordSet`] — parsed rows as column-to-text mappings
//! - [`ParseOutcome`] — three-way classification of a parse run

pub mod error;
pub mod input;
pub mod outcome;
pub mod record;

pub use error::{ModelError, Result};
pub use input::{RawInput, UploadedFile};
pub use outcome::ParseOutcome;
pub use record::{FieldSet, Record, RecordSet};
