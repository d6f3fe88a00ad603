//! CSV ingestion: upload acceptance, byte decoding, and parse classification.
//!
//! The pipeline is two stages. The upload boundary ([`validate_upload`],
//! [`decode_upload`]) rejects bad inputs before they reach the parser; the
//! parser ([`parse_csv`], [`parse_input`]) turns raw text into a
//! [`csview_model::ParseOutcome`].

pub mod error;
pub mod parse;
pub mod upload;

pub use error::{IngestError, Result};
pub use parse::{EMPTY_RESULT_MESSAGE, parse_csv, parse_input};
pub use upload::{
    ACCEPTED_MEDIA_TYPES, MAX_UPLOAD_BYTES, decode_upload, validate_upload,
    validate_upload_with_limit,
};
