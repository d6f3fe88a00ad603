#![deny(unsafe_code)]

//! CSV parsing and three-way outcome classification.
//!
//! Tokenization is delegated to the `csv` crate configured with a header row
//! and blank-line skipping. This module only classifies the result:
//!
//! 1. any reader error → [`ParseOutcome::StructuralError`] with the first
//!    error's message, partial rows discarded;
//! 2. zero data rows → [`ParseOutcome::EmptyResult`];
//! 3. otherwise → [`ParseOutcome::Success`].

use csview_model::{FieldSet, ParseOutcome, RawInput, Record, RecordSet};

use crate::error::Result;
use crate::upload::decode_upload;

/// Message carried by every [`ParseOutcome::EmptyResult`].
pub const EMPTY_RESULT_MESSAGE: &str = "Parsed CSV data is empty";

/// Parse raw CSV text into a classified outcome.
///
/// Cell values are kept verbatim; rows shorter or longer than the header are
/// a structural error, not padded or truncated.
pub fn parse_csv(raw: &str) -> ParseOutcome {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(raw.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => return structural_error(&err),
    };

    let fields = match FieldSet::new(headers.iter().map(str::to_string).collect()) {
        Ok(fields) => fields,
        Err(err) => {
            tracing::debug!(%err, "header row not usable");
            return ParseOutcome::StructuralError {
                message: err.to_string(),
            };
        }
    };

    let mut records: RecordSet = Vec::new();
    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) => return structural_error(&err),
        };
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(field, cell)| (field.to_string(), cell.to_string()))
            .collect();
        records.push(record);
    }

    if records.is_empty() {
        tracing::debug!("parse produced zero data rows");
        return ParseOutcome::EmptyResult {
            message: EMPTY_RESULT_MESSAGE.to_string(),
        };
    }

    tracing::debug!(rows = records.len(), columns = fields.len(), "parse succeeded");
    ParseOutcome::Success { records, fields }
}

fn structural_error(err: &csv::Error) -> ParseOutcome {
    tracing::debug!(%err, "structural parse error");
    ParseOutcome::StructuralError {
        message: err.to_string(),
    }
}

/// Parse either input source, decoding uploaded bytes first.
///
/// Decoding failures are boundary errors, not parse outcomes: the caller
/// surfaces them as a warning and keeps prior state.
pub fn parse_input(input: &RawInput) -> Result<ParseOutcome> {
    match input {
        RawInput::PastedText(text) => Ok(parse_csv(text)),
        RawInput::UploadedFile(file) => {
            let text = decode_upload(file)?;
            Ok(parse_csv(&text))
        }
    }
}
