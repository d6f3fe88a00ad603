//! JSON transform with inline/download threshold routing.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

use csview_model::{FieldSet, Record};

use crate::artifact::{DownloadFile, ExportArtifact, JSON_MEDIA_TYPE, export_filename};

/// Largest record count still displayed inline when exporting the full set.
/// Anything bigger becomes a download so the UI is not flooded with a huge
/// code block.
pub const INLINE_RECORD_LIMIT: usize = 100;

/// A record serialized as a JSON object in field order.
///
/// `Record` stores cells in a sorted map; this wrapper restores the header
/// order the rest of the application renders in.
struct OrderedRecord<'a> {
    fields: &'a FieldSet,
    record: &'a Record,
}

impl Serialize for OrderedRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in self.fields.iter() {
            map.serialize_entry(field, self.record.value(field))?;
        }
        map.end()
    }
}

/// Serialize records to a 2-space-indented JSON array of objects.
pub fn records_to_json(fields: &FieldSet, records: &[Record]) -> Result<String> {
    let ordered: Vec<OrderedRecord<'_>> = records
        .iter()
        .map(|record| OrderedRecord { fields, record })
        .collect();
    serde_json::to_string_pretty(&ordered).context("serialize records to JSON")
}

/// Export the full record set, routing oversized results to a download.
pub fn export_all_to_json(
    fields: &FieldSet,
    records: &[Record],
    at: DateTime<Utc>,
) -> Result<ExportArtifact> {
    let text = records_to_json(fields, records)?;
    if records.len() > INLINE_RECORD_LIMIT {
        tracing::debug!(rows = records.len(), "JSON export routed to download");
        return Ok(ExportArtifact::Download(DownloadFile {
            filename: export_filename("csv", "json", at),
            media_type: JSON_MEDIA_TYPE,
            bytes: text.into_bytes(),
        }));
    }
    Ok(ExportArtifact::Inline { text })
}

/// Export a selection. Selections are always displayed inline regardless of
/// size; the empty-selection guard lives with the session layer.
pub fn export_selection_to_json(fields: &FieldSet, selection: &[Record]) -> Result<ExportArtifact> {
    let text = records_to_json(fields, selection)?;
    Ok(ExportArtifact::Inline { text })
}
