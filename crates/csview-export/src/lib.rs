//! Export transformers for a validated record set.
//!
//! Three independent, pure operations, none of which mutate the records:
//!
//! - **JSON** — indented array of objects, full set or selection, with the
//!   full set routed to a download above [`INLINE_RECORD_LIMIT`] rows
//! - **Workbook** — single-sheet `.xlsx` byte buffer
//! - **Model stub** — C# class text generated from an inferred model

mod artifact;
mod json;
mod stub;
mod workbook;

pub use artifact::{
    DownloadFile, ExportArtifact, JSON_MEDIA_TYPE, XLSX_MEDIA_TYPE, export_filename,
};
pub use json::{INLINE_RECORD_LIMIT, export_all_to_json, export_selection_to_json, records_to_json};
pub use stub::{STUB_CLASS_NAME, generate_model_stub};
pub use workbook::{SHEET_NAME, export_workbook};
