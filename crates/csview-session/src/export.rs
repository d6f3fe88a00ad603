//! The five-choice export dispatch.
//!
//! Each choice runs its transform immediately; there is no queueing, and a
//! new choice replaces whatever is currently displayed.

use chrono::{DateTime, Utc};

use csview_export::{
    DownloadFile, ExportArtifact, export_all_to_json, export_selection_to_json, export_workbook,
    generate_model_stub,
};
use csview_model::ParseOutcome;
use csview_transform::infer_model;

use crate::error::{Result, SessionError};
use crate::state::SessionState;

/// The fixed export menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportChoice {
    /// Clear the displayed artifact.
    None,
    /// Selected rows to inline JSON.
    SelectedToJson,
    /// Full record set to JSON, routed to a download when oversized.
    AllToJson,
    /// Full record set to a workbook download.
    AllToWorkbook,
    /// Generate a model stub from row 0.
    ModelStub,
}

/// What the presentation layer should do with an export result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    /// The inline block was cleared.
    Cleared,
    /// New inline text is available via [`SessionState::inline_block`].
    Displayed,
    /// A file should be handed to the download mechanism.
    Download(DownloadFile),
}

impl SessionState {
    /// Run one export choice against the current outcome.
    ///
    /// Every choice except [`ExportChoice::None`] requires a successful
    /// parse. Errors are transient warnings and never alter parsed state.
    pub fn run_export(&mut self, choice: ExportChoice, now: DateTime<Utc>) -> Result<ExportOutput> {
        if choice == ExportChoice::None {
            self.inline_block = None;
            return Ok(ExportOutput::Cleared);
        }

        let Some(ParseOutcome::Success { records, fields }) = &self.outcome else {
            return Err(SessionError::NoParsedData);
        };

        match choice {
            ExportChoice::None => unreachable!("handled above"),
            ExportChoice::SelectedToJson => {
                if self.selection.is_empty() {
                    return Err(SessionError::EmptySelection);
                }
                let artifact = export_selection_to_json(fields, &self.selection)?;
                Ok(self.display(artifact))
            }
            ExportChoice::AllToJson => {
                let artifact = export_all_to_json(fields, records, now)?;
                Ok(self.display(artifact))
            }
            ExportChoice::AllToWorkbook => {
                // Leaves the inline block as-is; the download stands alone.
                let artifact = export_workbook(fields, records, now)?;
                match artifact {
                    ExportArtifact::Download(file) => Ok(ExportOutput::Download(file)),
                    ExportArtifact::Inline { text } => {
                        self.inline_block = Some(text);
                        Ok(ExportOutput::Displayed)
                    }
                }
            }
            ExportChoice::ModelStub => {
                // Success guarantees at least one record.
                let model = infer_model(fields, &records[0]);
                let stub = generate_model_stub(&model);
                self.inline_block = Some(stub);
                Ok(ExportOutput::Displayed)
            }
        }
    }

    /// Route an artifact: inline text replaces the displayed block, a
    /// download clears it (a stale block must not outlive the saved file).
    fn display(&mut self, artifact: ExportArtifact) -> ExportOutput {
        match artifact {
            ExportArtifact::Inline { text } => {
                self.inline_block = Some(text);
                ExportOutput::Displayed
            }
            ExportArtifact::Download(file) => {
                self.inline_block = None;
                ExportOutput::Download(file)
            }
        }
    }
}
