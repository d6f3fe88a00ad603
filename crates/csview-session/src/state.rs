//! Session state owned by the presentation layer.
//!
//! The core parse and transform functions are pure; everything mutable lives
//! here, in one place, so the UI can pass it by reference instead of
//! reaching into ambient globals.
//!
//! # Stale-write suppression
//!
//! Parsing an uploaded file involves an asynchronous decode step, so a parse
//! result can arrive after the user has already started a newer request.
//! [`SessionState::begin_parse`] stamps each request with a [`ParseTicket`];
//! [`SessionState::commit_outcome`] refuses any ticket that no longer matches
//! the current generation, so the UI only ever reflects the most recently
//! initiated request.

use csview_ingest::{parse_input, validate_upload};
use csview_model::{ParseOutcome, RawInput, Record, RecordSet, UploadedFile};

use crate::error::Result;

/// Identity of one parse request. Compared, never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTicket(u64);

/// All mutable application state for one viewer session.
#[derive(Debug, Default)]
pub struct SessionState {
    pub(crate) input: Option<RawInput>,
    pub(crate) outcome: Option<ParseOutcome>,
    pub(crate) selection: RecordSet,
    pub(crate) inline_block: Option<String>,
    generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active input with pasted text, clearing any uploaded
    /// file. Empty text is ignored, matching the text-area callback.
    pub fn set_pasted_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.input = Some(RawInput::PastedText(text));
    }

    /// Replace the active input with an uploaded file, clearing any pasted
    /// text. Runs the boundary checks first: a rejected upload leaves every
    /// piece of state untouched.
    pub fn set_uploaded_file(&mut self, file: UploadedFile) -> Result<()> {
        validate_upload(&file)?;
        self.input = Some(RawInput::UploadedFile(file));
        Ok(())
    }

    /// True while the text area accepts input (no file is active).
    pub fn paste_enabled(&self) -> bool {
        !matches!(self.input, Some(RawInput::UploadedFile(_)))
    }

    /// True while the file picker accepts input (no pasted text is active).
    pub fn upload_enabled(&self) -> bool {
        !matches!(self.input, Some(RawInput::PastedText(_)))
    }

    /// Clear everything and re-enable both input affordances. Bumps the
    /// generation so any in-flight parse lands stale.
    pub fn reset(&mut self) {
        self.input = None;
        self.outcome = None;
        self.selection.clear();
        self.inline_block = None;
        self.generation += 1;
        tracing::debug!("session reset");
    }

    /// Start a parse request: bump the generation, clear the displayed
    /// artifact, and hand back a ticket plus a snapshot of the input.
    /// Returns `None` when no input source is active.
    pub fn begin_parse(&mut self) -> Option<(ParseTicket, RawInput)> {
        let input = self.input.clone()?;
        self.generation += 1;
        self.inline_block = None;
        Some((ParseTicket(self.generation), input))
    }

    /// Commit the outcome of a parse request. Returns `false` and changes
    /// nothing when the ticket was superseded by a newer request or a reset.
    pub fn commit_outcome(&mut self, ticket: ParseTicket, outcome: ParseOutcome) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                generation = self.generation,
                "discarding stale parse result"
            );
            return false;
        }
        self.selection.clear();
        self.inline_block = None;
        self.outcome = Some(outcome);
        true
    }

    /// Synchronous parse of the active input: begin, parse, commit.
    ///
    /// Returns `Ok(false)` when no input is active. A decode failure is a
    /// boundary error; the previous outcome stays displayed.
    pub fn render(&mut self) -> Result<bool> {
        let Some((ticket, input)) = self.begin_parse() else {
            return Ok(false);
        };
        let outcome = parse_input(&input)?;
        self.commit_outcome(ticket, outcome);
        Ok(true)
    }

    pub fn input(&self) -> Option<&RawInput> {
        self.input.as_ref()
    }

    pub fn outcome(&self) -> Option<&ParseOutcome> {
        self.outcome.as_ref()
    }

    /// Rows currently selected in the table. Owned by the presentation
    /// layer; export transforms only read it.
    pub fn selection(&self) -> &[Record] {
        &self.selection
    }

    pub fn set_selection(&mut self, rows: RecordSet) {
        self.selection = rows;
    }

    /// Text currently shown in the inline code block, if any.
    pub fn inline_block(&self) -> Option<&str> {
        self.inline_block.as_deref()
    }
}
