#![deny(unsafe_code)]

/// An uploaded file as handed over by the file-picker widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    /// Media type as declared by the browser, possibly with parameters
    /// (`text/csv; charset=utf-8`).
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The single active input source.
///
/// Exactly one variant is populated at a time; the session layer enforces
/// that setting one source clears the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    PastedText(String),
    UploadedFile(UploadedFile),
}

impl RawInput {
    pub fn is_pasted_text(&self) -> bool {
        matches!(self, Self::PastedText(_))
    }

    pub fn is_uploaded_file(&self) -> bool {
        matches!(self, Self::UploadedFile(_))
    }
}
