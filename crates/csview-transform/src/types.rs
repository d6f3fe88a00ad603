#![deny(unsafe_code)]

/// Closed set of primitive kinds a cell's text can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PrimitiveKind {
    /// Numeric literal (integer or decimal).
    Integer,
    /// Plain text, the default for anything unclassified.
    Text,
    /// `true` / `false` literal.
    Boolean,
    /// Absent or empty cell, mapped to a generic object type in stubs.
    Other,
}

/// One inferred model property, in field order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InferredProperty {
    pub name: String,
    pub kind: PrimitiveKind,
}

/// Per-column primitive-kind guesses, ordered identically to the field set.
///
/// Used only by the model-stub generator; table rendering always treats
/// cells as text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InferredModel {
    pub properties: Vec<InferredProperty>,
}
