#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{ModelError, Result};

/// Ordered list of unique column names derived from a CSV header row.
///
/// Order is significant: it drives column rendering order and the property
/// order of every export artifact.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldSet(Vec<String>);

impl FieldSet {
    /// Build a field set, rejecting duplicate names.
    ///
    /// Duplicates would alias keys in [`Record`], so a header containing them
    /// is not representable.
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateField { name: name.clone() });
            }
        }
        Ok(Self(names))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single parsed row: column name to cell text.
///
/// CSV carries no native typing, so every cell stays text until the type
/// inferencer is explicitly asked. A column absent from the row reads as the
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    cells: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.cells.get(field).map(String::as_str)
    }

    /// Cell text for `field`, with absent cells reading as empty.
    pub fn value(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// The full parsed table, in source-row order.
pub type RecordSet = Vec<Record>;
