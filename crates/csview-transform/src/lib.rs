//! Schema and type inference for parsed CSV records.
//!
//! Given the first record of a successful parse, derives a per-column
//! [`PrimitiveKind`] over a small closed tag set. The result feeds the
//! model-stub generator and nothing else.

pub mod inference;
pub mod types;

pub use inference::{classify_value, infer_model};
pub use types::{InferredModel, InferredProperty, PrimitiveKind};
