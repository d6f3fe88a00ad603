use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A header row named the same column more than once.
    #[error("duplicate column name: {name}")]
    DuplicateField { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
