//! Error types for the core domain.

use crate::record::Field;
use thiserror::Error;

/// Core domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("missing required field: {0}")]
    MissingField(Field),

    #[error("field '{0}' contains characters outside its allowed set")]
    InvalidCharacters(Field),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
