//! Error types for Horizon Metaform core.

use std::fmt;

/// Errors raised by the core data model.
#[derive(Debug)]
pub enum CoreError {
    /// A value offered as an inspection result was not a JSON object.
    InvalidInspectionResult(String),
    /// A dotted property path could not be resolved against the domain
    /// value.
    UnresolvedPath(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInspectionResult(msg) => {
                write!(f, "Invalid inspection result: {msg}")
            }
            Self::UnresolvedPath(path) => {
                write!(f, "Path '{path}' does not resolve against the inspected value")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// A specialized Result type for Horizon Metaform core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
