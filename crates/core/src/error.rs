//! Error type shared by the reader, builder, and document writer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`CatalogError`], matching how a run fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source file missing or unreadable.
    InputAccess,
    /// Source readable but not shaped as expected.
    InputFormat,
    /// Destination could not be written.
    OutputAccess,
}

/// Error type for catalog conversion operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source file could not be opened or read.
    #[error("Failed to read input at {}: {source}", .path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The header row does not name a required column.
    #[error("Input is missing required column '{column}'")]
    MissingColumn { column: String },

    /// A record does not carry a value for a required field.
    #[error("Record {record} is missing required field '{field}'")]
    MissingField { record: usize, field: String },

    /// The delimited text itself is malformed (e.g. inconsistent column count).
    #[error("Malformed input: {0}")]
    Csv(#[source] csv::Error),

    /// Flattened rows could not be written.
    #[error("Failed to write rows: {0}")]
    CsvWrite(#[source] csv::Error),

    /// A hierarchy document could not be parsed.
    #[error("Failed to parse hierarchy document: {0}")]
    Document(#[source] serde_yaml::Error),

    /// The hierarchy could not be rendered.
    #[error("Failed to serialize hierarchy: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// The destination could not be written.
    #[error("Failed to write output at {}: {source}", .path.display())]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InputAccess { .. } => ErrorKind::InputAccess,
            CatalogError::Csv(err) if err.is_io_error() => ErrorKind::InputAccess,
            CatalogError::MissingColumn { .. }
            | CatalogError::MissingField { .. }
            | CatalogError::Csv(_)
            | CatalogError::Document(_) => ErrorKind::InputFormat,
            CatalogError::Serialize(_)
            | CatalogError::CsvWrite(_)
            | CatalogError::OutputAccess { .. } => ErrorKind::OutputAccess,
        }
    }
}

/// Convenience result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
