//! Error types for link-table loading.

use std::io;
use thiserror::Error;

/// The error type for link-table operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while opening or reading the export.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The CSV layer failed before any rows could be processed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    ///
    /// Raised during reader construction so the failure surfaces before
    /// row iteration starts, with the offending header named.
    #[error("missing required column: {name:?}")]
    MissingColumn {
        /// The exact header text that was not found.
        name: String,
    },
}

/// A specialized Result type for link-table operations.
pub type Result<T> = std::result::Result<T, Error>;
