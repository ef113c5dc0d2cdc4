//! Error types for linkmap operations.

use std::io;
use thiserror::Error;

/// The error type for linkmap operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while writing an artifact.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The link table could not be loaded.
    #[error("link table error: {0}")]
    Table(#[from] linkmap_table::Error),
}

/// A specialized Result type for linkmap operations.
pub type Result<T> = std::result::Result<T, Error>;
