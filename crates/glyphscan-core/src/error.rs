//! Error types for inventory persistence

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Error type for inventory load and save operations
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Failed to read the inventory file from disk
    #[error("Failed to read inventory file {path}: {source}")]
    ReadError {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write the inventory file to disk
    #[error("Failed to write inventory file {path}: {source}")]
    WriteError {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl InventoryError {
    /// Create a read error
    #[inline]
    #[must_use = "returns InventoryError for file read failures"]
    pub fn read_error<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a write error
    #[inline]
    #[must_use = "returns InventoryError for file write failures"]
    pub fn write_error<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
