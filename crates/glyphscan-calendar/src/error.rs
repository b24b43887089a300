//! Error types for calendar field extraction

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Error type for calendar field extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to read a calendar file (missing, unreadable, or not UTF-8)
    #[error("Failed to read calendar file {path}: {source}")]
    ReadError {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The batch input path is missing or not a directory
    #[error("Input folder {path} does not exist or is not a directory")]
    NotADirectory {
        /// The offending path
        path: PathBuf,
    },

    /// Failed to list a folder's entries
    #[error("Failed to read folder {path}: {source}")]
    FolderError {
        /// Path to the folder that failed to list
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl ExtractError {
    /// Create a file read error
    #[inline]
    #[must_use = "returns ExtractError for file read failures"]
    pub fn read_error<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a not-a-directory error
    #[inline]
    #[must_use = "returns ExtractError for invalid folder paths"]
    pub fn not_a_directory<P: AsRef<Path>>(path: P) -> Self {
        Self::NotADirectory {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a folder listing error
    #[inline]
    #[must_use = "returns ExtractError for folder listing failures"]
    pub fn folder_error<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::FolderError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
