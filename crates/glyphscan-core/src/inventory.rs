//! Persisted character inventory
//!
//! The inventory is the cumulative set of characters seen across runs,
//! stored as a UTF-8 text file with one entry per line, sorted, no
//! header. Every run loads it fully, merges the new extraction, and
//! rewrites the whole file.

use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Deduplicated, ordered set of inventory entries
///
/// Entries loaded from disk are taken verbatim as one entry per trimmed
/// non-empty line; the loader does not enforce single-character entries.
/// Entries produced by a scan are always single characters. `BTreeSet`
/// ordering over UTF-8 strings matches code-point order, so iteration
/// and persistence are sorted for free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    entries: BTreeSet<String>,
}

impl Inventory {
    /// Load an inventory from disk
    ///
    /// A missing file is an empty inventory, not an error. Lines are
    /// trimmed and empty lines discarded.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::ReadError` if the file exists but cannot
    /// be read or is not valid UTF-8.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).map_err(|e| InventoryError::read_error(path, e))?;
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self { entries })
    }

    /// Merge newly extracted characters into the inventory
    ///
    /// Returns the number of entries that were not already present.
    pub fn merge_chars<I: IntoIterator<Item = char>>(&mut self, chars: I) -> usize {
        let mut added = 0;
        for c in chars {
            if self.entries.insert(c.to_string()) {
                added += 1;
            }
        }
        added
    }

    /// Write the inventory back to disk
    ///
    /// Full rewrite: sorted entries, one per line, each terminated by a
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::WriteError` if the destination is not
    /// writable (permissions, missing parent directory).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        fs::write(path, out).map_err(|e| InventoryError::write_error(path, e))
    }

    /// Number of entries in the inventory
    #[inline]
    #[must_use = "returns the entry count"]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the inventory has no entries
    #[inline]
    #[must_use = "returns whether the inventory is empty"]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry is present
    #[inline]
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    /// Iterate entries in code-point order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Summary of a completed scan, for operator reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReport {
    /// Total entries in the inventory after the merge
    pub total: usize,
    /// Entries newly added by this run
    pub added: usize,
    /// Inventory file that was written
    pub output: PathBuf,
}
