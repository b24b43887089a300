//! Permissive field-line extraction from ICS calendar files
//!
//! Reads calendars line by line and collects the payloads of `SUMMARY`,
//! `DESCRIPTION` and `LOCATION` lines. No structural parsing of the rest
//! of the format: components, parameters and folded continuation lines
//! are not interpreted. The field name and its parameters are stripped
//! up to and including the first colon; the remainder of the line is the
//! payload.

use crate::error::{ExtractError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Field names whose payload text is collected
const FIELD_TOKENS: [&str; 3] = ["SUMMARY", "DESCRIPTION", "LOCATION"];

/// File suffix matched in folder mode, case-insensitive
const CALENDAR_SUFFIX: &str = ".ics";

// Field name plus optional parameters, up to and including the first
// colon, e.g. "SUMMARY;LANGUAGE=zh-TW:". A token line without a colon is
// left untouched and contributes its whole content (inherited edge case).
static RE_FIELD_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z-]+.*?:").expect("valid field prefix regex"));

/// Extract field payloads from calendar text
///
/// For each trimmed line starting with one of the recognized field
/// names, the prefix is stripped and the remainder appended to the
/// buffer followed by a newline. All other lines are ignored.
#[must_use = "returns the concatenated field payloads"]
pub fn extract_text(content: &str) -> String {
    let mut buffer = String::new();
    for line in content.lines() {
        let line = line.trim();
        if FIELD_TOKENS.iter().any(|token| line.starts_with(token)) {
            buffer.push_str(&RE_FIELD_PREFIX.replace(line, ""));
            buffer.push('\n');
        }
    }
    buffer
}

/// Extract field payloads from a calendar file
///
/// # Errors
///
/// Returns `ExtractError::ReadError` if the file is missing, unreadable,
/// or not valid UTF-8.
pub fn extract_fields<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ExtractError::read_error(path, e))?;
    Ok(extract_text(&content))
}

/// List the calendar files in a folder
///
/// Non-recursive; matches regular files whose name ends with `.ics`
/// case-insensitively. Results are sorted by path so batch runs are
/// deterministic.
///
/// # Errors
///
/// Returns `ExtractError::NotADirectory` if the path is missing or not a
/// directory, `ExtractError::FolderError` if listing fails.
pub fn calendar_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ExtractError::not_a_directory(dir));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ExtractError::folder_error(dir, e))? {
        let entry = entry.map_err(|e| ExtractError::folder_error(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().to_lowercase().ends_with(CALENDAR_SUFFIX) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Extract field payloads from every calendar file in a folder
///
/// Buffers are concatenated in sorted file order.
///
/// # Errors
///
/// Propagates folder and file read errors; the whole batch aborts on the
/// first failure.
pub fn extract_folder<P: AsRef<Path>>(dir: P) -> Result<String> {
    let mut buffer = String::new();
    for file in calendar_files(dir)? {
        buffer.push_str(&extract_fields(file)?);
    }
    Ok(buffer)
}
