//! # glyphscan-calendar
//!
//! Permissive extraction of human-visible text from iCalendar (ICS)
//! files for glyphscan.
//!
//! This is deliberately NOT a calendar parser. Only three field names
//! carry text a calendar display ever renders — `SUMMARY`,
//! `DESCRIPTION` and `LOCATION` — so those lines are matched directly
//! and everything else in the file is ignored. Components, date/time
//! values, recurrence rules and folded continuation lines are not
//! interpreted.
//!
//! ## Example
//!
//! ```no_run
//! use glyphscan_calendar::extract_fields;
//!
//! let text = extract_fields("school.ics")?;
//! for payload in text.lines() {
//!     println!("{payload}");
//! }
//! # Ok::<(), glyphscan_calendar::ExtractError>(())
//! ```
//!
//! Folder mode (`extract_folder`) concatenates the buffers of every
//! `.ics` file in a directory, non-recursive, suffix matched
//! case-insensitively.

/// Error types for calendar field extraction
pub mod error;
/// Field-line matching and payload collection
pub mod extract;

pub use error::{ExtractError, Result};
pub use extract::{calendar_files, extract_fields, extract_folder, extract_text};
