//! # glyphscan-core
//!
//! Allowed-character filtering and the persisted glyph inventory for
//! glyphscan.
//!
//! A scan produces a text buffer (see `glyphscan-calendar`); this crate
//! reduces that buffer to the distinct characters a custom font subset
//! must cover, and accumulates them in an inventory file across runs.
//!
//! ## Example
//!
//! ```no_run
//! use glyphscan_core::{filter_allowed, Inventory};
//!
//! let mut inventory = Inventory::load("used_chars.txt")?;
//! let added = inventory.merge_chars(filter_allowed("考試：數學"));
//! inventory.save("used_chars.txt")?;
//! println!("{added} new characters, {} total", inventory.len());
//! # Ok::<(), glyphscan_core::InventoryError>(())
//! ```
//!
//! ## Invariant
//!
//! The inventory file at rest is always the sorted, deduplicated union
//! of every character ever extracted from processed input, restricted to
//! the allowed filter. Runs are idempotent: merging a set with itself
//! changes nothing.

/// Fixed inclusion filter for extracted characters
pub mod charset;
/// Error types for inventory persistence
pub mod error;
/// Load/merge/persist of the cumulative character set
pub mod inventory;

pub use charset::{filter_allowed, is_allowed};
pub use error::{InventoryError, Result};
pub use inventory::{Inventory, InventoryReport};
