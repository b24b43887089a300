//! Glyphscan CLI - glyph inventory collector for calendar files
//!
//! Scans iCalendar files for the text a calendar display renders,
//! filters it down to the fixed allowed character set, and accumulates
//! the result in an inventory file used to build a custom font subset.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use glyphscan_calendar::{calendar_files, extract_fields, ExtractError};
use glyphscan_core::{filter_allowed, Inventory, InventoryReport};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Default inventory file for the single-file scan command
const DEFAULT_INVENTORY: &str = "used_chars.txt";

#[derive(Parser, Debug)]
#[command(
    name = "glyphscan",
    about = "Collect the CJK glyphs used in calendar files",
    long_about = "Collect the CJK glyphs used in calendar files.\n\
                  \n\
                  Extracts SUMMARY, DESCRIPTION and LOCATION text from .ics files,\n\
                  keeps the characters a custom font subset must cover, and\n\
                  accumulates them in a sorted inventory file across runs.",
    version
)]
struct Args {
    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a single calendar file and update the glyph inventory
    #[command(long_about = "Scan a single calendar file and update the glyph inventory.\n\
                      \n\
                      The inventory defaults to used_chars.txt in the current\n\
                      directory and is created on first use.")]
    Scan {
        /// Input calendar file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Inventory file to update (default: used_chars.txt)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Scan every .ics file in a folder and update the glyph inventory
    #[command(long_about = "Scan every .ics file in a folder and update the glyph inventory.\n\
                      \n\
                      Non-recursive; the suffix match is case-insensitive. All field\n\
                      text is collected before filtering, so the result equals a\n\
                      single scan over the concatenated files.")]
    Batch {
        /// Input folder containing .ics files (non-recursive)
        #[arg(value_name = "INPUT_DIR")]
        input_dir: PathBuf,

        /// Inventory file to update
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Inspect a glyph inventory without modifying it
    Show {
        /// Inventory file to inspect
        #[arg(value_name = "INVENTORY")]
        inventory: PathBuf,

        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,

        /// List the characters themselves, one per line
        #[arg(long)]
        chars: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Scan { input, output } => scan_command(&input, output, args.quiet),
        Commands::Batch { input_dir, output } => batch_command(&input_dir, &output, args.quiet),
        Commands::Show {
            inventory,
            json,
            chars,
        } => show_command(&inventory, json, chars),
    }
}

fn scan_command(input: &Path, output: Option<PathBuf>, quiet: bool) -> Result<()> {
    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY));

    // Verify input file exists
    if !input.exists() {
        eprintln!(
            "{} Input file not found: {}",
            "Error:".red().bold(),
            input.display()
        );
        eprintln!(
            "{} Check that the file path is correct and the file exists",
            "Help:".cyan().bold()
        );
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let text = extract_fields(input)
        .with_context(|| format!("Failed to extract fields from {}", input.display()))?;

    let report = update_inventory(&text, &output)?;
    if !quiet {
        print_report(&report);
    }
    Ok(())
}

fn batch_command(input_dir: &Path, output: &Path, quiet: bool) -> Result<()> {
    let files = match calendar_files(input_dir) {
        Ok(files) => files,
        Err(e @ ExtractError::NotADirectory { .. }) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to list {}", input_dir.display()))
        }
    };

    if !quiet {
        eprintln!(
            "{} Scanning {} calendar files in {}...",
            "Info:".blue().bold(),
            files.len().to_string().cyan(),
            input_dir.display()
        );
    }

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("template is compile-time constant")
                .progress_chars("█▓▒░  "),
        );
        pb
    };

    // All field text is collected first, then filtered once, so a batch
    // run equals a single-file run over the concatenation.
    let mut buffer = String::new();
    for file in &files {
        progress.set_message(
            file.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        let text = extract_fields(file)
            .with_context(|| format!("Failed to extract fields from {}", file.display()))?;
        buffer.push_str(&text);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let report = update_inventory(&buffer, output)?;
    if !quiet {
        print_report(&report);
    }
    Ok(())
}

fn show_command(inventory_path: &Path, json: bool, chars: bool) -> Result<()> {
    if !inventory_path.exists() {
        eprintln!(
            "{} Inventory file not found: {}",
            "Error:".red().bold(),
            inventory_path.display()
        );
        std::process::exit(1);
    }

    let inventory = Inventory::load(inventory_path)
        .with_context(|| format!("Failed to load inventory {}", inventory_path.display()))?;

    if json {
        let value = serde_json::json!({
            "inventory": inventory_path.display().to_string(),
            "total": inventory.len(),
            "characters": inventory.iter().collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!(
            "{}: {} entries",
            inventory_path.display(),
            inventory.len()
        );
        if chars {
            for entry in inventory.iter() {
                println!("{entry}");
            }
        }
    }
    Ok(())
}

/// Filter the extracted text and fold it into the inventory file
fn update_inventory(text: &str, output: &Path) -> Result<InventoryReport> {
    let new_chars = filter_allowed(text);

    let mut inventory = Inventory::load(output)
        .with_context(|| format!("Failed to load inventory {}", output.display()))?;
    let added = inventory.merge_chars(new_chars);
    inventory
        .save(output)
        .with_context(|| format!("Failed to write inventory {}", output.display()))?;

    Ok(InventoryReport {
        total: inventory.len(),
        added,
        output: output.to_path_buf(),
    })
}

fn print_report(report: &InventoryReport) {
    eprintln!(
        "{} Inventory holds {} characters ({} new) in {}",
        "✓".green().bold(),
        report.total.to_string().cyan(),
        report.added,
        report.output.display().to_string().bright_white()
    );
}
