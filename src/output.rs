//! CLI output formatting for catalogs, inventories and batches.
//!
//! # Information-First Display
//!
//! Every photo is shown by its positional index and code, with the source
//! file as indented context. Page and cell positions follow so a reader can
//! find the photo in the printed catalog.
//!
//! # Output Format
//!
//! ## Catalog progress
//!
//! ```text
//! Cover: Spring Catalog (logo)
//! Page 1
//!     001 SPR-001 → row 1, col 1
//!     002 SPR-002 → row 1, col 2
//!         Error: cannot decode shoot/broken.jpg: ...
//! ```
//!
//! ## Catalog summary
//!
//! ```text
//! Spring Catalog → outputs/Spring_Catalog.pdf
//!     12 photos on 2 grid pages (3 pages total)
//!     Placeholders: 1
//!         005 SPR-005 (shoot/broken.jpg)
//! ```
//!
//! ## Inventory
//!
//! ```text
//! Inventory MONO → outputs/Inventory_MONO.json
//!     001 MONO-001 IMG_0001.jpg (stock 5)
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::batch::{BatchEvent, JobOutcome};
use crate::catalog::{CatalogEvent, CatalogSummary, LogoStatus};
use crate::inventory::Inventory;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Format a single catalog progress event as display lines.
pub fn format_catalog_event(event: &CatalogEvent) -> Vec<String> {
    match event {
        CatalogEvent::Truncated(t) => vec![format!(
            "Warning: {} for {}; using the first {}",
            plural(t.codes, "code"),
            plural(t.images, "photo"),
            t.kept
        )],
        CatalogEvent::LogoUnavailable { path, reason } => vec![format!(
            "Warning: logo {} unavailable ({}), cover rendered without it",
            path.display(),
            reason
        )],
        CatalogEvent::CoverRendered { title, logo } => {
            let detail = if *logo { " (logo)" } else { "" };
            vec![format!("Cover: {title}{detail}")]
        }
        CatalogEvent::PageStarted { page } => vec![format!("Page {page}")],
        CatalogEvent::ItemPlaced {
            index,
            code,
            cell,
            placeholder,
            ..
        } => {
            let mut lines = vec![format!(
                "{}{} {} → row {}, col {}",
                indent(1),
                format_index(index + 1),
                code,
                cell.row + 1,
                cell.col + 1
            )];
            if let Some(reason) = placeholder {
                lines.push(format!("{}Error: {}", indent(2), reason));
            }
            lines
        }
    }
}

/// Format the summary of a finished catalog.
pub fn format_catalog_summary(summary: &CatalogSummary, path: &Path) -> Vec<String> {
    let mut lines = vec![format!("{} → {}", summary.title, path.display())];
    lines.push(format!(
        "{}{} on {} ({} total)",
        indent(1),
        plural(summary.items, "photo"),
        plural(summary.grid_pages, "grid page"),
        plural(summary.total_pages, "page")
    ));

    if let LogoStatus::Unavailable { path, .. } = &summary.logo {
        lines.push(format!("{}Logo: {} (not found)", indent(1), path.display()));
    }
    if let Some(t) = &summary.truncated {
        lines.push(format!(
            "{}Truncated: {} photos, {} codes → {} items",
            indent(1),
            t.images,
            t.codes,
            t.kept
        ));
    }
    if !summary.placeholders.is_empty() {
        lines.push(format!(
            "{}Placeholders: {}",
            indent(1),
            summary.placeholders.len()
        ));
        for p in &summary.placeholders {
            lines.push(format!(
                "{}{} {} ({})",
                indent(2),
                format_index(p.index + 1),
                p.code,
                p.path.display()
            ));
        }
    }
    lines
}

/// Print a catalog summary to stdout.
pub fn print_catalog_summary(summary: &CatalogSummary, path: &Path) {
    for line in format_catalog_summary(summary, path) {
        println!("{}", line);
    }
}

// ============================================================================
// Inventory
// ============================================================================

/// Format an exported inventory, one line per row.
pub fn format_inventory_output(inventory: &Inventory, path: &Path) -> Vec<String> {
    let mut lines = vec![format!("Inventory {} → {}", inventory.base, path.display())];
    for (i, row) in inventory.rows.iter().enumerate() {
        lines.push(format!(
            "{}{} {} {} (stock {})",
            indent(1),
            format_index(i + 1),
            row.code,
            row.filename,
            row.stock
        ));
    }
    lines
}

/// Print inventory output to stdout.
pub fn print_inventory_output(inventory: &Inventory, path: &Path) {
    for line in format_inventory_output(inventory, path) {
        println!("{}", line);
    }
}

// ============================================================================
// Batch
// ============================================================================

pub fn format_batch_event(event: &BatchEvent) -> Vec<String> {
    match event {
        BatchEvent::JobStarted { index, title } => {
            vec![format!("{} {} rendering", format_index(*index), title)]
        }
        BatchEvent::JobFinished { index, title, ok } => {
            let status = if *ok { "done" } else { "failed" };
            vec![format!("{} {} {}", format_index(*index), title, status)]
        }
    }
}

/// Format batch outcomes in job order, then a one-line tally.
pub fn format_batch_output(outcomes: &[JobOutcome]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut failed = 0;
    for outcome in outcomes {
        match &outcome.result {
            Ok((path, summary)) => {
                lines.push(format!(
                    "{} {} → {}",
                    format_index(outcome.index),
                    outcome.title,
                    path.display()
                ));
                lines.push(format!(
                    "{}{}, {}",
                    indent(1),
                    plural(summary.items, "photo"),
                    plural(summary.total_pages, "page")
                ));
                if !summary.placeholders.is_empty() {
                    lines.push(format!(
                        "{}Placeholders: {}",
                        indent(1),
                        summary.placeholders.len()
                    ));
                }
            }
            Err(err) => {
                failed += 1;
                lines.push(format!(
                    "{} {} failed",
                    format_index(outcome.index),
                    outcome.title
                ));
                lines.push(format!("{}Error: {}", indent(1), err));
            }
        }
    }
    lines.push(format!(
        "Rendered {} of {}",
        outcomes.len() - failed,
        plural(outcomes.len(), "catalog")
    ));
    lines
}

/// Print batch output to stdout.
pub fn print_batch_output(outcomes: &[JobOutcome]) {
    for line in format_batch_output(outcomes) {
        println!("{}", line);
    }
}
