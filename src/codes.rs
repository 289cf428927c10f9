//! Sequential product codes and artifact naming.
//!
//! Every photo in a batch gets a display code of the form `{BASE}-{NNN}`:
//! the base label upper-cased, a dash, and the 1-based ordinal zero-padded to
//! three digits.
//!
//! - `generate_codes("dfr", 3)` → `DFR-001`, `DFR-002`, `DFR-003`
//! - the 1000th code of `"mono"` is `MONO-1000` (padding is a minimum width,
//!   never a truncation)
//!
//! Codes are unique within one call because ordinals are. Nothing is
//! remembered between calls: two batches with the same base produce the same
//! codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the zero-padded ordinal.
const ORDINAL_WIDTH: usize = 3;

/// A generated display label for one photographed item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generate `count` sequential codes for `base`.
///
/// Pure: no I/O, same inputs always give the same sequence. `count == 0`
/// yields an empty vector.
pub fn generate_codes(base: &str, count: usize) -> Vec<Code> {
    let prefix = base.to_uppercase();
    (1..=count)
        .map(|ordinal| Code(format!("{prefix}-{ordinal:0>width$}", width = ORDINAL_WIDTH)))
        .collect()
}

/// Suggested file name for a catalog titled `title`.
///
/// Whitespace and path separators become `_` so the name is a single path
/// component: `"Spring Catalog"` → `Spring_Catalog.pdf`.
pub fn catalog_filename(title: &str) -> String {
    format!("{}.pdf", sanitize_component(title))
}

/// Suggested file name for the inventory sheet of a base label.
pub fn inventory_filename(base: &str) -> String {
    format!("Inventory_{}.json", sanitize_component(base))
}

fn sanitize_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect()
}
