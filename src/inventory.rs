//! Inventory sheet for a photo batch.
//!
//! One row per photo: the generated code, the file name the photo was
//! supplied under, and an initial stock count shared by every row. Codes
//! come from the same generator the catalog uses, so an inventory and a
//! catalog built from the same base and photo list in one run line up row
//! for row. Nothing links them across runs.
//!
//! The sheet is exported as pretty-printed JSON:
//!
//! ```json
//! {
//!   "base": "MONO",
//!   "rows": [
//!     { "code": "MONO-001", "filename": "IMG_0001.jpg", "stock": 5 }
//!   ]
//! }
//! ```

use crate::codes::{Code, generate_codes, inventory_filename};
use crate::storage::{self, StorageError};
use crate::types::ImageRef;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub code: Code,
    pub filename: String,
    pub stock: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Upper-cased base label shared by every code.
    pub base: String,
    pub rows: Vec<InventoryRow>,
}

impl Inventory {
    /// Suggested file name, `Inventory_<base>.json`.
    pub fn filename(&self) -> String {
        inventory_filename(&self.base)
    }

    pub fn to_json(&self) -> Result<String, InventoryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Export into `dir` under [`filename`](Self::filename).
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, InventoryError> {
        let json = self.to_json()?;
        Ok(storage::write_artifact(dir, &self.filename(), json.as_bytes())?)
    }
}

/// Build the inventory for `photos`, in order.
pub fn build_inventory(base: &str, photos: &[ImageRef], stock: u32) -> Inventory {
    let rows = generate_codes(base, photos.len())
        .into_iter()
        .zip(photos)
        .map(|(code, photo)| InventoryRow {
            code,
            filename: photo.filename.clone(),
            stock,
        })
        .collect();
    Inventory {
        base: base.to_uppercase(),
        rows,
    }
}
