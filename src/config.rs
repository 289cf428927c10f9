//! Catalog configuration.
//!
//! Handles loading, validating, and merging `catalog.toml`. Stock defaults
//! reproduce the classic layout (A4 portrait, 3×3 grid of 63×85 mm cells with
//! a 60×60 mm image box); a config file overrides only the keys it names.
//!
//! ## Config File Location
//!
//! `--config <file>` on the command line, otherwise `catalog.toml` in the
//! working directory, otherwise stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! output_dir = "outputs"    # Where catalogs and inventories are written
//!
//! [grid]
//! margin_left = 10.0        # mm from the left page edge to the first column
//! margin_top = 20.0         # mm from the top page edge to the first row
//! cell_width = 63.0
//! cell_height = 85.0
//! image_width = 60.0        # image box inside each cell
//! image_height = 60.0
//! image_inset = 1.0         # horizontal offset of the image inside its cell
//! label_gap = 8.0           # code baseline distance below the image box
//!
//! [cover]
//! logo = "logo.png"         # optional; missing file = no logo
//! title_top = 16.0
//! logo_top = 40.0
//! logo_width = 90.0
//! date_top = 146.0
//! date_format = "%d/%m/%Y"
//!
//! [fonts]
//! title_size = 24.0
//! date_size = 12.0
//! code_size = 10.0
//! placeholder_size = 8.0
//!
//! [images]
//! max_dpi = 300.0           # downsample embedded photos above this density
//!
//! [processing]
//! max_processes = 4         # batch workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::layout::GRID_SIZE;
use crate::render::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file picked up from the working directory.
pub const CONFIG_FILE_NAME: &str = "catalog.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Catalog configuration loaded from `catalog.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directory finished artifacts are written to.
    pub output_dir: PathBuf,
    /// Grid geometry for photo pages.
    pub grid: GridConfig,
    /// Cover page placement and date format.
    pub cover: CoverConfig,
    /// Font sizes in points.
    pub fonts: FontConfig,
    /// Embedded raster settings.
    pub images: ImagesConfig,
    /// Parallel batch settings.
    pub processing: ProcessingConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("outputs"),
            grid: GridConfig::default(),
            cover: CoverConfig::default(),
            fonts: FontConfig::default(),
            images: ImagesConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.grid;
        let positive = [
            ("grid.cell_width", g.cell_width),
            ("grid.cell_height", g.cell_height),
            ("grid.image_width", g.image_width),
            ("grid.image_height", g.image_height),
            ("cover.logo_width", self.cover.logo_width),
            ("fonts.title_size", self.fonts.title_size),
            ("fonts.date_size", self.fonts.date_size),
            ("fonts.code_size", self.fonts.code_size),
            ("fonts.placeholder_size", self.fonts.placeholder_size),
            ("images.max_dpi", self.images.max_dpi),
        ];
        for (key, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Validation(format!("{key} must be positive")));
            }
        }

        let non_negative = [
            ("grid.margin_left", g.margin_left),
            ("grid.margin_top", g.margin_top),
            ("grid.image_inset", g.image_inset),
            ("grid.label_gap", g.label_gap),
        ];
        for (key, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Validation(format!(
                    "{key} must not be negative"
                )));
            }
        }

        let columns = GRID_SIZE as f32;
        if g.margin_left + columns * g.cell_width > PAGE_WIDTH_MM {
            return Err(ConfigError::Validation(
                "grid does not fit the page width (margin_left + 3 * cell_width > 210mm)".into(),
            ));
        }
        if g.margin_top + columns * g.cell_height > PAGE_HEIGHT_MM {
            return Err(ConfigError::Validation(
                "grid does not fit the page height (margin_top + 3 * cell_height > 297mm)".into(),
            ));
        }
        if g.image_inset + g.image_width > g.cell_width {
            return Err(ConfigError::Validation(
                "grid.image_inset + grid.image_width must fit inside grid.cell_width".into(),
            ));
        }
        if g.image_height + g.label_gap >= g.cell_height {
            return Err(ConfigError::Validation(
                "grid.image_height + grid.label_gap must stay inside grid.cell_height".into(),
            ));
        }
        if self.cover.logo_width > PAGE_WIDTH_MM {
            return Err(ConfigError::Validation(
                "cover.logo_width must not exceed the page width".into(),
            ));
        }
        validate_date_format(&self.cover.date_format)?;
        Ok(())
    }
}

fn validate_date_format(format: &str) -> Result<(), ConfigError> {
    if format.trim().is_empty() {
        return Err(ConfigError::Validation(
            "cover.date_format must not be empty".into(),
        ));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::Validation(format!(
            "cover.date_format is not a valid strftime pattern: {format}"
        )));
    }
    Ok(())
}

/// Photo grid geometry, in millimetres.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub margin_left: f32,
    pub margin_top: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Image box width; photos are scaled to this width.
    pub image_width: f32,
    /// Image box height; taller photos are scaled down to fit it.
    pub image_height: f32,
    /// Horizontal offset of the image box inside its cell.
    pub image_inset: f32,
    /// Distance from the bottom of the image box to the code baseline.
    pub label_gap: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            margin_left: 10.0,
            margin_top: 20.0,
            cell_width: 63.0,
            cell_height: 85.0,
            image_width: 60.0,
            image_height: 60.0,
            image_inset: 1.0,
            label_gap: 8.0,
        }
    }
}

/// Cover page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverConfig {
    /// Optional logo image. A missing or unreadable file is not an error.
    pub logo: Option<PathBuf>,
    /// Baseline of the title, from the page top.
    pub title_top: f32,
    /// Top edge of the logo.
    pub logo_top: f32,
    /// Printed logo width; height follows the aspect ratio.
    pub logo_width: f32,
    /// Baseline of the date line.
    pub date_top: f32,
    /// strftime pattern for the cover date.
    pub date_format: String,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            logo: Some(PathBuf::from("logo.png")),
            title_top: 16.0,
            logo_top: 40.0,
            logo_width: 90.0,
            date_top: 146.0,
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

/// Font sizes in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    pub title_size: f32,
    pub date_size: f32,
    pub code_size: f32,
    pub placeholder_size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            title_size: 24.0,
            date_size: 12.0,
            code_size: 10.0,
            placeholder_size: 8.0,
        }
    }
}

/// Embedded raster settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Photos denser than this at their printed size are downsampled.
    pub max_dpi: f32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self { max_dpi: 300.0 }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of catalogs rendered at once in batch mode.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)`, at least 1
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(CatalogConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<CatalogConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: CatalogConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load a specific config file. The file must exist.
pub fn load_config_file(path: &Path) -> Result<CatalogConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// Load `catalog.toml` from `dir` if present, otherwise stock defaults.
pub fn load_config(dir: &Path) -> Result<CatalogConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        load_config_file(&path)
    } else {
        resolve_config(None)
    }
}

/// Returns a fully-commented stock `catalog.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Photo Catalog Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Lengths are millimetres on an A4
# portrait page (210 x 297), font sizes are points.
# Unknown keys will cause an error.

# Directory catalogs and inventories are written to.
output_dir = "outputs"

# ---------------------------------------------------------------------------
# Photo grid (3 x 3 cells per page)
# ---------------------------------------------------------------------------
[grid]
margin_left = 10.0
margin_top = 20.0
cell_width = 63.0
cell_height = 85.0

# Image box inside each cell. Photos take the full box width; a photo whose
# height would overflow the box is scaled down to the box height instead.
image_width = 60.0
image_height = 60.0
image_inset = 1.0

# Distance from the bottom of the image box to the code label baseline.
label_gap = 8.0

# ---------------------------------------------------------------------------
# Cover page
# ---------------------------------------------------------------------------
[cover]
# Optional logo, centered horizontally. A missing file just leaves it out.
logo = "logo.png"
title_top = 16.0
logo_top = 40.0
logo_width = 90.0
date_top = 146.0
# strftime pattern for the generation date.
date_format = "%d/%m/%Y"

# ---------------------------------------------------------------------------
# Fonts (Helvetica / Helvetica-Bold)
# ---------------------------------------------------------------------------
[fonts]
title_size = 24.0
date_size = 12.0
code_size = 10.0
placeholder_size = 8.0

# ---------------------------------------------------------------------------
# Embedded photos
# ---------------------------------------------------------------------------
[images]
# Photos denser than this at their printed size are downsampled.
max_dpi = 300.0

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum catalogs rendered in parallel by the batch command.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
