//! Catalog rendering: one cover page followed by 3×3 photo grid pages.
//!
//! ```text
//! page 1        cover: title, optional logo, date
//! page 2        photos 1–9   (cells (0,0) … (2,2))
//! page 3        photos 10–18
//! …             ceil(n / 9) grid pages in total, never a trailing empty one
//! ```
//!
//! ## Pairing photos with codes
//!
//! Photos and codes are zipped positionally. If the two lists differ in
//! length, pairing stops at the shorter one; the discarded counts are
//! reported in [`CatalogSummary::truncated`] and as a
//! [`CatalogEvent::Truncated`] event. This is never an error.
//!
//! ## Failure policy
//!
//! - A photo that cannot be read or decoded gets a placeholder line
//!   (`Error: <path>`) in its cell; its code is still printed and the
//!   remaining photos render normally.
//! - A missing or unreadable logo leaves the cover without a logo.
//! - Invalid configuration and backend failures abort the call before any
//!   bytes exist, so no partial document can be written.
//!
//! Every call owns its layout cursor, backend and document. Nothing is
//! shared between calls, so catalogs can be rendered concurrently.

use crate::codes::{Code, catalog_filename};
use crate::config::{CatalogConfig, ConfigError, GridConfig};
use crate::layout::{self, GridCell, LayoutCursor};
use crate::photo::{self, PhotoError};
use crate::render::{
    BackendError, DocumentBackend, FontStyle, ImageParams, PAGE_WIDTH_MM, PdfBackend, TextParams,
};
use crate::storage::{self, StorageError};
use crate::types::ImageRef;
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Offset of the placeholder baseline below the cell top.
const PLACEHOLDER_OFFSET_MM: f32 = 5.0;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Drawing failed: {0}")]
    Backend(#[from] BackendError),
    #[error("Invalid date format: {0}")]
    DateFormat(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A photo paired with its code. Consumed exactly once by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoItem {
    pub image: ImageRef,
    pub code: Code,
}

/// Counts discarded when photo and code lists disagree in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    pub images: usize,
    pub codes: usize,
    /// Items actually paired.
    pub kept: usize,
}

/// Zip photos with codes, stopping at the shorter list.
pub fn pair_items(images: Vec<ImageRef>, codes: Vec<Code>) -> (Vec<PhotoItem>, Option<Truncation>) {
    let truncation = (images.len() != codes.len()).then(|| Truncation {
        images: images.len(),
        codes: codes.len(),
        kept: images.len().min(codes.len()),
    });
    let items = images
        .into_iter()
        .zip(codes)
        .map(|(image, code)| PhotoItem { image, code })
        .collect();
    (items, truncation)
}

/// Everything one catalog needs besides configuration.
#[derive(Debug, Clone)]
pub struct CatalogInput {
    pub title: String,
    pub images: Vec<ImageRef>,
    pub codes: Vec<Code>,
    /// Date printed on the cover.
    pub date: NaiveDate,
}

/// Progress events emitted while rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    Truncated(Truncation),
    CoverRendered {
        title: String,
        logo: bool,
    },
    LogoUnavailable {
        path: PathBuf,
        reason: String,
    },
    PageStarted {
        /// 1-based grid page number (the cover is not counted).
        page: usize,
    },
    ItemPlaced {
        index: usize,
        code: String,
        page: usize,
        cell: GridCell,
        /// Load failure shown instead of the photo, if any.
        placeholder: Option<String>,
    },
}

/// What happened to the cover logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoStatus {
    NotConfigured,
    Rendered(PathBuf),
    Unavailable { path: PathBuf, reason: String },
}

/// A cell whose photo could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub index: usize,
    pub code: Code,
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub title: String,
    pub items: usize,
    pub grid_pages: usize,
    /// Cover plus grid pages.
    pub total_pages: usize,
    pub logo: LogoStatus,
    pub placeholders: Vec<Placeholder>,
    pub truncated: Option<Truncation>,
}

/// A finished catalog, held in memory until the caller stores it.
#[derive(Debug, Clone)]
pub struct CatalogDocument {
    /// Suggested file name derived from the title.
    pub filename: String,
    pub bytes: Vec<u8>,
    pub summary: CatalogSummary,
}

impl CatalogDocument {
    /// Write the document into `dir` under its suggested file name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, CatalogError> {
        Ok(storage::write_artifact(dir, &self.filename, &self.bytes)?)
    }
}

/// Render a catalog to PDF.
pub fn render_catalog(
    input: CatalogInput,
    config: &CatalogConfig,
    progress: Option<Sender<CatalogEvent>>,
) -> Result<CatalogDocument, CatalogError> {
    let mut backend = PdfBackend::new(&input.title)?;
    render_catalog_with_backend(&mut backend, input, config, progress)
}

/// Render a catalog through a specific backend (allows testing with a mock).
pub fn render_catalog_with_backend(
    backend: &mut impl DocumentBackend,
    input: CatalogInput,
    config: &CatalogConfig,
    progress: Option<Sender<CatalogEvent>>,
) -> Result<CatalogDocument, CatalogError> {
    config.validate()?;
    let emit = |event: CatalogEvent| {
        if let Some(tx) = &progress {
            // A gone receiver only means nobody is watching.
            tx.send(event).ok();
        }
    };

    let CatalogInput {
        title,
        images,
        codes,
        date,
    } = input;
    let date_line = format_date(date, &config.cover.date_format)?;

    let (items, truncated) = pair_items(images, codes);
    if let Some(t) = truncated {
        emit(CatalogEvent::Truncated(t));
    }

    let logo = render_cover(backend, &title, &date_line, config)?;
    if let LogoStatus::Unavailable { path, reason } = &logo {
        emit(CatalogEvent::LogoUnavailable {
            path: path.clone(),
            reason: reason.clone(),
        });
    }
    emit(CatalogEvent::CoverRendered {
        title: title.clone(),
        logo: matches!(logo, LogoStatus::Rendered(_)),
    });

    let mut cursor = LayoutCursor::new();
    let mut placeholders = Vec::new();
    let item_count = items.len();

    for (index, item) in items.into_iter().enumerate() {
        let placement = cursor.place();
        debug_assert_eq!(placement.cell, layout::cell_for_index(index));
        debug_assert_eq!(placement.page, layout::grid_page_for_index(index));
        if placement.opens_page {
            backend.begin_page()?;
            emit(CatalogEvent::PageStarted {
                page: placement.page,
            });
        }

        let failure = render_cell(backend, &item, placement.cell, config)?;
        emit(CatalogEvent::ItemPlaced {
            index,
            code: item.code.to_string(),
            page: placement.page,
            cell: placement.cell,
            placeholder: failure.as_ref().map(ToString::to_string),
        });
        if let Some(err) = failure {
            placeholders.push(Placeholder {
                index,
                code: item.code,
                path: item.image.path,
                reason: err.to_string(),
            });
        }
    }

    let grid_pages = cursor.pages_opened();
    debug_assert_eq!(grid_pages, layout::grid_page_count(item_count));

    let total_pages = backend.page_count();
    let bytes = backend.finish()?;

    Ok(CatalogDocument {
        filename: catalog_filename(&title),
        bytes,
        summary: CatalogSummary {
            title,
            items: item_count,
            grid_pages,
            total_pages,
            logo,
            placeholders,
            truncated,
        },
    })
}

fn format_date(date: NaiveDate, pattern: &str) -> Result<String, CatalogError> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern))
        .map_err(|_| CatalogError::DateFormat(pattern.to_string()))?;
    Ok(out)
}

/// Draw `text` so that its horizontal center lands on `center_x`.
fn draw_centered(
    backend: &mut impl DocumentBackend,
    text: &str,
    center_x: f32,
    baseline: f32,
    size: f32,
    style: FontStyle,
) -> Result<(), BackendError> {
    let width = backend.text_width(text, style, size);
    backend.draw_text(&TextParams {
        text: text.to_string(),
        x: center_x - width / 2.0,
        y: baseline,
        size,
        style,
    })
}

fn render_cover(
    backend: &mut impl DocumentBackend,
    title: &str,
    date_line: &str,
    config: &CatalogConfig,
) -> Result<LogoStatus, CatalogError> {
    let cover = &config.cover;
    let center = PAGE_WIDTH_MM / 2.0;

    backend.begin_page()?;
    draw_centered(
        backend,
        title,
        center,
        cover.title_top,
        config.fonts.title_size,
        FontStyle::Bold,
    )?;

    let logo = match &cover.logo {
        None => LogoStatus::NotConfigured,
        Some(path) if !path.is_file() => LogoStatus::Unavailable {
            path: path.clone(),
            reason: "file not found".to_string(),
        },
        Some(path) => {
            let max_px = layout::max_pixel_width(cover.logo_width, config.images.max_dpi);
            match photo::load_photo(path, Some(max_px)) {
                Ok(raster) => {
                    let (w, h) = raster.dimensions();
                    let height = cover.logo_width * h as f32 / w as f32;
                    backend.draw_image(&ImageParams {
                        photo: &raster,
                        x: center - cover.logo_width / 2.0,
                        y: cover.logo_top,
                        width: cover.logo_width,
                        height,
                    })?;
                    LogoStatus::Rendered(path.clone())
                }
                Err(err) => LogoStatus::Unavailable {
                    path: path.clone(),
                    reason: err.to_string(),
                },
            }
        }
    };

    draw_centered(
        backend,
        date_line,
        center,
        cover.date_top,
        config.fonts.date_size,
        FontStyle::Regular,
    )?;
    Ok(logo)
}

/// Top-left corner of a grid cell, in millimetres.
pub fn cell_origin(cell: GridCell, grid: &GridConfig) -> (f32, f32) {
    (
        grid.margin_left + cell.col as f32 * grid.cell_width,
        grid.margin_top + cell.row as f32 * grid.cell_height,
    )
}

/// Draw one cell. Returns the load failure when a placeholder was drawn
/// instead of the photo; backend errors are fatal and propagate.
fn render_cell(
    backend: &mut impl DocumentBackend,
    item: &PhotoItem,
    cell: GridCell,
    config: &CatalogConfig,
) -> Result<Option<PhotoError>, CatalogError> {
    let grid = &config.grid;
    let (x, y) = cell_origin(cell, grid);

    let max_px = layout::max_pixel_width(grid.image_width, config.images.max_dpi);
    let failure = match photo::load_photo(&item.image.path, Some(max_px)) {
        Ok(raster) => {
            let (width, height) =
                layout::fit_to_box(raster.dimensions(), grid.image_width, grid.image_height);
            backend.draw_image(&ImageParams {
                photo: &raster,
                x: x + grid.image_inset + (grid.image_width - width) / 2.0,
                y,
                width,
                height,
            })?;
            None
        }
        Err(err) => {
            backend.draw_text(&TextParams {
                text: format!("Error: {}", item.image.path.display()),
                x,
                y: y + PLACEHOLDER_OFFSET_MM,
                size: config.fonts.placeholder_size,
                style: FontStyle::Regular,
            })?;
            Some(err)
        }
    };

    draw_centered(
        backend,
        item.code.as_str(),
        x + grid.cell_width / 2.0,
        y + grid.image_height + grid.label_gap,
        config.fonts.code_size,
        FontStyle::Bold,
    )?;
    Ok(failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::generate_codes;
    use crate::render::backend::tests::{MockBackend, RecordedOp};
    use crate::test_helpers::{create_test_jpeg, create_test_png, write_photos};
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 21).unwrap()
    }

    fn no_logo_config() -> CatalogConfig {
        let mut config = CatalogConfig::default();
        config.cover.logo = None;
        config
    }

    fn input(title: &str, images: Vec<ImageRef>, base: &str) -> CatalogInput {
        let codes = generate_codes(base, images.len());
        CatalogInput {
            title: title.to_string(),
            images,
            codes,
            date: date(),
        }
    }

    fn render_mock(input: CatalogInput, config: &CatalogConfig) -> (MockBackend, CatalogDocument) {
        let mut backend = MockBackend::new();
        let doc = render_catalog_with_backend(&mut backend, input, config, None).unwrap();
        (backend, doc)
    }

    // =========================================================================
    // Pairing
    // =========================================================================

    #[test]
    fn pairing_equal_lengths_has_no_truncation() {
        let images = vec![ImageRef::from_path("a.jpg"), ImageRef::from_path("b.jpg")];
        let (items, truncation) = pair_items(images, generate_codes("x", 2));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].code.as_str(), "X-002");
        assert_eq!(items[1].image.filename, "b.jpg");
        assert!(truncation.is_none());
    }

    #[test]
    fn pairing_stops_at_shorter_list() {
        let images = vec![
            ImageRef::from_path("a.jpg"),
            ImageRef::from_path("b.jpg"),
            ImageRef::from_path("c.jpg"),
        ];
        let (items, truncation) = pair_items(images, generate_codes("x", 2));
        assert_eq!(items.len(), 2);
        assert_eq!(
            truncation,
            Some(Truncation {
                images: 3,
                codes: 2,
                kept: 2
            })
        );
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    #[test]
    fn zero_items_render_only_the_cover() {
        let (backend, doc) = render_mock(input("Empty", vec![], "X"), &no_logo_config());
        assert_eq!(backend.page_count(), 1);
        assert_eq!(doc.summary.grid_pages, 0);
        assert_eq!(doc.summary.total_pages, 1);
    }

    #[test]
    fn ten_items_make_cover_plus_two_grid_pages() {
        let tmp = TempDir::new().unwrap();
        let images = write_photos(tmp.path(), 10);
        let (backend, doc) = render_mock(input("Mono", images, "MONO"), &no_logo_config());

        let pages = backend.pages();
        assert_eq!(pages.len(), 3);
        assert_eq!(doc.summary.grid_pages, 2);
        assert_eq!(doc.summary.total_pages, 3);

        let images_on = |page: &Vec<RecordedOp>| {
            page.iter()
                .filter(|op| matches!(op, RecordedOp::Image { .. }))
                .count()
        };
        assert_eq!(images_on(&pages[1]), 9);
        assert_eq!(images_on(&pages[2]), 1);

        let codes: Vec<&str> = backend
            .texts()
            .into_iter()
            .filter(|t| t.starts_with("MONO-"))
            .collect();
        assert_eq!(codes.len(), 10);
        assert_eq!(codes[0], "MONO-001");
        assert_eq!(codes[9], "MONO-010");
    }

    #[test]
    fn exactly_nine_items_have_no_trailing_page() {
        let tmp = TempDir::new().unwrap();
        let images = write_photos(tmp.path(), 9);
        let (backend, doc) = render_mock(input("Nine", images, "N"), &no_logo_config());
        assert_eq!(backend.page_count(), 2);
        assert_eq!(doc.summary.grid_pages, 1);
    }

    #[test]
    fn tenth_item_lands_in_first_cell_of_next_page() {
        let tmp = TempDir::new().unwrap();
        let images = write_photos(tmp.path(), 10);
        let (backend, _) = render_mock(input("Mono", images, "MONO"), &no_logo_config());

        let pages = backend.pages();
        let first_image = |page: &Vec<RecordedOp>| {
            page.iter()
                .find_map(|op| match op {
                    RecordedOp::Image { x, y, .. } => Some((*x, *y)),
                    _ => None,
                })
                .unwrap()
        };
        assert_eq!(first_image(&pages[1]), first_image(&pages[2]));
    }

    #[test]
    fn cells_follow_grid_geometry() {
        let tmp = TempDir::new().unwrap();
        // Square photos fill the 60x60 box exactly, so x/y are the raw cell origins + inset.
        let images: Vec<ImageRef> = (0..5)
            .map(|i| {
                let path = tmp.path().join(format!("sq-{i}.png"));
                create_test_png(&path, 50, 50);
                ImageRef::from_path(path)
            })
            .collect();
        let (backend, _) = render_mock(input("Grid", images, "G"), &no_logo_config());

        let positions: Vec<(f32, f32, f32, f32)> = backend
            .operations
            .iter()
            .filter_map(|op| match op {
                RecordedOp::Image {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect();
        assert_eq!(positions[0], (11.0, 20.0, 60.0, 60.0));
        assert_eq!(positions[1], (74.0, 20.0, 60.0, 60.0));
        assert_eq!(positions[2], (137.0, 20.0, 60.0, 60.0));
        assert_eq!(positions[3], (11.0, 105.0, 60.0, 60.0));
        assert_eq!(positions[4], (74.0, 105.0, 60.0, 60.0));
    }

    #[test]
    fn code_label_is_centered_under_image() {
        let tmp = TempDir::new().unwrap();
        let images = write_photos(tmp.path(), 1);
        let (backend, _) = render_mock(input("One", images, "DFR"), &no_logo_config());

        let (x, y, size) = backend
            .operations
            .iter()
            .find_map(|op| match op {
                RecordedOp::Text {
                    text, x, y, size, ..
                } if text == "DFR-001" => Some((*x, *y, *size)),
                _ => None,
            })
            .unwrap();
        let width = crate::render::text_width_mm("DFR-001", FontStyle::Bold, size);
        assert!((x + width / 2.0 - (10.0 + 31.5)).abs() < 1e-3);
        assert_eq!(y, 20.0 + 60.0 + 8.0);
    }

    #[test]
    fn tall_photo_is_centered_in_image_box() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tall.png");
        create_test_png(&path, 40, 80);
        let (backend, _) = render_mock(
            input("Tall", vec![ImageRef::from_path(path)], "T"),
            &no_logo_config(),
        );

        let image = backend
            .operations
            .iter()
            .find(|op| matches!(op, RecordedOp::Image { .. }))
            .unwrap();
        assert_eq!(
            image,
            &RecordedOp::Image {
                x: 11.0 + 15.0,
                y: 20.0,
                width: 30.0,
                height: 60.0,
                pixels: (40, 80),
            }
        );
    }

    // =========================================================================
    // Failures
    // =========================================================================

    #[test]
    fn unreadable_photo_gets_placeholder_and_rendering_continues() {
        let tmp = TempDir::new().unwrap();
        let mut images = write_photos(tmp.path(), 10);
        let broken = tmp.path().join("broken.jpg");
        std::fs::write(&broken, b"not an image").unwrap();
        images[4] = ImageRef::from_path(&broken);

        let (backend, doc) = render_mock(input("Mixed", images, "MIX"), &no_logo_config());

        assert_eq!(backend.page_count(), 3);
        assert_eq!(backend.image_count(), 9);
        assert_eq!(doc.summary.placeholders.len(), 1);
        let placeholder = &doc.summary.placeholders[0];
        assert_eq!(placeholder.index, 4);
        assert_eq!(placeholder.code.as_str(), "MIX-005");
        assert_eq!(placeholder.path, broken);

        let expected = format!("Error: {}", broken.display());
        assert!(backend.texts().contains(&expected.as_str()));
        // The failing cell still carries its code
        assert!(backend.texts().contains(&"MIX-005"));
    }

    #[test]
    fn placeholder_sits_at_cell_origin() {
        let (backend, _) = render_mock(
            input(
                "Missing",
                vec![ImageRef::from_path("/nonexistent/a.jpg")],
                "M",
            ),
            &no_logo_config(),
        );
        let placeholder = backend
            .operations
            .iter()
            .find(|op| matches!(op, RecordedOp::Text { text, .. } if text.starts_with("Error: ")))
            .unwrap();
        assert!(matches!(
            placeholder,
            RecordedOp::Text { x, y, size, style: FontStyle::Regular, .. }
                if *x == 10.0 && *y == 25.0 && *size == 8.0
        ));
    }

    #[test]
    fn mismatched_lengths_truncate_and_report() {
        let tmp = TempDir::new().unwrap();
        let images = write_photos(tmp.path(), 4);
        let catalog = CatalogInput {
            title: "Short".to_string(),
            images,
            codes: generate_codes("S", 3),
            date: date(),
        };
        let (tx, rx) = mpsc::channel();
        let mut backend = MockBackend::new();
        let doc =
            render_catalog_with_backend(&mut backend, catalog, &no_logo_config(), Some(tx))
                .unwrap();

        assert_eq!(doc.summary.items, 3);
        assert_eq!(backend.image_count(), 3);
        assert_eq!(
            doc.summary.truncated,
            Some(Truncation {
                images: 4,
                codes: 3,
                kept: 3
            })
        );
        let events: Vec<CatalogEvent> = rx.try_iter().collect();
        assert!(matches!(events[0], CatalogEvent::Truncated(_)));
    }

    #[test]
    fn invalid_config_fails_before_drawing() {
        let mut config = no_logo_config();
        config.grid.cell_width = 100.0;
        let mut backend = MockBackend::new();
        let result = render_catalog_with_backend(&mut backend, input("X", vec![], "X"), &config, None);
        assert!(matches!(result, Err(CatalogError::Config(_))));
        assert!(backend.operations.is_empty());
    }

    // =========================================================================
    // Cover
    // =========================================================================

    #[test]
    fn cover_has_title_and_date() {
        let (backend, _) = render_mock(input("Spring Catalog", vec![], "X"), &no_logo_config());
        let cover = &backend.pages()[0];
        assert!(matches!(
            &cover[0],
            RecordedOp::Text { text, size, style: FontStyle::Bold, .. }
                if text == "Spring Catalog" && *size == 24.0
        ));
        assert!(matches!(
            &cover[1],
            RecordedOp::Text { text, style: FontStyle::Regular, .. } if text == "21/03/2026"
        ));
    }

    #[test]
    fn missing_logo_is_not_an_error() {
        let mut config = CatalogConfig::default();
        config.cover.logo = Some(PathBuf::from("/nonexistent/logo.png"));
        let (tx, rx) = mpsc::channel();
        let mut backend = MockBackend::new();
        let doc = render_catalog_with_backend(&mut backend, input("T", vec![], "X"), &config, Some(tx))
            .unwrap();

        assert!(matches!(doc.summary.logo, LogoStatus::Unavailable { .. }));
        assert_eq!(backend.image_count(), 0);
        let events: Vec<CatalogEvent> = rx.try_iter().collect();
        assert!(
            events
                .iter()
                .any(|e| matches!(e, CatalogEvent::LogoUnavailable { .. }))
        );
        assert!(events.contains(&CatalogEvent::CoverRendered {
            title: "T".into(),
            logo: false
        }));
    }

    #[test]
    fn logo_is_centered_on_cover() {
        let tmp = TempDir::new().unwrap();
        let logo = tmp.path().join("logo.jpg");
        create_test_jpeg(&logo, 300, 100);
        let mut config = CatalogConfig::default();
        config.cover.logo = Some(logo.clone());

        let (backend, doc) = render_mock(input("Brand", vec![], "X"), &config);
        assert_eq!(doc.summary.logo, LogoStatus::Rendered(logo));

        let cover = &backend.pages()[0];
        let image = cover
            .iter()
            .find(|op| matches!(op, RecordedOp::Image { .. }))
            .unwrap();
        assert_eq!(
            image,
            &RecordedOp::Image {
                x: 60.0,
                y: 40.0,
                width: 90.0,
                height: 30.0,
                pixels: (300, 100),
            }
        );
    }

    #[test]
    fn corrupt_logo_is_reported_not_fatal() {
        let tmp = TempDir::new().unwrap();
        let logo = tmp.path().join("logo.png");
        std::fs::write(&logo, b"garbage").unwrap();
        let mut config = CatalogConfig::default();
        config.cover.logo = Some(logo);

        let (_, doc) = render_mock(input("Brand", vec![], "X"), &config);
        assert!(matches!(doc.summary.logo, LogoStatus::Unavailable { .. }));
    }

    // =========================================================================
    // Events and output
    // =========================================================================

    #[test]
    fn events_trace_pages_and_cells() {
        let tmp = TempDir::new().unwrap();
        let images = write_photos(tmp.path(), 10);
        let (tx, rx) = mpsc::channel();
        let mut backend = MockBackend::new();
        render_catalog_with_backend(
            &mut backend,
            input("Mono", images, "MONO"),
            &no_logo_config(),
            Some(tx),
        )
        .unwrap();

        let events: Vec<CatalogEvent> = rx.try_iter().collect();
        let pages: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                CatalogEvent::PageStarted { page } => Some(*page),
                _ => None,
            })
            .collect();
        assert_eq!(pages, vec![1, 2]);

        let last = events.last().unwrap();
        assert_eq!(
            last,
            &CatalogEvent::ItemPlaced {
                index: 9,
                code: "MONO-010".into(),
                page: 2,
                cell: GridCell { row: 0, col: 0 },
                placeholder: None,
            }
        );
    }

    #[test]
    fn suggested_filename_comes_from_title() {
        let (_, doc) = render_mock(input("Spring Catalog", vec![], "X"), &no_logo_config());
        assert_eq!(doc.filename, "Spring_Catalog.pdf");
    }

    #[test]
    fn write_to_persists_bytes() {
        let tmp = TempDir::new().unwrap();
        let (_, doc) = render_mock(input("Spring Catalog", vec![], "X"), &no_logo_config());
        let path = doc.write_to(&tmp.path().join("outputs")).unwrap();
        assert!(path.ends_with("Spring_Catalog.pdf"));
        assert_eq!(std::fs::read(path).unwrap(), doc.bytes);
    }

    #[test]
    fn render_catalog_produces_pdf() {
        let tmp = TempDir::new().unwrap();
        let images = write_photos(tmp.path(), 2);
        let doc = render_catalog(input("Real", images, "R"), &no_logo_config(), None).unwrap();
        assert!(doc.bytes.starts_with(b"%PDF"));
        assert_eq!(doc.summary.total_pages, 2);
    }
}
