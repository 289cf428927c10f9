//! Document drawing: the seam between catalog layout and the output format.
//!
//! | Piece | Role |
//! |---|---|
//! | [`DocumentBackend`] | trait: start pages, place text and rasters, measure text, finish |
//! | [`PdfBackend`] | production backend on `printpdf` (A4 portrait, millimetres) |
//! | params | what to draw: [`TextParams`], [`ImageParams`], [`FontStyle`] |
//! | metrics | Helvetica advance widths, for centering without a font file |
//!
//! Coordinates handed to a backend are millimetres from the **top-left**
//! corner of the page; text `y` is the baseline. Backends convert to their
//! own coordinate system.

pub mod backend;
pub mod metrics;
mod params;
pub mod pdf_backend;

pub use backend::{BackendError, DocumentBackend};
pub use metrics::text_width_mm;
pub use params::{FontStyle, ImageParams, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, TextParams};
pub use pdf_backend::PdfBackend;
