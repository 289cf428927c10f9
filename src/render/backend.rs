//! Drawing backend trait and shared types.
//!
//! The [`DocumentBackend`] trait is everything the catalog renderer needs
//! from an output format: open a page, place text, place a raster, measure
//! text for centering, and hand back the finished bytes.
//!
//! The production implementation is [`PdfBackend`](super::pdf_backend::PdfBackend).
//! Tests use the recording `MockBackend` below.

use super::params::{FontStyle, ImageParams, TextParams};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("font setup failed: {0}")]
    Font(String),
    #[error("no page has been started")]
    NoPage,
    #[error("document already finished")]
    Finished,
    #[error("serializing document failed: {0}")]
    Serialize(String),
}

/// Trait for document backends.
///
/// A backend owns exactly one document under construction. Nothing about it
/// is shared between render calls.
pub trait DocumentBackend {
    /// Start a new page; subsequent drawing lands on it.
    fn begin_page(&mut self) -> Result<(), BackendError>;

    /// Draw one line of text.
    fn draw_text(&mut self, params: &TextParams) -> Result<(), BackendError>;

    /// Draw a raster image.
    fn draw_image(&mut self, params: &ImageParams<'_>) -> Result<(), BackendError>;

    /// Width of `text` in millimetres.
    fn text_width(&self, text: &str, style: FontStyle, size: f32) -> f32 {
        super::metrics::text_width_mm(text, style, size)
    }

    /// Pages started so far.
    fn page_count(&self) -> usize;

    /// Serialize the document. Can only be called once.
    fn finish(&mut self) -> Result<Vec<u8>, BackendError>;
}
