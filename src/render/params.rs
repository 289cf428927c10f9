//! Parameter types for drawing operations.
//!
//! These structs describe *what* to draw, not *how*. The catalog renderer
//! builds them from layout math and hands them to a
//! [`DocumentBackend`](super::DocumentBackend); a mock backend can record
//! them in tests without producing a file.

use crate::photo::PhotoRaster;

/// A4 portrait width.
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// A4 portrait height.
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// The two built-in faces the catalog uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// A single line of text. `y` is the baseline, measured from the page top.
#[derive(Debug, Clone, PartialEq)]
pub struct TextParams {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Size in points.
    pub size: f32,
    pub style: FontStyle,
}

/// A raster placed with its top-left corner at (`x`, `y`), scaled to
/// `width` × `height` millimetres.
#[derive(Debug, Clone, Copy)]
pub struct ImageParams<'a> {
    pub photo: &'a PhotoRaster,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}
