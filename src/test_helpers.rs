//! Shared test utilities for the photo-catalog test suite.
//!
//! Writes small synthetic photos so tests never depend on fixture files.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let images = write_photos(tmp.path(), 10);
//! assert_eq!(images[0].filename, "photo-001.jpg");
//! ```

use image::{ImageEncoder, RgbImage};
use std::path::Path;

use crate::types::ImageRef;

// =========================================================================
// Synthetic photos
// =========================================================================

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Create a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a small valid PNG file with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    gradient(width, height).save(path).unwrap();
}

// =========================================================================
// Photo sets
// =========================================================================

/// Write `count` landscape JPEGs named `photo-001.jpg`, `photo-002.jpg`, …
/// into `dir` and return them in order.
pub fn write_photos(dir: &Path, count: usize) -> Vec<ImageRef> {
    (1..=count)
        .map(|i| {
            let path = dir.join(format!("photo-{i:0>3}.jpg"));
            create_test_jpeg(&path, 48, 32);
            ImageRef::from_path(path)
        })
        .collect()
}
