//! Photo decoding in pure Rust via the `image` crate.
//!
//! | Step | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` with format sniffing |
//! | Downsample to the print size | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Alpha → opaque | composite over white (PDF rasters here are plain RGB) |
//!
//! A [`PhotoError`] is the per-item load failure the catalog renderer turns
//! into a placeholder cell. It never aborts a document on its own.

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, Rgb, RgbImage, Rgba};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("image has no pixels: {0}")]
    Empty(PathBuf),
}

/// Extensions whose decoders are compiled in.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    PHOTO_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Whether `path` has one of the [supported extensions](supported_input_extensions).
pub fn is_supported_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            supported_input_extensions()
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// A decoded photo as interleaved 8-bit RGB, ready to embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRaster {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl PhotoRaster {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Load and decode a photo.
///
/// When `max_width` is given and the photo is wider, it is downsampled to
/// that width (aspect ratio preserved). Smaller photos are never upscaled.
pub fn load_photo(path: &Path, max_width: Option<u32>) -> Result<PhotoRaster, PhotoError> {
    let img = ImageReader::open(path)
        .map_err(|source| PhotoError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .with_guessed_format()
        .map_err(|source| PhotoError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| PhotoError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    if img.width() == 0 || img.height() == 0 {
        return Err(PhotoError::Empty(path.to_path_buf()));
    }

    let img = match max_width {
        Some(max) if img.width() > max => {
            let height = ((img.height() as f64 * max as f64 / img.width() as f64).round() as u32)
                .max(1);
            img.resize_exact(max, height, FilterType::Lanczos3)
        }
        _ => img,
    };

    let rgb = flatten_onto_white(&img);
    Ok(PhotoRaster {
        width: rgb.width(),
        height: rgb.height(),
        rgb: rgb.into_raw(),
    })
}

/// Composite any transparency against a white page.
fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }
    let rgba = img.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let Rgba([r, g, b, a]) = *pixel;
        let alpha = a as f32 / 255.0;
        let blend = |c: u8| (c as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8;
        rgb.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }
    rgb
}
