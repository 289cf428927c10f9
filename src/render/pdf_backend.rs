//! PDF backend on `printpdf`.
//!
//! | Operation | printpdf |
//! |---|---|
//! | Document + pages | `PdfDocument::new` / `add_page`, A4 portrait in `Mm` |
//! | Fonts | built-in `Helvetica` / `HelveticaBold` (no font files embedded) |
//! | Text | `PdfLayerReference::use_text` |
//! | Raster | `ImageXObject` (RGB8) sized through its DPI |
//! | Output | `save_to_bytes` |
//!
//! printpdf puts the origin at the bottom-left; incoming coordinates are
//! top-left based and flipped here.

use super::backend::{BackendError, DocumentBackend};
use super::params::{FontStyle, ImageParams, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, TextParams};
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerIndex, PdfLayerReference, PdfPageIndex, Px,
};

const LAYER_NAME: &str = "Layer 1";

/// Backend producing a single PDF document in memory.
pub struct PdfBackend {
    doc: Option<PdfDocumentReference>,
    /// The page `PdfDocument::new` creates up front; handed out by the first
    /// `begin_page`.
    first_page: (PdfPageIndex, PdfLayerIndex),
    current: Option<PdfLayerReference>,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    pages: usize,
}

impl PdfBackend {
    /// Create an empty A4 portrait document titled `title`.
    pub fn new(title: &str) -> Result<Self, BackendError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| BackendError::Font(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| BackendError::Font(e.to_string()))?;

        Ok(Self {
            doc: Some(doc),
            first_page: (page, layer),
            current: None,
            regular,
            bold,
            pages: 0,
        })
    }

    fn layer(&self) -> Result<&PdfLayerReference, BackendError> {
        if self.doc.is_none() {
            return Err(BackendError::Finished);
        }
        self.current.as_ref().ok_or(BackendError::NoPage)
    }

    fn font(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        }
    }
}

impl DocumentBackend for PdfBackend {
    fn begin_page(&mut self) -> Result<(), BackendError> {
        let doc = self.doc.as_ref().ok_or(BackendError::Finished)?;
        let (page, layer) = if self.pages == 0 {
            self.first_page
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME)
        };
        self.current = Some(doc.get_page(page).get_layer(layer));
        self.pages += 1;
        Ok(())
    }

    fn draw_text(&mut self, params: &TextParams) -> Result<(), BackendError> {
        let layer = self.layer()?;
        layer.use_text(
            params.text.as_str(),
            params.size,
            Mm(params.x),
            Mm(PAGE_HEIGHT_MM - params.y),
            self.font(params.style),
        );
        Ok(())
    }

    fn draw_image(&mut self, params: &ImageParams<'_>) -> Result<(), BackendError> {
        let layer = self.layer()?.clone();
        let photo = params.photo;

        let image = Image::from(ImageXObject {
            width: Px(photo.width as usize),
            height: Px(photo.height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: photo.rgb.clone(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        });

        // printpdf sizes rasters by DPI: pixels / inches gives the target width.
        let dpi = photo.width as f32 / (params.width / 25.4);
        let scale_y = params.height / (photo.height as f32 / dpi * 25.4);

        image.add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(params.x)),
                translate_y: Some(Mm(PAGE_HEIGHT_MM - params.y - params.height)),
                dpi: Some(dpi),
                scale_y: Some(scale_y),
                ..Default::default()
            },
        );
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn finish(&mut self) -> Result<Vec<u8>, BackendError> {
        let doc = self.doc.take().ok_or(BackendError::Finished)?;
        self.current = None;
        doc.save_to_bytes()
            .map_err(|e| BackendError::Serialize(e.to_string()))
    }
}
