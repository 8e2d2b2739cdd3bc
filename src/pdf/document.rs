//! Page counting and page rasterization at a target width.
//!
//! Both entry points are blocking and meant to run on the background
//! executor. They reopen the document each time rather than holding pdfium
//! state across calls: documents borrow the library instance, and the
//! workspace's stale-load guard makes cheap reopen-and-render the simpler
//! contract.

use super::{loader, PdfError};
use gpui::RenderImage;
use pdfium_render::prelude::*;
use smallvec::smallvec;
use std::path::Path;
use std::sync::Arc;

/// One rasterized page, ready for the viewer.
#[derive(Clone)]
pub struct PageImage {
    pub image: Arc<RenderImage>,
    /// Rasterized size in logical pixels.
    pub width: f32,
    pub height: f32,
}

/// Open the document and report its page count.
pub fn page_count(path: &Path) -> Result<usize, PdfError> {
    let pdfium = loader::shared()?.lock();
    let document = open(&pdfium, path)?;
    Ok(document.pages().len() as usize)
}

/// Rasterize every page at `target_width` logical pixels, preserving each
/// page's aspect ratio. No text or annotation overlays: pages come back as
/// flat images.
pub fn render_pages(path: &Path, target_width: f32) -> Result<Vec<PageImage>, PdfError> {
    let pdfium = loader::shared()?.lock();
    let document = open(&pdfium, path)?;
    let config = PdfRenderConfig::new().set_target_width(target_width.max(1.0) as i32);

    let mut pages = Vec::with_capacity(document.pages().len() as usize);
    for (index, page) in document.pages().iter().enumerate() {
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| PdfError::Render {
                page: index + 1,
                message: format!("{e:?}"),
            })?;
        pages.push(to_page_image(bitmap.as_image()));
    }
    Ok(pages)
}

fn open<'a>(pdfium: &'a Pdfium, path: &Path) -> Result<PdfDocument<'a>, PdfError> {
    pdfium
        .load_pdf_from_file(path, None)
        .map_err(|e| PdfError::Open(format!("{e:?}")))
}

fn to_page_image(image: image::DynamicImage) -> PageImage {
    let mut buffer = image.into_rgba8();
    let (width, height) = buffer.dimensions();
    // gpui samples RenderImage frames as BGRA
    for pixel in buffer.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
    PageImage {
        image: Arc::new(RenderImage::new(smallvec![image::Frame::new(buffer)])),
        width: width as f32,
        height: height as f32,
    }
}
