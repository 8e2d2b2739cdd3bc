//! PDF decoding and page rasterization using pdfium.
//!
//! The workspace never touches PDF internals itself; it hands a file path to
//! this module and gets back a page count and rasterized page images:
//!
//! - `loader` - shared PDFium library loading logic
//! - `document` - page counting and page rasterization at a target width
//! - `error` - the `PdfError` taxonomy

mod document;
mod error;
mod loader;

pub use document::{page_count, render_pages, PageImage};
pub use error::PdfError;
pub use loader::PdfiumLoader;
