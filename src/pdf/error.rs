//! Error types for PDF operations.

use thiserror::Error;

/// Errors surfaced by the pdf module. All of them are viewer-local: a failed
/// document shows an inline placeholder and nothing else is affected.
#[derive(Error, Debug, Clone)]
pub enum PdfError {
    /// The pdfium dynamic library could not be located or bound
    #[error("failed to load the pdfium library: {0}")]
    LibraryUnavailable(String),

    /// pdfium rejected the document
    #[error("failed to open document: {0}")]
    Open(String),

    /// A page failed to rasterize
    #[error("failed to render page {page}: {message}")]
    Render { page: usize, message: String },
}
