//! PDFium library loader with platform-specific search paths.
//!
//! Centralizes the logic for locating and binding the PDFium dynamic
//! library across deployment scenarios, and owns the process-wide shared
//! instance. pdfium is not thread-safe, so the instance lives behind a
//! mutex and every document operation holds the lock for its duration.

use super::PdfError;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use pdfium_render::prelude::*;
use std::path::PathBuf;

static SHARED: Lazy<Result<Mutex<Pdfium>, PdfError>> =
    Lazy::new(|| PdfiumLoader::load().map(Mutex::new));

/// The shared pdfium instance, bound on first use.
pub(crate) fn shared() -> Result<&'static Mutex<Pdfium>, PdfError> {
    SHARED.as_ref().map_err(Clone::clone)
}

pub struct PdfiumLoader;

impl PdfiumLoader {
    /// Bind the PDFium library from known search paths or the system
    /// library.
    ///
    /// Search order:
    /// 1. `lib/` in the current working directory (development)
    /// 2. `lib/` relative to the executable
    /// 3. `Resources/lib/` in a macOS bundle
    /// 4. System library fallback
    pub fn load() -> Result<Pdfium, PdfError> {
        for dir in Self::search_dirs() {
            let lib = PathBuf::from(Pdfium::pdfium_platform_library_name_at_path(&dir));
            if lib.exists() {
                if let Ok(bindings) = Pdfium::bind_to_library(&lib) {
                    return Ok(Pdfium::new(bindings));
                }
            }
        }
        Pdfium::bind_to_system_library()
            .map(Pdfium::new)
            .map_err(|e| PdfError::LibraryUnavailable(format!("{e:?}")))
    }

    fn search_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();

        // Current working directory (development)
        if let Ok(cwd) = std::env::current_dir() {
            dirs.push(cwd.join("lib"));
        }

        // Executable-relative path
        if let Ok(exe) = std::env::current_exe() {
            if let Some(parent) = exe.parent() {
                dirs.push(parent.join("lib"));

                // macOS bundle path
                if let Some(grandparent) = parent.parent() {
                    dirs.push(grandparent.join("Resources/lib"));
                }
            }
        }

        dirs
    }
}
