//! Upload/drop intake - turning raw picked or dropped files into
//! document records.
//!
//! Two entry points feed the store:
//!
//! - **Picker intake**: paths chosen through the native file dialog. The
//!   dialog itself hints at PDFs, but the chosen paths are forwarded without
//!   re-validation.
//! - **Drop intake**: paths dropped onto the window. These are filtered by
//!   [`looks_like_pdf`]; anything else is silently discarded.

use crate::store::DocumentRecord;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Leading bytes of every PDF file.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Wrap picker paths into records, in input order, with no filtering.
pub fn records_from_picker(paths: Vec<PathBuf>) -> Vec<DocumentRecord> {
    paths.into_iter().map(DocumentRecord::from_path).collect()
}

/// Wrap dropped paths into records, keeping only those that look like PDFs.
/// Files failing the check are dropped without surfacing an error.
pub fn records_from_drop(paths: Vec<PathBuf>) -> Vec<DocumentRecord> {
    paths
        .into_iter()
        .filter(|path| {
            let keep = looks_like_pdf(path);
            if !keep {
                debug!(path = %path.display(), "discarding non-PDF drop");
            }
            keep
        })
        .map(DocumentRecord::from_path)
        .collect()
}

/// Desktop analog of the `application/pdf` MIME check: accept a `.pdf`
/// extension (case-insensitive), or sniff the `%PDF-` magic when the
/// extension is missing or different.
pub fn looks_like_pdf(path: &Path) -> bool {
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    {
        return true;
    }
    has_pdf_magic(path)
}

fn has_pdf_magic(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };
    let mut header = [0u8; PDF_MAGIC.len()];
    file.read_exact(&mut header).is_ok() && header == *PDF_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_pdf_extension_accepted_without_reading() {
        // The path does not exist; the extension alone is enough.
        assert!(looks_like_pdf(Path::new("/nonexistent/report.pdf")));
        assert!(looks_like_pdf(Path::new("/nonexistent/REPORT.PDF")));
    }

    #[test]
    fn test_magic_bytes_accepted_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "report", b"%PDF-1.7 rest of file");
        assert!(looks_like_pdf(&path));
    }

    #[test]
    fn test_non_pdf_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "notes.txt", b"plain text");
        assert!(!looks_like_pdf(&path));
    }

    #[test]
    fn test_drop_filters_mixed_set() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(&dir, "a.pdf", b"%PDF-1.4");
        let b = write_file(&dir, "b.pdf", b"%PDF-1.4");
        let other = write_file(&dir, "c.txt", b"not a pdf");

        let records = records_from_drop(vec![a, b, other]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_ref(), "a.pdf");
        assert_eq!(records[1].name.as_ref(), "b.pdf");
    }

    #[test]
    fn test_picker_does_not_filter() {
        let records = records_from_picker(vec![
            PathBuf::from("/docs/a.pdf"),
            PathBuf::from("/docs/not-a-pdf.txt"),
        ]);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_empty_drop_is_empty() {
        assert!(records_from_drop(Vec::new()).is_empty());
    }
}
