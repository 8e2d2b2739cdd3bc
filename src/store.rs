//! Document list store - the ordered collection of added PDFs and the
//! current selection.
//!
//! The store is pure state: no I/O, no rendering, no async. Intake appends
//! records, the reorder controller permutes them, and the viewer reads the
//! selected record. Records are distinguished by position, not by name -
//! two files may legitimately share a display name.
//!
//! Index arguments to [`DocumentStore::remove_document`] and
//! [`DocumentStore::reorder`] must be in bounds. Every call site derives its
//! indices from the current collection, so the store does not re-validate.

use gpui::SharedString;
use std::path::{Path, PathBuf};

/// One added PDF: an opaque handle to the bytes plus a display name.
///
/// Immutable once created; removed from the collection only by explicit
/// user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Path to the file on disk. The viewer hands this to pdfium.
    pub path: PathBuf,
    /// Display name shown in the sidebar (the file name).
    pub name: SharedString,
}

impl DocumentRecord {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            path,
            name: name.into(),
        }
    }
}

/// Ordered document collection plus selection and the last intake error.
#[derive(Default)]
pub struct DocumentStore {
    documents: Vec<DocumentRecord>,
    /// Valid index when the collection is non-empty; 0 ("none") when empty.
    selected: usize,
    /// Last intake error, cleared whenever documents are added.
    pub error: Option<SharedString>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The record currently selected for viewing, if any.
    pub fn selected_document(&self) -> Option<&DocumentRecord> {
        self.documents.get(self.selected)
    }

    pub fn selected_path(&self) -> Option<&Path> {
        self.selected_document().map(|doc| doc.path.as_path())
    }

    /// Append records in input order, select the first newly added one, and
    /// clear any prior intake error. An empty batch is a no-op.
    pub fn add_documents(&mut self, records: Vec<DocumentRecord>) {
        if records.is_empty() {
            return;
        }
        self.selected = self.documents.len();
        self.documents.extend(records);
        self.error = None;
    }

    /// Remove the record at `idx` (caller guarantees bounds).
    ///
    /// Selection policy: empty collection resets to 0 ("none"); removing the
    /// selected record resets to 0; removing an earlier record shifts the
    /// selection down to keep tracking the same document; removing a later
    /// record leaves it alone.
    pub fn remove_document(&mut self, idx: usize) {
        self.documents.remove(idx);
        if self.documents.is_empty() || idx == self.selected {
            self.selected = 0;
        } else if idx < self.selected {
            self.selected -= 1;
        }
    }

    /// Move the record at `old_idx` to `new_idx`, shifting the records in
    /// between by one. Caller guarantees both indices are in bounds and
    /// distinct.
    ///
    /// Selection bookkeeping deliberately mirrors a swap: a selection at
    /// `old_idx` follows the moved record to `new_idx`, and a selection at
    /// `new_idx` becomes `old_idx`. Selections elsewhere are left untouched
    /// even when the move shifts the records under them.
    pub fn reorder(&mut self, old_idx: usize, new_idx: usize) {
        let record = self.documents.remove(old_idx);
        self.documents.insert(new_idx, record);
        if self.selected == old_idx {
            self.selected = new_idx;
        } else if self.selected == new_idx {
            self.selected = old_idx;
        }
    }

    /// Set the selection. Returns false (and does nothing) when `idx` is
    /// already selected, so callers can skip redundant viewer reloads.
    pub fn select(&mut self, idx: usize) -> bool {
        if idx == self.selected {
            return false;
        }
        self.selected = idx;
        true
    }
}
