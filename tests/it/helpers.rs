//! Test helpers and builders for reducing boilerplate in tests.

use pdfdeck::store::{DocumentRecord, DocumentStore};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// A record pointing at a synthetic path; nothing reads the bytes in
/// store-level tests.
pub fn record(name: &str) -> DocumentRecord {
    DocumentRecord::from_path(PathBuf::from(format!("/docs/{name}")))
}

/// A store pre-populated with one record per name, selection at 0.
pub fn store_with(names: &[&str]) -> DocumentStore {
    let mut store = DocumentStore::new();
    store.add_documents(names.iter().map(|n| record(n)).collect());
    store
}

/// Assert the store's documents match `expected` by display name, in order.
pub fn assert_names(store: &DocumentStore, expected: &[&str]) {
    let names: Vec<_> = store
        .documents()
        .iter()
        .map(|doc| doc.name.as_ref())
        .collect();
    assert_eq!(names, expected);
}

/// Write a file with the given bytes into `dir` for intake sniffing tests.
pub fn write_file(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(bytes).unwrap();
    path
}
