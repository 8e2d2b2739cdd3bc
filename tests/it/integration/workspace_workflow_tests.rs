//! Workflow tests spanning intake, the store, and the reorder controller.

use crate::helpers::{assert_names, record, store_with, write_file};
use gpui::{point, px};
use pdfdeck::constants::{ITEM_GAP, ITEM_HEIGHT};
use pdfdeck::intake::{records_from_drop, records_from_picker};
use pdfdeck::reorder::DragState;
use pdfdeck::store::DocumentStore;

const STEP: f32 = ITEM_HEIGHT + ITEM_GAP;

#[test]
fn test_picker_intake_appends_and_selects_first_new() {
    let mut store = store_with(&["a.pdf"]);
    let records = records_from_picker(vec!["/docs/b.pdf".into(), "/docs/c.pdf".into()]);
    store.add_documents(records);
    assert_names(&store, &["a.pdf", "b.pdf", "c.pdf"]);
    assert_eq!(store.selected(), 1);
}

#[test]
fn test_mixed_drop_appends_only_pdfs() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.pdf", b"%PDF-1.4");
    let b = write_file(&dir, "b.pdf", b"%PDF-1.4");
    let other = write_file(&dir, "notes.txt", b"plain text");

    let mut store = DocumentStore::new();
    store.add_documents(records_from_drop(vec![a, b, other]));
    assert_eq!(store.len(), 2);
    assert_names(&store, &["a.pdf", "b.pdf"]);
}

#[test]
fn test_drop_with_no_pdfs_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let other = write_file(&dir, "notes.txt", b"plain text");

    let mut store = store_with(&["a.pdf"]);
    store.select(0);
    store.add_documents(records_from_drop(vec![other]));
    assert_eq!(store.len(), 1);
    assert_eq!(store.selected(), 0);
}

/// Simulate a full drag gesture: press the handle of row `from`, travel to
/// row `to`, release, and apply the resulting move to the store.
fn drag_row(store: &mut DocumentStore, from: usize, to: usize) {
    let mut drag = DragState::default();
    drag.begin(from, point(px(0.0), px(0.0)));
    let travel = (to as f32 - from as f32) * STEP;
    drag.update(point(px(0.0), px(travel)));
    if let Some((from, to)) = drag.finish(store.len()) {
        store.reorder(from, to);
    }
}

#[test]
fn test_drag_moves_selected_record_and_selection_follows() {
    // [A, B, C] selection 1 (B); drag B one row down.
    let mut store = store_with(&["a.pdf", "b.pdf", "c.pdf"]);
    store.select(1);

    drag_row(&mut store, 1, 2);

    assert_names(&store, &["a.pdf", "c.pdf", "b.pdf"]);
    assert_eq!(store.selected(), 2);
    assert_eq!(store.selected_document().unwrap().name.as_ref(), "b.pdf");
}

#[test]
fn test_click_without_travel_reorders_nothing() {
    let store = store_with(&["a.pdf", "b.pdf", "c.pdf"]);
    let mut drag = DragState::default();
    drag.begin(0, point(px(0.0), px(0.0)));
    drag.update(point(px(2.0), px(2.0)));
    assert_eq!(drag.finish(store.len()), None);
    assert_names(&store, &["a.pdf", "b.pdf", "c.pdf"]);
}

#[test]
fn test_cancelled_drag_reorders_nothing() {
    let store = store_with(&["a.pdf", "b.pdf", "c.pdf"]);
    let mut drag = DragState::default();
    drag.begin(0, point(px(0.0), px(0.0)));
    drag.update(point(px(0.0), px(STEP * 2.0)));
    drag.cancel();
    assert_eq!(drag.finish(store.len()), None);
    assert_names(&store, &["a.pdf", "b.pdf", "c.pdf"]);
}

#[test]
fn test_drag_clamps_to_list_bounds() {
    let mut store = store_with(&["a.pdf", "b.pdf", "c.pdf"]);
    // Travel far past the end of the list; the drop slot clamps to last.
    drag_row(&mut store, 0, 10);
    assert_names(&store, &["b.pdf", "c.pdf", "a.pdf"]);
}

#[test]
fn test_add_remove_reorder_roundtrip() {
    let mut store = DocumentStore::new();
    store.add_documents(vec![record("a.pdf"), record("b.pdf")]);
    store.add_documents(vec![record("c.pdf")]);
    assert_eq!(store.selected(), 2);

    drag_row(&mut store, 2, 0);
    assert_names(&store, &["c.pdf", "a.pdf", "b.pdf"]);
    assert_eq!(store.selected(), 0);

    store.remove_document(1);
    assert_names(&store, &["c.pdf", "b.pdf"]);
    assert_eq!(store.selected(), 0);
    assert_eq!(store.selected_document().unwrap().name.as_ref(), "c.pdf");
}
