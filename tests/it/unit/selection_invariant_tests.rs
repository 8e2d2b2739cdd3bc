//! Selection validity across arbitrary operation sequences.
//!
//! The store's core invariant: after any sequence of additions, removals,
//! and reorders, the selected index is within bounds or the collection is
//! empty.

use crate::helpers::record;
use pdfdeck::store::DocumentStore;

fn assert_selection_valid(store: &DocumentStore) {
    if store.is_empty() {
        assert_eq!(store.selected(), 0, "empty store must report selection 0");
        assert!(store.selected_document().is_none());
    } else {
        assert!(
            store.selected() < store.len(),
            "selection {} out of bounds for length {}",
            store.selected(),
            store.len()
        );
        assert!(store.selected_document().is_some());
    }
}

/// Deterministic xorshift so failures reproduce.
struct Rng(u64);

impl Rng {
    fn next(&mut self, bound: usize) -> usize {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 % bound as u64) as usize
    }
}

#[test]
fn test_selection_valid_across_operation_sequences() {
    let mut rng = Rng(0x5EED);
    let mut store = DocumentStore::new();
    let mut counter = 0usize;

    for _ in 0..2000 {
        match rng.next(4) {
            0 => {
                let batch = (0..1 + rng.next(3))
                    .map(|_| {
                        counter += 1;
                        record(&format!("doc-{counter}.pdf"))
                    })
                    .collect();
                store.add_documents(batch);
            }
            1 if !store.is_empty() => {
                let idx = rng.next(store.len());
                store.remove_document(idx);
            }
            2 if store.len() >= 2 => {
                let from = rng.next(store.len());
                let to = rng.next(store.len());
                if from != to {
                    store.reorder(from, to);
                }
            }
            3 if !store.is_empty() => {
                store.select(rng.next(store.len()));
            }
            _ => {}
        }
        assert_selection_valid(&store);
    }
}

#[test]
fn test_selection_valid_after_draining() {
    let mut store = DocumentStore::new();
    store.add_documents((0..5).map(|i| record(&format!("{i}.pdf"))).collect());
    store.select(3);
    while !store.is_empty() {
        store.remove_document(store.len() - 1);
        assert_selection_valid(&store);
    }
}
