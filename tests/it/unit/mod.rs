//! Single-component unit tests.

mod selection_invariant_tests;
