//! Single test binary entry point.
//!
//! All tests in tests/it/ compile into one binary, keeping link overhead
//! down. Structure:
//! - unit: single-component tests (store invariants)
//! - integration: multi-component workflow tests (intake + store + reorder)

mod helpers;
mod integration;
mod unit;
