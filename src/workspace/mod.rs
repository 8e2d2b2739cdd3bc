//! Workspace module - the document workspace state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The Workspace struct and viewer sub-state
//! - `lifecycle` - Initialization and window-resize tracking
//! - `documents` - Intake, selection, removal, reorder, and viewer loads
//! - `drag` - Pointer wiring for the sidebar reorder gesture

mod documents;
mod drag;
mod lifecycle;
mod state;

pub use state::{ViewerState, ViewerStatus, Workspace};
