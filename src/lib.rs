//! pdfdeck - a desktop PDF document workspace.
//!
//! Add PDFs through the native file picker or by dropping them on the
//! window, reorder them in the sidebar by drag, and view the selected
//! document's pages inline. Decoding and rasterization are delegated to
//! pdfium; everything here is state management and wiring:
//!
//! - `store` - the ordered document collection and selection
//! - `intake` - turning picked/dropped files into document records
//! - `reorder` - the pointer-drag state machine for the sidebar list
//! - `pdf` - pdfium loading, page counting, page rasterization
//! - `workspace` - the root entity composing the above
//! - `render` - gpui rendering for the sidebar and viewer panes

pub mod constants;
pub mod intake;
pub mod pdf;
pub mod render;
pub mod reorder;
pub mod store;
pub mod workspace;

pub use workspace::Workspace;
