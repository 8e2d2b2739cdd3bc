//! Workspace state - the Workspace struct and viewer sub-state.

use crate::constants::DEFAULT_PAGE_WIDTH;
use crate::pdf::PageImage;
use crate::reorder::DragState;
use crate::store::DocumentStore;
use gpui::{FocusHandle, ScrollHandle, SharedString};
use std::path::PathBuf;

/// Where the viewer is in the load cycle for the requested document.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewerStatus {
    /// Nothing selected, nothing rendered
    #[default]
    Empty,
    /// Decode in flight; page placeholders once the count is known
    Loading,
    /// All pages rasterized
    Ready,
    /// pdfium rejected the document; inline placeholder, store untouched
    Failed(SharedString),
}

/// Transient render state for the selected document. Reset wholesale on
/// every selection change.
pub struct ViewerState {
    pub status: ViewerStatus,
    /// Page count reported by pdfium; 0 until the load callback lands.
    pub page_count: usize,
    /// Rasterized pages, in page order, at `page_width`.
    pub pages: Vec<PageImage>,
    /// Stale-load guard: bumped on every (re)load request. Results arriving
    /// with an older epoch are dropped, so a superseded decode can never
    /// write into the current view.
    pub load_epoch: u64,
    /// Target page width: viewer pane width minus the fixed margin.
    pub page_width: f32,
    /// Path the current load cycle was started for.
    pub requested: Option<PathBuf>,
    pub scroll: ScrollHandle,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            status: ViewerStatus::Empty,
            page_count: 0,
            pages: Vec::new(),
            load_epoch: 0,
            page_width: DEFAULT_PAGE_WIDTH,
            requested: None,
            scroll: ScrollHandle::new(),
        }
    }
}

/// Root application state: the document list store plus the two subsystems
/// that read it (viewer) and mutate it (reorder controller). Lifecycle is
/// bound to the window; nothing is persisted.
pub struct Workspace {
    pub store: DocumentStore,
    pub viewer: ViewerState,
    pub drag: DragState,
    pub focus_handle: FocusHandle,
    pub list_scroll: ScrollHandle,
}
