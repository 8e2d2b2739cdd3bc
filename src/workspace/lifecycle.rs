//! Workspace lifecycle - initialization and window-resize tracking.

use super::{ViewerState, Workspace};
use crate::constants::{MIN_PAGE_WIDTH, PAGE_WIDTH_OFFSET, SIDEBAR_WIDTH};
use crate::reorder::DragState;
use crate::store::DocumentStore;
use gpui::{Context, ScrollHandle, Window};

impl Workspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut this = Self {
            store: DocumentStore::new(),
            viewer: ViewerState::default(),
            drag: DragState::default(),
            focus_handle: cx.focus_handle(),
            list_scroll: ScrollHandle::new(),
        };
        this.viewer.page_width = Self::page_width_for(window);

        cx.observe_window_bounds(window, |this, window, cx| {
            this.update_page_width(window, cx);
        })
        .detach();

        this
    }

    /// Pure layout measurement: viewer pane width (window minus sidebar)
    /// less the fixed page margin, floored so pages stay visible.
    fn page_width_for(window: &Window) -> f32 {
        let pane_width = f32::from(window.viewport_size().width) - SIDEBAR_WIDTH;
        (pane_width - PAGE_WIDTH_OFFSET).max(MIN_PAGE_WIDTH)
    }

    /// Recompute the page width on every resize, with no debouncing. A
    /// change re-rasterizes the current document at the new width under a
    /// fresh epoch.
    pub fn update_page_width(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let width = Self::page_width_for(window);
        if (width - self.viewer.page_width).abs() < 1.0 {
            return;
        }
        self.viewer.page_width = width;
        if self.viewer.requested.is_some() {
            self.load_selected(cx);
        }
        cx.notify();
    }
}
