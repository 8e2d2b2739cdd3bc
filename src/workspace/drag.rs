//! Pointer wiring for the sidebar reorder gesture.
//!
//! Mouse down on a row's drag handle arms the controller; move and up are
//! handled at the workspace root so the gesture survives the pointer
//! leaving the row. Escape cancels without mutating the list.

use super::Workspace;
use gpui::{Context, KeyDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, Window};

impl Workspace {
    pub fn begin_row_drag(&mut self, index: usize, position: Point<Pixels>, cx: &mut Context<Self>) {
        self.drag.begin(index, position);
        cx.notify();
    }

    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.drag.update(event.position) {
            cx.notify();
        }
    }

    pub fn handle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match self.drag.finish(self.store.len()) {
            Some((from, to)) => self.apply_reorder(from, to, cx),
            None => cx.notify(),
        }
    }

    pub fn handle_key_down(
        &mut self,
        event: &KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if event.keystroke.key == "escape" && self.drag.is_dragging() {
            self.drag.cancel();
            cx.notify();
        }
    }
}
