//! Workspace rendering - root layout, sidebar, and viewer pane.
//!
//! All rendering reads the workspace state and wires user gestures back
//! into it through listeners; nothing here mutates the store directly.

mod sidebar;
mod viewer;

use crate::workspace::Workspace;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{h_flex, ActiveTheme as _};

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let dragging = self.drag.is_dragging();
        let empty = self.store.is_empty();

        let content = if empty {
            self.render_empty_state(cx).into_any_element()
        } else {
            let sidebar = self.render_sidebar(cx);
            let viewer = self.render_viewer(cx);
            h_flex()
                .size_full()
                .child(sidebar)
                .child(viewer)
                .into_any_element()
        };

        div()
            .id("workspace")
            .key_context("Workspace")
            .track_focus(&self.focus_handle)
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .when(dragging, |d| d.cursor(CursorStyle::ClosedHand))
            .on_key_down(cx.listener(Self::handle_key_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .child(content)
    }
}
