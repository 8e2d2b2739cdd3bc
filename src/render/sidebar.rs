//! Sidebar rendering - the reorderable document list, the add button, and
//! the empty-state drop target.

use crate::constants::{ITEM_GAP, ITEM_HEIGHT, SIDEBAR_WIDTH};
use crate::workspace::Workspace;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants as _};
use gpui_component::{h_flex, v_flex, ActiveTheme as _, Icon, IconName};

impl Workspace {
    /// Full-window drop target shown before any document has been added.
    pub(super) fn render_empty_state(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let border = cx.theme().border;
        let muted_fg = cx.theme().muted_foreground;
        let drop_hint = cx.theme().accent;
        let list_hover = cx.theme().list_hover;

        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .child(
                v_flex()
                    .id("empty-drop-target")
                    .w(px(480.0))
                    .h(px(256.0))
                    .items_center()
                    .justify_center()
                    .gap_2()
                    .border_2()
                    .border_dashed()
                    .border_color(border)
                    .rounded(px(12.0))
                    .cursor_pointer()
                    .hover(move |s| s.bg(list_hover))
                    .drag_over::<ExternalPaths>(move |style, _, _, _| style.bg(drop_hint))
                    .on_drop(cx.listener(|this, drop: &ExternalPaths, _, cx| {
                        this.handle_external_drop(drop, cx);
                    }))
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.open_file_picker(cx);
                    }))
                    .child(
                        div()
                            .text_sm()
                            .text_color(muted_fg)
                            .child("Click to upload or drag and drop"),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(muted_fg)
                            .child("PDF files only. You can select multiple files."),
                    ),
            )
    }

    pub(super) fn render_sidebar(&mut self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let border = cx.theme().border;
        let muted_fg = cx.theme().muted_foreground;
        let drop_hint = cx.theme().accent;
        let selected = self.store.selected();
        let dragged = self.drag.dragged_index();

        let names: Vec<_> = self
            .store
            .documents()
            .iter()
            .map(|doc| doc.name.clone())
            .collect();
        let rows: Vec<_> = names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                self.render_document_row(idx, name, idx == selected, Some(idx) == dragged, cx)
                    .into_any_element()
            })
            .collect();

        v_flex()
            .id("sidebar")
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .p(px(12.0))
            .gap_2()
            .border_r_1()
            .border_color(border)
            .drag_over::<ExternalPaths>(move |style, _, _, _| style.bg(drop_hint))
            .on_drop(cx.listener(|this, drop: &ExternalPaths, _, cx| {
                this.handle_external_drop(drop, cx);
            }))
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(muted_fg)
                    .child("Documents"),
            )
            .child(
                v_flex()
                    .id("document-list")
                    .flex_1()
                    .overflow_y_scroll()
                    .track_scroll(&self.list_scroll)
                    .gap(px(ITEM_GAP))
                    .children(rows),
            )
            .child(
                Button::new("add-documents")
                    .label("+ Add Document")
                    .primary()
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.open_file_picker(cx);
                    })),
            )
    }

    fn render_document_row(
        &mut self,
        idx: usize,
        name: SharedString,
        is_selected: bool,
        is_dragged: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let fg = cx.theme().foreground;
        let muted_fg = cx.theme().muted_foreground;
        let list_hover = cx.theme().list_hover;
        let list_active = cx.theme().list_active;
        let destructive = cx.theme().danger;

        h_flex()
            .id(("document-row", idx))
            .h(px(ITEM_HEIGHT))
            .w_full()
            .px_2()
            .items_center()
            .gap_2()
            .rounded(px(4.0))
            .when(is_selected, |d| d.bg(list_active))
            .when(!is_selected, |d| d.hover(move |s| s.bg(list_hover)))
            .when(is_dragged, |d| d.opacity(0.5).bg(list_hover))
            .child(
                // Drag handle: arms the reorder controller; the threshold in
                // the controller keeps plain clicks from reordering.
                div()
                    .id(("drag-handle", idx))
                    .cursor(CursorStyle::OpenHand)
                    .text_color(muted_fg)
                    .child("⠿")
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, event: &MouseDownEvent, _, cx| {
                            cx.stop_propagation();
                            this.begin_row_drag(idx, event.position, cx);
                        }),
                    ),
            )
            .child(
                div()
                    .id(("document-name", idx))
                    .flex_1()
                    .truncate()
                    .text_sm()
                    .text_color(if is_selected { fg } else { muted_fg })
                    .when(is_selected, |d| d.font_weight(FontWeight::MEDIUM))
                    .cursor(CursorStyle::PointingHand)
                    .child(name)
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.select_document(idx, cx);
                    })),
            )
            .child(
                div()
                    .id(("remove-document", idx))
                    .p(px(2.0))
                    .rounded(px(4.0))
                    .cursor_pointer()
                    .hover(move |s| s.bg(destructive.opacity(0.15)))
                    .on_mouse_down(MouseButton::Left, |_, _, cx| {
                        // Keep the press from arming a drag or selecting.
                        cx.stop_propagation();
                    })
                    .on_click(cx.listener(move |this, _, _, cx| {
                        cx.stop_propagation();
                        this.remove_document(idx, cx);
                    }))
                    .child(Icon::new(IconName::Close).size(px(12.0)).text_color(muted_fg)),
            )
    }
}
