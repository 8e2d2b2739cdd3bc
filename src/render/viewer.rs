//! Viewer pane rendering - the selected document's pages, plus loading and
//! failure placeholders.

use crate::constants::PAGE_GAP;
use crate::workspace::{ViewerStatus, Workspace};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{h_flex, v_flex, ActiveTheme as _};

/// Aspect ratio used for page placeholders before rasterization finishes
/// (ISO 216 portrait).
const PLACEHOLDER_ASPECT: f32 = 1.414;

impl Workspace {
    pub(super) fn render_viewer(&mut self, cx: &mut Context<Self>) -> AnyElement {
        let fg = cx.theme().foreground;
        let muted_fg = cx.theme().muted_foreground;
        let border = cx.theme().border;
        let destructive = cx.theme().danger;
        let pages_bg = cx.theme().muted;

        let Some(doc) = self.store.selected_document() else {
            return v_flex()
                .flex_1()
                .h_full()
                .items_center()
                .justify_center()
                .gap_1()
                .text_color(muted_fg)
                .child(div().text_xl().child("No document selected"))
                .child(div().text_sm().child("Use the pane on the left to add and select a PDF."))
                .into_any_element();
        };
        let name = doc.name.clone();

        v_flex()
            .flex_1()
            .h_full()
            .p(px(16.0))
            .gap_2()
            .child(
                h_flex()
                    .gap_1()
                    .text_sm()
                    .text_color(muted_fg)
                    .child("Viewing:")
                    .child(div().font_weight(FontWeight::MEDIUM).text_color(fg).child(name)),
            )
            .when_some(self.store.error.clone(), |d, error| {
                d.child(div().text_sm().text_color(destructive).child(error))
            })
            .child(
                v_flex()
                    .id("pages")
                    .flex_1()
                    .overflow_y_scroll()
                    .track_scroll(&self.viewer.scroll)
                    .items_center()
                    .p(px(16.0))
                    .gap(px(PAGE_GAP))
                    .border_1()
                    .border_color(border)
                    .rounded(px(8.0))
                    .bg(pages_bg)
                    .children(self.render_pages(cx)),
            )
            .into_any_element()
    }

    fn render_pages(&mut self, cx: &mut Context<Self>) -> Vec<AnyElement> {
        let muted_fg = cx.theme().muted_foreground;
        let placeholder_bg = cx.theme().background;
        let page_width = self.viewer.page_width;

        match &self.viewer.status {
            ViewerStatus::Empty => Vec::new(),
            ViewerStatus::Failed(message) => vec![
                v_flex()
                    .items_center()
                    .gap_1()
                    .py(px(48.0))
                    .child(
                        div()
                            .text_color(cx.theme().danger)
                            .child("Failed to load PDF."),
                    )
                    .child(div().text_xs().text_color(muted_fg).child(message.clone()))
                    .into_any_element(),
            ],
            ViewerStatus::Loading => {
                if self.viewer.page_count == 0 {
                    vec![
                        div()
                            .py(px(48.0))
                            .text_color(muted_fg)
                            .child("Loading PDF…")
                            .into_any_element(),
                    ]
                } else {
                    // Page count is in; rasterization still in flight.
                    (0..self.viewer.page_count)
                        .map(|_| {
                            div()
                                .w(px(page_width))
                                .h(px(page_width * PLACEHOLDER_ASPECT))
                                .bg(placeholder_bg)
                                .shadow_md()
                                .into_any_element()
                        })
                        .collect()
                }
            }
            ViewerStatus::Ready => self
                .viewer
                .pages
                .iter()
                .map(|page| {
                    img(page.image.clone())
                        .w(px(page.width))
                        .h(px(page.height))
                        .shadow_md()
                        .into_any_element()
                })
                .collect(),
        }
    }
}
