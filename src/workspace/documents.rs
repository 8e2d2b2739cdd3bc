//! Document operations - intake, selection, removal, reorder, and the
//! async viewer load cycle.
//!
//! All store mutations happen synchronously in these methods; the only
//! async work is the pdfium decode on the background executor. Every load
//! is tagged with the viewer epoch at request time, and results carrying a
//! stale tag are dropped on arrival, so a superseded selection can never
//! corrupt the current view.

use super::{ViewerStatus, Workspace};
use crate::{intake, pdf};
use crate::store::DocumentRecord;
use gpui::{Context, ExternalPaths, PathPromptOptions};
use tracing::{info, warn};

impl Workspace {
    /// Open the native multi-select file dialog. Chosen paths are forwarded
    /// without re-validation; the dialog's PDF filter is a hint only.
    pub fn open_file_picker(&mut self, cx: &mut Context<Self>) {
        let paths = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: true,
            prompt: None,
        });
        cx.spawn(async move |this, cx| {
            if let Ok(Ok(Some(paths))) = paths.await {
                let _ = this.update(cx, |this, cx| {
                    this.add_records(intake::records_from_picker(paths), cx);
                });
            }
        })
        .detach();
    }

    /// OS file drop on the window. Non-PDFs are filtered out silently.
    pub fn handle_external_drop(&mut self, drop: &ExternalPaths, cx: &mut Context<Self>) {
        self.add_records(intake::records_from_drop(drop.paths().to_vec()), cx);
    }

    /// Append records and point the viewer at the first new one. An empty
    /// batch (empty pick, or a drop with no surviving PDFs) is a no-op.
    pub fn add_records(&mut self, records: Vec<DocumentRecord>, cx: &mut Context<Self>) {
        if records.is_empty() {
            return;
        }
        info!(count = records.len(), "adding documents");
        self.store.add_documents(records);
        self.sync_viewer(cx);
        cx.notify();
    }

    pub fn select_document(&mut self, idx: usize, cx: &mut Context<Self>) {
        // Re-selecting the current document is a no-op: no page reset, no
        // redundant reload.
        if self.store.select(idx) {
            self.sync_viewer(cx);
            cx.notify();
        }
    }

    pub fn remove_document(&mut self, idx: usize, cx: &mut Context<Self>) {
        self.store.remove_document(idx);
        self.sync_viewer(cx);
        cx.notify();
    }

    /// Apply a reorder emitted by the drag controller.
    pub fn apply_reorder(&mut self, from: usize, to: usize, cx: &mut Context<Self>) {
        self.store.reorder(from, to);
        // Selection bookkeeping can land the selection on a different
        // record; sync_viewer picks that up by path.
        self.sync_viewer(cx);
        cx.notify();
    }

    /// Start a new load cycle when the selected document differs from the
    /// one the viewer was last asked to show.
    fn sync_viewer(&mut self, cx: &mut Context<Self>) {
        let selected = self.store.selected_path().map(|p| p.to_path_buf());
        if selected == self.viewer.requested {
            return;
        }
        self.load_selected(cx);
    }

    /// Reset the viewer synchronously (page count to 0, pages dropped, epoch
    /// bumped) and kick off the background decode for the current selection.
    pub(super) fn load_selected(&mut self, cx: &mut Context<Self>) {
        self.viewer.load_epoch += 1;
        let epoch = self.viewer.load_epoch;
        self.viewer.page_count = 0;
        self.viewer.pages.clear();

        let Some(path) = self.store.selected_path().map(|p| p.to_path_buf()) else {
            self.viewer.requested = None;
            self.viewer.status = ViewerStatus::Empty;
            cx.notify();
            return;
        };
        self.viewer.requested = Some(path.clone());
        self.viewer.status = ViewerStatus::Loading;
        let width = self.viewer.page_width;
        cx.notify();

        cx.spawn(async move |this, cx| {
            // Phase one: open the document and report its page count.
            let counted = cx
                .background_executor()
                .spawn({
                    let path = path.clone();
                    async move { pdf::page_count(&path) }
                })
                .await;

            let proceed = this
                .update(cx, |this, cx| {
                    if this.viewer.load_epoch != epoch {
                        return false;
                    }
                    match counted {
                        Ok(count) => {
                            this.viewer.page_count = count;
                            cx.notify();
                            true
                        }
                        Err(e) => {
                            warn!(path = %path.display(), error = %e, "failed to load PDF");
                            this.viewer.status = ViewerStatus::Failed(e.to_string().into());
                            cx.notify();
                            false
                        }
                    }
                })
                .unwrap_or(false);
            if !proceed {
                return;
            }

            // Phase two: rasterize every page at the requested width.
            let rendered = cx
                .background_executor()
                .spawn({
                    let path = path.clone();
                    async move { pdf::render_pages(&path, width) }
                })
                .await;

            let _ = this.update(cx, |this, cx| {
                if this.viewer.load_epoch != epoch {
                    return;
                }
                match rendered {
                    Ok(pages) => {
                        this.viewer.pages = pages;
                        this.viewer.status = ViewerStatus::Ready;
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to render PDF pages");
                        this.viewer.status = ViewerStatus::Failed(e.to_string().into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }
}
