//! File attachment preview modal
//!
//! Presents an uploaded file for review: an image preview (or a download
//! glyph for non-images), an editable comment, and delete/cancel/save
//! actions. All state is owned by the parent; the modal only reports user
//! intent through its callbacks. Mount it conditionally - mounting
//! acquires the preview resource and the outside-press listener,
//! unmounting releases both.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use dropnote_common::filename::DEFAULT_MAX_FILENAME_LEN;
use dropnote_common::{truncate_filename, Attachment};

use crate::components::button::{Button, ButtonVariant};
use crate::components::icons::{DownloadIcon, XIcon};
use crate::components::text_area::TextArea;
use crate::components::utils::format_file_size;
use crate::wasm_utils::{DocumentEventListener, PreviewHandle};

/// Counter for generating unique modal root IDs
static FILE_MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Modal dialog for previewing and annotating a single attachment
#[component]
pub fn FileModal(
    /// The file being previewed. Read-only; owned by the parent.
    attachment: ReadSignal<Attachment>,
    /// Current comment text. Owned by the parent.
    comment: String,
    /// Called when the modal should close (outside press, X, Cancel, Save)
    on_close: EventHandler<()>,
    /// Called with the full updated comment on every input event
    on_comment_change: EventHandler<String>,
    /// Called when the user asks to delete the file
    on_delete: EventHandler<()>,
) -> Element {
    // Unique ID for this instance so the outside-press check can find the
    // card element without a ref.
    let root_id = use_hook(|| {
        let id = FILE_MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("file-modal-{}", id)
    });
    let root_id_for_listener = root_id.clone();

    let mut preview: Signal<Option<PreviewHandle>> = use_signal(|| None);
    let mut outside_press: Signal<Option<DocumentEventListener>> = use_signal(|| None);

    // Object URL for the image preview. Reruns when the attachment
    // changes; the previous handle is dropped (revoking its URL) before a
    // new one is minted. Unmount drops the signal itself, releasing the
    // last handle.
    use_effect(move || {
        let attachment = attachment();
        preview.set(None);
        if !attachment.content_type.is_image() {
            return;
        }
        match PreviewHandle::from_bytes(&attachment.bytes, attachment.content_type.as_str()) {
            Ok(handle) => preview.set(Some(handle)),
            Err(err) => {
                tracing::warn!("no preview for {}: {err}", attachment.name);
            }
        }
    });

    // Document-level mousedown listener for outside-press dismissal.
    // Attached once after mount; the signal drop on unmount deregisters
    // it, so at most one listener instance exists per modal identity.
    use_effect(move || {
        if outside_press.peek().is_some() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let lookup = document.clone();
        let root_id = root_id_for_listener.clone();
        let listener = DocumentEventListener::new(document, "mousedown", move |event| {
            let target = event
                .dyn_ref::<web_sys::Event>()
                .and_then(|e| e.target())
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let (Some(root), Some(target)) = (lookup.get_element_by_id(&root_id), target) else {
                return;
            };
            if !root.contains(Some(&target)) {
                on_close.call(());
            }
        });
        outside_press.set(Some(listener));
    });

    let att = attachment.read();
    let full_name = att.name.clone();
    let display_name = truncate_filename(&att.name, DEFAULT_MAX_FILENAME_LEN);
    let meta_line = format!(
        "{} · {}",
        att.content_type.display_name(),
        format_file_size(att.bytes.len() as i64)
    );
    drop(att);

    let preview_url = preview.read().as_ref().map(|h| h.url().to_string());

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/75",
            div {
                id: "{root_id}",
                class: "bg-gray-800 rounded-lg shadow-xl max-w-2xl w-full mx-4",

                // Header
                div { class: "flex items-center justify-between p-4 border-b border-gray-700",
                    div { class: "min-w-0 pr-4",
                        h3 {
                            class: "text-lg font-semibold text-white truncate",
                            title: "{full_name}",
                            "{display_name}"
                        }
                        p { class: "text-xs text-gray-500 mt-0.5", "{meta_line}" }
                    }
                    button {
                        class: "shrink-0 text-gray-400 hover:text-white transition-colors",
                        onclick: move |_| on_close.call(()),
                        XIcon { class: "w-5 h-5" }
                    }
                }

                div { class: "p-4",
                    // Preview: image when a handle exists, download glyph
                    // otherwise (non-image or failed acquisition)
                    div { class: "mb-4",
                        if let Some(url) = preview_url {
                            img {
                                class: "max-h-[60vh] mx-auto object-contain rounded-lg",
                                src: "{url}",
                                alt: "{full_name}",
                            }
                        } else {
                            div { class: "flex items-center justify-center p-8 bg-gray-900 rounded-lg",
                                DownloadIcon { class: "w-12 h-12 text-gray-500" }
                            }
                        }
                    }

                    // Comment
                    div {
                        label { class: "block text-sm font-medium text-gray-300 mb-1",
                            "Comment"
                        }
                        TextArea {
                            value: comment,
                            rows: 3,
                            placeholder: "Add a comment about this file...",
                            on_input: move |value| on_comment_change.call(value),
                        }
                    }

                    // Actions
                    div { class: "flex justify-between items-center mt-4",
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: move |_| on_delete.call(()),
                            "Delete"
                        }
                        div { class: "flex gap-2",
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| on_close.call(()),
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| on_close.call(()),
                                "Save"
                            }
                        }
                    }
                }
            }
        }
    }
}
