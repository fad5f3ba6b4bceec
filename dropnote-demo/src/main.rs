//! dropnote demo - web demo exercising the file modal
//!
//! A single page with seeded fixture files, a drop-zone, and the modal
//! wired to parent-owned state: the comment lives here and is updated per
//! keystroke, delete removes the file, close just unmounts the modal.

mod demo_data;
mod upload;

use dioxus::prelude::*;
use dropnote_common::{truncate_filename, Attachment};
use dropnote_ui::{format_file_size, FileIcon, FileModal, ImageIcon};
use upload::UploadZone;

/// A file the demo application owns, with its comment.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredFile {
    pub attachment: Attachment,
    pub comment: String,
}

#[component]
fn FileRow(file: StoredFile, onclick: EventHandler<()>) -> Element {
    let name = truncate_filename(&file.attachment.name, 40);
    let size = format_file_size(file.attachment.size_bytes() as i64);
    let kind = file.attachment.content_type.display_name().to_string();
    let is_image = file.attachment.content_type.is_image();

    rsx! {
        button {
            class: "w-full flex items-center gap-3 px-3 py-2.5 bg-gray-800 hover:bg-gray-700 rounded-lg text-left transition-colors",
            onclick: move |_| onclick.call(()),
            if is_image {
                ImageIcon { class: "w-5 h-5 text-blue-400 shrink-0" }
            } else {
                FileIcon { class: "w-5 h-5 text-gray-400 shrink-0" }
            }
            div { class: "min-w-0 flex-1",
                div { class: "text-sm text-gray-200 truncate", "{name}" }
                div { class: "text-xs text-gray-500", "{kind} · {size}" }
            }
            if !file.comment.is_empty() {
                div { class: "text-xs text-gray-500 italic truncate max-w-[12rem]",
                    "{file.comment}"
                }
            }
        }
    }
}

#[component]
fn Page() -> Element {
    let mut files = use_signal(demo_data::seed_files);
    let mut selected: Signal<Option<usize>> = use_signal(|| None);

    let current = use_memo(move || selected().and_then(|idx| files().get(idx).cloned()));

    rsx! {
        div { class: "max-w-2xl mx-auto px-4 py-10",
            h1 { class: "text-2xl font-bold text-white mb-1", "dropnote" }
            p { class: "text-sm text-gray-400 mb-6",
                "Drop a file or pick one from the list to preview and annotate it."
            }

            UploadZone {
                on_upload: move |attachment| {
                    files.write().push(StoredFile { attachment, comment: String::new() });
                    selected.set(Some(files.read().len() - 1));
                },
            }

            div { class: "mt-6 space-y-2",
                for (idx, file) in files().into_iter().enumerate() {
                    FileRow {
                        key: "{idx}",
                        file,
                        onclick: move |_| selected.set(Some(idx)),
                    }
                }
            }

            if let Some(file) = current() {
                FileModal {
                    attachment: file.attachment,
                    comment: file.comment,
                    on_close: move |_| selected.set(None),
                    on_comment_change: move |value: String| {
                        if let Some(idx) = selected() {
                            if let Some(stored) = files.write().get_mut(idx) {
                                stored.comment = value;
                            }
                        }
                    },
                    on_delete: move |_| {
                        if let Some(idx) = selected() {
                            files.write().remove(idx);
                        }
                        selected.set(None);
                    },
                }
            }
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Script { src: "https://cdn.tailwindcss.com" }
        div { class: "min-h-screen bg-gray-900", Page {} }
    }
}

fn main() {
    dioxus::launch(App);
}
