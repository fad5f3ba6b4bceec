//! Drop-zone and file picker feeding attachments into the demo

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dropnote_common::Attachment;
use dropnote_ui::UploadIcon;

/// A drag-and-drop zone with a file picker button.
///
/// Reads the first selected file's bytes and fires `on_upload` with an
/// [`Attachment`] whose content type is inferred from the filename.
#[component]
pub fn UploadZone(on_upload: EventHandler<Attachment>) -> Element {
    let mut dragging = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    // Shared by the picker and drag-and-drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => {
                    error.set(None);
                    on_upload.call(Attachment::new(name, bytes.to_vec()));
                }
                Err(e) => {
                    error.set(Some(format!("Failed to read {name}: {e}")));
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let border_class = if dragging() {
        "border-blue-500 bg-gray-800"
    } else {
        "border-gray-700 bg-gray-800/50"
    };

    rsx! {
        div {
            class: "border-2 border-dashed rounded-lg p-6 text-center transition-colors {border_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            UploadIcon { class: "w-6 h-6 text-gray-500 mx-auto mb-2" }

            if let Some(ref err) = error() {
                p { class: "text-red-400 text-sm mb-2", "{err}" }
            }

            p { class: "text-gray-400 text-sm mb-3", "Drop a file here or" }

            label {
                class: "inline-block px-4 py-2 bg-blue-600 hover:bg-blue-500 rounded-lg cursor-pointer text-white text-sm font-medium transition-colors",
                input {
                    r#type: "file",
                    class: "hidden",
                    onchange: handle_files,
                }
                "Choose File"
            }
        }
    }
}
