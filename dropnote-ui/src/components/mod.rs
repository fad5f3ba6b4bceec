//! Shared UI components

pub mod button;
pub mod file_modal;
pub mod icons;
pub mod text_area;
pub mod utils;

pub use button::{Button, ButtonVariant};
pub use file_modal::FileModal;
pub use icons::{DownloadIcon, FileIcon, ImageIcon, UploadIcon, XIcon};
pub use text_area::TextArea;
pub use utils::format_file_size;
