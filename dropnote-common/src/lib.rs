//! dropnote-common - Shared attachment types for dropnote
//!
//! Pure data types used by both the UI components and host applications.
//! No framework or browser dependencies.

pub mod attachment;
pub mod content_type;
pub mod filename;

pub use attachment::Attachment;
pub use content_type::ContentType;
pub use filename::truncate_filename;
