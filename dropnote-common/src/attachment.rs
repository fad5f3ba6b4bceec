//! Attachment value handed from the host application to the UI

use crate::ContentType;

/// A file under review: name, declared content type, raw bytes.
///
/// Owned by the host application; the UI treats it as read-only input and
/// never mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    /// Display name, usually the original filename.
    pub name: String,
    /// Declared content type.
    pub content_type: ContentType,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Build an attachment from a filename and its bytes, inferring the
    /// content type from the extension.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = name
            .rsplit_once('.')
            .map(|(_, ext)| ContentType::from_extension(ext))
            .unwrap_or(ContentType::OctetStream);
        Self {
            name,
            content_type,
            bytes,
        }
    }

    /// Build an attachment with an explicit content type, e.g. when the
    /// uploader declared one.
    pub fn with_content_type(
        name: impl Into<String>,
        content_type: ContentType,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes,
        }
    }

    /// File size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_infers_content_type_from_extension() {
        let att = Attachment::new("screenshot.PNG", vec![1, 2, 3]);
        assert_eq!(att.content_type, ContentType::Png);
        assert_eq!(att.size_bytes(), 3);
    }

    #[test]
    fn new_without_extension_falls_back_to_binary() {
        let att = Attachment::new("Makefile", vec![]);
        assert_eq!(att.content_type, ContentType::OctetStream);
    }

    #[test]
    fn explicit_content_type_wins() {
        let att = Attachment::with_content_type("data.bin", ContentType::Pdf, vec![0]);
        assert_eq!(att.content_type, ContentType::Pdf);
    }
}
