use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Content type of an uploaded file.
///
/// Wraps MIME types as an enum for type-safe comparisons.
/// Serialized as MIME type strings.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentType {
    // Images
    Jpeg,
    Png,
    Gif,
    Webp,
    Bmp,
    Svg,
    // Documents
    PlainText,
    Markdown,
    Csv,
    Pdf,
    Zip,
    // Other
    OctetStream,
    Other(String),
}

impl ContentType {
    /// MIME type string (e.g., "image/png", "application/pdf").
    pub fn as_str(&self) -> &str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
            Self::Bmp => "image/bmp",
            Self::Svg => "image/svg+xml",
            Self::PlainText => "text/plain",
            Self::Markdown => "text/markdown",
            Self::Csv => "text/csv",
            Self::Pdf => "application/pdf",
            Self::Zip => "application/zip",
            Self::OctetStream => "application/octet-stream",
            Self::Other(s) => s,
        }
    }

    /// Parse from a MIME type string (as declared by the uploader).
    pub fn from_mime(s: &str) -> Self {
        match s {
            "image/jpeg" => Self::Jpeg,
            "image/png" => Self::Png,
            "image/gif" => Self::Gif,
            "image/webp" => Self::Webp,
            "image/bmp" => Self::Bmp,
            "image/svg+xml" => Self::Svg,
            "text/plain" => Self::PlainText,
            "text/markdown" => Self::Markdown,
            "text/csv" => Self::Csv,
            "application/pdf" => Self::Pdf,
            "application/zip" => Self::Zip,
            "application/octet-stream" => Self::OctetStream,
            other => Self::Other(other.to_string()),
        }
    }

    /// Map a file extension to its content type.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Self::Jpeg,
            "png" => Self::Png,
            "gif" => Self::Gif,
            "webp" => Self::Webp,
            "bmp" => Self::Bmp,
            "svg" => Self::Svg,
            "txt" | "log" => Self::PlainText,
            "md" | "markdown" => Self::Markdown,
            "csv" => Self::Csv,
            "pdf" => Self::Pdf,
            "zip" => Self::Zip,
            _ => Self::OctetStream,
        }
    }

    /// Whether a preview image can be rendered from the file's bytes.
    pub fn is_image(&self) -> bool {
        matches!(
            self,
            Self::Jpeg | Self::Png | Self::Gif | Self::Webp | Self::Bmp | Self::Svg
        ) || matches!(self, Self::Other(s) if s.starts_with("image/"))
    }

    /// Short human-readable name for UI display (e.g., "PNG", "PDF").
    pub fn display_name(&self) -> &str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Webp => "WebP",
            Self::Bmp => "BMP",
            Self::Svg => "SVG",
            Self::PlainText => "Text",
            Self::Markdown => "Markdown",
            Self::Csv => "CSV",
            Self::Pdf => "PDF",
            Self::Zip => "ZIP",
            Self::OctetStream => "Binary",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ContentType::from_mime(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_extension_image() {
        assert_eq!(ContentType::from_extension("jpg"), ContentType::Jpeg);
        assert_eq!(ContentType::from_extension("JPEG"), ContentType::Jpeg);
        assert_eq!(ContentType::from_extension("png"), ContentType::Png);
        assert_eq!(ContentType::from_extension("svg"), ContentType::Svg);
    }

    #[test]
    fn from_extension_document() {
        assert_eq!(ContentType::from_extension("txt"), ContentType::PlainText);
        assert_eq!(ContentType::from_extension("md"), ContentType::Markdown);
        assert_eq!(ContentType::from_extension("pdf"), ContentType::Pdf);
    }

    #[test]
    fn from_extension_unknown() {
        assert_eq!(
            ContentType::from_extension("xyz"),
            ContentType::OctetStream
        );
    }

    #[test]
    fn roundtrip() {
        let ct = ContentType::Png;
        assert_eq!(ContentType::from_mime(ct.as_str()), ct);

        let ct = ContentType::Pdf;
        assert_eq!(ContentType::from_mime(ct.as_str()), ct);

        let ct = ContentType::Other("image/x-icon".to_string());
        assert_eq!(ContentType::from_mime(ct.as_str()), ct);
    }

    #[test]
    fn predicates() {
        assert!(ContentType::Png.is_image());
        assert!(ContentType::Svg.is_image());
        assert!(ContentType::Other("image/x-icon".to_string()).is_image());
        assert!(!ContentType::Pdf.is_image());
        assert!(!ContentType::PlainText.is_image());
        assert!(!ContentType::OctetStream.is_image());
    }

    #[test]
    fn display_name() {
        assert_eq!(ContentType::Png.display_name(), "PNG");
        assert_eq!(ContentType::Pdf.display_name(), "PDF");
        assert_eq!(ContentType::OctetStream.display_name(), "Binary");
    }

    #[test]
    fn serde_roundtrip() {
        let ct = ContentType::Webp;
        let json = serde_json::to_string(&ct).unwrap();
        assert_eq!(json, "\"image/webp\"");
        assert_eq!(serde_json::from_str::<ContentType>(&json).unwrap(), ct);
    }
}
