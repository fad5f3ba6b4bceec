//! Filename display helpers

/// Default display bound for [`truncate_filename`].
pub const DEFAULT_MAX_FILENAME_LEN: usize = 30;

/// Shorten a filename for display, keeping the extension visible.
///
/// Names within `max_length` chars come back unchanged. Longer names keep
/// a prefix of the base name, an `...` marker, and the `.extension`
/// suffix; without an extension the marker goes at the end. The base keeps
/// at least one character even when `max_length` is smaller than the
/// reserved overhead, so the result is never empty and slicing never
/// panics. Lengths are counted in chars, not bytes.
pub fn truncate_filename(name: &str, max_length: usize) -> String {
    if name.chars().count() <= max_length {
        return name.to_string();
    }

    match name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() && !ext.is_empty() => {
            // Room for "..." plus "." plus the extension.
            let keep = max_length.saturating_sub(4 + ext.chars().count()).max(1);
            let base: String = base.chars().take(keep).collect();
            format!("{base}....{ext}")
        }
        _ => {
            let keep = max_length.saturating_sub(3).max(1);
            let base: String = name.chars().take(keep).collect();
            format!("{base}...")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_unchanged() {
        assert_eq!(truncate_filename("photo.png", 30), "photo.png");
        assert_eq!(truncate_filename("exactly_thirty_chars_name.jpeg", 30).len(), 30);
        assert_eq!(
            truncate_filename("exactly_thirty_chars_name.jpeg", 30),
            "exactly_thirty_chars_name.jpeg"
        );
    }

    #[test]
    fn long_name_keeps_extension_within_bound() {
        let name = "my_very_long_document_name_for_the_q3_review.pdf";
        let out = truncate_filename(name, 30);
        assert!(out.ends_with(".pdf"), "{out}");
        assert!(out.contains("..."), "{out}");
        assert!(out.chars().count() <= 30, "{out}");
    }

    #[test]
    fn pdf_suffix_survives_default_bound() {
        let out = truncate_filename("my_very_long_document_name.pdf", 30);
        assert!(out.ends_with(".pdf"));
        assert!(out.chars().count() <= 30);
    }

    #[test]
    fn length_bound_holds_for_reasonable_bounds() {
        let name = "a_really_quite_long_filename_without_end.tar";
        for max in 10..=40 {
            let out = truncate_filename(name, max);
            assert!(
                out.chars().count() <= max,
                "bound {max} violated: {out:?} ({} chars)",
                out.chars().count()
            );
        }
    }

    #[test]
    fn no_extension() {
        let out = truncate_filename("READMEREADMEREADMEREADMEREADME_LONG", 20);
        assert_eq!(out, "READMEREADMEREADM...");
        assert_eq!(out.chars().count(), 20);
    }

    #[test]
    fn degenerate_bound_never_panics_or_empties() {
        for max in 0..8 {
            let out = truncate_filename("some_long_filename.extension", max);
            assert!(!out.is_empty());
        }
        // Base keeps one char even when the extension eats the whole bound.
        let out = truncate_filename("x_long_enough_name.verylongextension", 10);
        assert!(out.starts_with('x'));
        assert!(out.ends_with(".verylongextension"));
    }

    #[test]
    fn multibyte_names_truncate_on_char_boundaries() {
        let name = "ファイル名がとても長いスクリーンショット.png";
        let out = truncate_filename(name, 15);
        assert!(out.ends_with(".png"));
        assert!(out.chars().count() <= 15);
    }

    #[test]
    fn hidden_file_is_best_effort() {
        // No base name before the dot; falls back to plain tail marker.
        let out = truncate_filename(".a_very_long_hidden_config_file", 12);
        assert_eq!(out.chars().count(), 12);
        assert!(out.ends_with("..."));
    }
}
