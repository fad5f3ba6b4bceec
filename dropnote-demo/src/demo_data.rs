//! Fixture attachments for the demo

use crate::StoredFile;
use dropnote_common::Attachment;

// An SVG renders through the same object-URL path as raster images, so
// the image preview can be demonstrated without binary fixtures.
const SUNSET_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="360">
  <defs>
    <linearGradient id="sky" x1="0" y1="0" x2="0" y2="1">
      <stop offset="0" stop-color="#fbbf24"/>
      <stop offset="0.6" stop-color="#f97316"/>
      <stop offset="1" stop-color="#7c2d92"/>
    </linearGradient>
  </defs>
  <rect width="640" height="360" fill="url(#sky)"/>
  <circle cx="320" cy="300" r="70" fill="#fde68a"/>
  <rect y="330" width="640" height="30" fill="#1e1b4b"/>
</svg>
"##;

const MEETING_NOTES: &str = "\
Standup notes, Tuesday

- shipping the upload flow behind a flag
- comments now autosave per keystroke
- still need a decision on max file size
";

pub fn seed_files() -> Vec<StoredFile> {
    vec![
        StoredFile {
            attachment: Attachment::new("sunset-hero.svg", SUNSET_SVG.as_bytes().to_vec()),
            comment: "Cover candidate for the landing page".to_string(),
        },
        StoredFile {
            attachment: Attachment::new("standup-notes.txt", MEETING_NOTES.as_bytes().to_vec()),
            comment: String::new(),
        },
        StoredFile {
            attachment: Attachment::new(
                "quarterly_financial_report_2025_final_draft.pdf",
                b"%PDF-1.4 demo placeholder, not a real report".to_vec(),
            ),
            comment: "Check the revenue table before sending".to_string(),
        },
    ]
}
