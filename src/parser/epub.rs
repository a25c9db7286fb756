use super::Extraction;
use anyhow::{Context, Result};
use epub::doc::EpubDoc;
use html2text::from_read;
use log::warn;
use std::io::Cursor;

const WRAP_WIDTH: usize = 120;

/// Concatenates the spine chapters as plain text. EPUBs reflow, so no
/// page boundaries are reported.
pub fn extract(bytes: &[u8]) -> Result<Extraction> {
    let mut doc =
        EpubDoc::from_reader(Cursor::new(bytes.to_vec())).context("Failed to open EPUB document")?;

    let mut text = String::new();
    for chapter in 0..doc.spine.len() {
        doc.set_current_chapter(chapter);
        let content = match doc.get_current_with_epub_uris() {
            Ok(content) => content,
            Err(e) => {
                warn!("skipping unreadable EPUB chapter {}: {}", chapter, e);
                continue;
            }
        };

        match from_read(content.as_slice(), WRAP_WIDTH) {
            Ok(plain) if !plain.trim().is_empty() => {
                text.push_str(&plain);
                text.push('\n');
            }
            Ok(_) => {}
            Err(e) => warn!("skipping EPUB chapter {}: {}", chapter, e),
        }
    }

    Ok(Extraction::plain(text))
}
