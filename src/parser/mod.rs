//! Text extraction from document bytes.
//!
//! The reader only ever sees an [`Extraction`]: plain text and, for
//! paginated formats, the word range of every page.

pub mod epub;
pub mod markup;
pub mod pdf;

use crate::engine::Page;
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub pages: Option<Vec<Page>>,
}

impl Extraction {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pages: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pdf,
    Epub,
    /// Kindle containers, read as tag-laden text.
    Markup,
    Plain,
}

impl Format {
    pub fn from_file_name(name: &str) -> Self {
        let ext = Path::new(name)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "pdf" => Format::Pdf,
            "epub" => Format::Epub,
            "mobi" | "azw" | "azw3" => Format::Markup,
            _ => Format::Plain,
        }
    }
}

pub fn extract(bytes: &[u8], file_name: &str) -> Result<Extraction> {
    let format = Format::from_file_name(file_name);
    let extraction = match format {
        Format::Pdf => pdf::extract(bytes),
        Format::Epub => epub::extract(bytes),
        Format::Markup => markup::extract(bytes),
        Format::Plain => Ok(Extraction::plain(String::from_utf8_lossy(bytes))),
    }
    .with_context(|| format!("Failed to read {}", file_name))?;

    info!(
        "extracted {:?} as {:?}: {} bytes of text, {} pages",
        file_name,
        format,
        extraction.text.len(),
        extraction.pages.as_ref().map_or(0, Vec::len)
    );
    Ok(extraction)
}

/// Reads and extracts a file off the async runtime's worker threads.
/// Returns the display file name with the extraction.
pub async fn extract_path<P: AsRef<Path>>(path: P) -> Result<(String, Extraction)> {
    let path = path.as_ref().to_path_buf();
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read {:?}", path))?;
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    let name = file_name.clone();
    let extraction = tokio::task::spawn_blocking(move || extract(&bytes, &name))
        .await
        .context("Extraction task panicked")??;
    Ok((file_name, extraction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_file_name("Book.PDF"), Format::Pdf);
        assert_eq!(Format::from_file_name("novel.epub"), Format::Epub);
        assert_eq!(Format::from_file_name("kindle.azw3"), Format::Markup);
        assert_eq!(Format::from_file_name("notes.md"), Format::Plain);
        assert_eq!(Format::from_file_name("README"), Format::Plain);
    }

    #[test]
    fn test_plain_text_is_kept_verbatim() {
        let ex = extract("  Hello,\tworld!\n".as_bytes(), "hello.txt").unwrap();
        assert_eq!(ex.text, "  Hello,\tworld!\n");
        assert_eq!(ex.pages, None);
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let ex = extract(&[b'a', 0xff, b'b'], "bytes.txt").unwrap();
        assert_eq!(ex.text, "a\u{fffd}b");
    }

    #[tokio::test]
    async fn test_extract_path_reports_file_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("story.txt");
        std::fs::write(&path, "once upon a time").unwrap();
        let (name, ex) = extract_path(&path).await.unwrap();
        assert_eq!(name, "story.txt");
        assert_eq!(ex.text, "once upon a time");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        assert!(extract_path("/nonexistent/speedread/book.txt").await.is_err());
    }
}
