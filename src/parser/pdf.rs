use super::Extraction;
use crate::deps::{self, PDFTOTEXT};
use crate::engine::pages::boundaries_from_word_counts;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;

/// Form feed written by pdftotext after every page.
const PAGE_BREAK: char = '\u{0c}';

pub fn extract(bytes: &[u8]) -> Result<Extraction> {
    match deps::resolve_command(PDFTOTEXT) {
        Ok(command) => extract_with_pdftotext(command, bytes),
        Err(e) => {
            warn!("{:#}; falling back to built-in PDF text extraction without pages", e);
            let text = pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| anyhow::anyhow!("Failed to extract PDF text: {:?}", e))?;
            Ok(Extraction::plain(text))
        }
    }
}

fn extract_with_pdftotext(mut command: std::process::Command, bytes: &[u8]) -> Result<Extraction> {
    // pdftotext only reads from a path
    let path = std::env::temp_dir().join(format!(
        "speedread_pdf_{}_{}.pdf",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0)
    ));
    fs::write(&path, bytes).with_context(|| format!("Failed to stage PDF at {:?}", path))?;

    let output = command
        .args(["-q", "-enc", "UTF-8"])
        .arg(&path)
        .arg("-")
        .output();
    let _ = fs::remove_file(&path);
    let output = output.context("Failed to execute pdftotext")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow::anyhow!("pdftotext failed: {}", stderr.trim()));
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    Ok(split_pages(&raw))
}

/// Joins page texts with newlines so no word straddles two pages, and
/// derives each page's word range from its word count.
pub fn split_pages(raw: &str) -> Extraction {
    let mut page_texts: Vec<&str> = raw.split(PAGE_BREAK).collect();
    if raw.ends_with(PAGE_BREAK) {
        page_texts.pop();
    }

    let counts: Vec<usize> = page_texts
        .iter()
        .map(|page| page.split_whitespace().count())
        .collect();
    let pages = boundaries_from_word_counts(&counts);
    debug!(
        "pdf: {} pages, {} with text",
        page_texts.len(),
        pages.len()
    );

    Extraction {
        text: page_texts.join("\n"),
        pages: (!pages.is_empty()).then_some(pages),
    }
}
