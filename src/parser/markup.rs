use super::Extraction;
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("space pattern"));

/// Reads a Kindle container as text: tags become spaces and whitespace
/// runs collapse to one space.
pub fn extract(bytes: &[u8]) -> Result<Extraction> {
    let raw = String::from_utf8_lossy(bytes);
    Ok(Extraction::plain(strip_markup(&raw)))
}

pub fn strip_markup(raw: &str) -> String {
    let without_tags = TAGS.replace_all(raw, " ");
    SPACES.replace_all(&without_tags, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_and_whitespace_collapse() {
        let out = strip_markup("<html><p>Call me\n\n<b>Ishmael</b>.</p></html>");
        assert_eq!(out, " Call me Ishmael . ");
    }

    #[test]
    fn test_patterns_are_reused_across_calls() {
        let first = strip_markup("<i>a</i>");
        let second = strip_markup("<i>a</i>");
        assert_eq!(first, second);
        assert_eq!(TAGS.as_str(), r"<[^>]*>");
    }

    #[test]
    fn test_words_survive_extraction() {
        let ex = extract(b"<div>one</div><div>two</div>").unwrap();
        let words: Vec<&str> = ex.text.split_whitespace().collect();
        assert_eq!(words, ["one", "two"]);
        assert_eq!(ex.pages, None);
    }
}
