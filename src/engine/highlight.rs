use unicode_segmentation::UnicodeSegmentation;

/// Fraction of the word length at which the eye is anchored.
const ORP_RATIO: f64 = 0.35;

/// A word split around its optimal recognition point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight<'a> {
    pub before: &'a str,
    pub pivot: &'a str,
    pub after: &'a str,
}

/// Position of the pivot, counted in user-perceived characters.
pub fn orp_position(len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    ((len as f64 * ORP_RATIO).floor() as usize).min(len - 1)
}

// Lengths are grapheme clusters so that combining marks and emoji
// sequences are never split across the pivot.
pub fn highlight(word: &str) -> Highlight<'_> {
    let boundaries: Vec<(usize, &str)> = word.grapheme_indices(true).collect();
    if boundaries.len() <= 1 {
        return Highlight {
            before: "",
            pivot: word,
            after: "",
        };
    }

    let orp = orp_position(boundaries.len());
    let (start, pivot) = boundaries[orp];
    let end = start + pivot.len();
    Highlight {
        before: &word[..start],
        pivot,
        after: &word[end..],
    }
}
