//! Bounded overviews of the word list.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapEntry<'a> {
    pub word: &'a str,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWord<'a> {
    pub word: &'a str,
    pub index: usize,
    pub is_current: bool,
}

/// Downsamples `words` to roughly `max_visible` entries.
///
/// Every `stride`-th word is kept, and the word at `current` is always
/// present even when it is off-stride. Output is in ascending index order.
pub fn sample<S: AsRef<str>>(
    words: &[S],
    current: usize,
    max_visible: usize,
) -> Vec<MinimapEntry<'_>> {
    let entry = |index: usize| MinimapEntry {
        word: words[index].as_ref(),
        index,
    };

    let max_visible = max_visible.max(1);
    if words.len() <= max_visible {
        return (0..words.len()).map(entry).collect();
    }

    let stride = words.len().div_ceil(max_visible);
    let mut out = Vec::with_capacity(max_visible + 1);
    let mut current_pending = current < words.len() && current % stride != 0;
    for index in (0..words.len()).step_by(stride) {
        if current_pending && current < index {
            out.push(entry(current));
            current_pending = false;
        }
        out.push(entry(index));
    }
    if current_pending {
        out.push(entry(current));
    }
    out
}

/// Words in `[current - radius, current + radius)`, clipped to the list.
pub fn context<S: AsRef<str>>(words: &[S], current: usize, radius: usize) -> Vec<ContextWord<'_>> {
    let start = current.saturating_sub(radius);
    let end = current.saturating_add(radius).min(words.len());
    (start..end)
        .map(|index| ContextWord {
            word: words[index].as_ref(),
            index,
            is_current: index == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{}", i)).collect()
    }

    fn indices(entries: &[MinimapEntry<'_>]) -> Vec<usize> {
        entries.iter().map(|e| e.index).collect()
    }

    #[test]
    fn test_small_list_is_returned_whole() {
        let w = words(5);
        let out = sample(&w, 2, 10);
        assert_eq!(indices(&out), vec![0, 1, 2, 3, 4]);
        assert_eq!(out[3].word, "w3");
    }

    #[test]
    fn test_current_always_present() {
        let w = words(10_000);
        let out = sample(&w, 4237, 100);
        assert!(out.iter().any(|e| e.index == 4237 && e.word == "w4237"));
    }

    #[test]
    fn test_output_sorted_without_duplicates() {
        let w = words(1_003);
        for current in [0, 7, 10, 11, 500, 1_000, 1_002] {
            let out = sample(&w, current, 100);
            let idx = indices(&out);
            assert!(idx.windows(2).all(|p| p[0] < p[1]), "current {}", current);
            assert!(idx.contains(&current));
        }
    }

    #[test]
    fn test_aligned_current_is_not_duplicated() {
        let w = words(1_000);
        let out = sample(&w, 300, 100);
        assert_eq!(out.len(), 100);
        assert_eq!(out.iter().filter(|e| e.index == 300).count(), 1);
    }

    #[test]
    fn test_stride_is_rounded_up() {
        let w = words(250);
        let out = sample(&w, 0, 100);
        // ceil(250 / 100) = 3
        assert_eq!(&indices(&out)[..4], &[0, 3, 6, 9]);
        assert!(out.len() <= 100);
    }

    #[test]
    fn test_empty_words() {
        let w: Vec<String> = Vec::new();
        assert!(sample(&w, 0, 100).is_empty());
        assert!(context(&w, 0, 5).is_empty());
    }

    #[test]
    fn test_context_window() {
        let w = words(200);
        let ctx = context(&w, 100, 50);
        assert_eq!(ctx.len(), 100);
        assert_eq!(ctx[0].index, 50);
        assert_eq!(ctx.last().unwrap().index, 149);
        assert_eq!(ctx.iter().filter(|c| c.is_current).count(), 1);
        assert!(ctx[50].is_current);
    }

    #[test]
    fn test_context_clipped_at_edges() {
        let w = words(20);
        let ctx = context(&w, 3, 50);
        assert_eq!(ctx.first().unwrap().index, 0);
        assert_eq!(ctx.len(), 20);
    }
}
