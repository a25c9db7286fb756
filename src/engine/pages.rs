//! Word-range to page lookup for paginated sources.

use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page_number: u32,
    pub word_start: usize,
    pub word_end: usize,
}

impl Page {
    pub fn contains(&self, word: usize) -> bool {
        self.word_start <= word && word <= self.word_end
    }

    pub fn word_count(&self) -> usize {
        self.word_end - self.word_start + 1
    }
}

/// Builds contiguous page ranges from per-page word counts.
///
/// `counts[i]` is the number of words on page `i + 1`. Pages without words
/// get no entry, which keeps the remaining ranges gap-free.
pub fn boundaries_from_word_counts(counts: &[usize]) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut next = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        pages.push(Page {
            page_number: i as u32 + 1,
            word_start: next,
            word_end: next + count - 1,
        });
        next += count;
    }
    pages
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndex {
    pages: Vec<Page>,
}

impl PageIndex {
    pub fn new(mut pages: Vec<Page>) -> Self {
        pages.sort_by_key(|p| p.page_number);
        pages.retain(|p| {
            let ok = p.page_number >= 1 && p.word_start <= p.word_end;
            if !ok {
                warn!("dropping malformed page boundary {:?}", p);
            }
            ok
        });
        let index = Self { pages };
        if !index.is_partition() {
            warn!("page boundaries have gaps or overlaps; lookups fall back to the nearest page");
        }
        index
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// True when successive pages cover the word range without gaps or overlaps.
    pub fn is_partition(&self) -> bool {
        self.pages
            .windows(2)
            .all(|w| w[0].word_end + 1 == w[1].word_start)
    }

    /// Page number containing `word`.
    ///
    /// Without pages this is always page 1. When no range contains the word
    /// the nearest page starting before it wins, or the first page if none does.
    pub fn lookup(&self, word: usize) -> u32 {
        self.slot_for(word)
            .map(|slot| self.pages[slot].page_number)
            .unwrap_or(1)
    }

    pub fn page_range(&self, page_number: u32) -> Option<&Page> {
        self.pages
            .binary_search_by_key(&page_number, |p| p.page_number)
            .ok()
            .map(|slot| &self.pages[slot])
    }

    /// First word of the page after the one holding `word`.
    pub fn next_page_start(&self, word: usize) -> Option<usize> {
        let slot = self.slot_for(word)?;
        self.pages.get(slot + 1).map(|p| p.word_start)
    }

    /// First word of the current page, or of the previous page when `word`
    /// already sits on the first word of its page.
    pub fn previous_page_start(&self, word: usize) -> Option<usize> {
        let slot = self.slot_for(word)?;
        let page = &self.pages[slot];
        if word > page.word_start {
            return Some(page.word_start);
        }
        slot.checked_sub(1).map(|prev| self.pages[prev].word_start)
    }

    fn slot_for(&self, word: usize) -> Option<usize> {
        if self.pages.is_empty() {
            return None;
        }
        let after = self.pages.partition_point(|p| p.word_start <= word);
        Some(after.saturating_sub(1))
    }
}

/// Monotonic page scan for consumers that walk words in order.
///
/// Each call costs O(1) while the word advances one step at a time and only
/// falls back to a binary search on jumps.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageCursor {
    slot: usize,
}

impl PageCursor {
    pub fn page_for(&mut self, index: &PageIndex, word: usize) -> u32 {
        let pages = index.pages();
        if pages.is_empty() {
            return 1;
        }
        if let Some(page) = pages.get(self.slot) {
            if page.contains(word) {
                return page.page_number;
            }
            if let Some(next) = pages.get(self.slot + 1) {
                if next.contains(word) {
                    self.slot += 1;
                    return next.page_number;
                }
            }
        }
        self.slot = index.slot_for(word).unwrap_or(0);
        pages[self.slot].page_number
    }
}
