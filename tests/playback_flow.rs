use speedread::db::{Db, MemoryStore};
use speedread::engine::{PlaybackState, TickOutcome, tokenize};
use speedread::parser::{Extraction, pdf};
use speedread::reader::{ManualClock, Reader, Windowed};
use speedread::{AppConfig, LoadOutcome};
use tempfile::TempDir;

fn reader_with(store: MemoryStore, clock: &ManualClock) -> Reader<MemoryStore, Windowed> {
    Reader::new(AppConfig::default(), store, Windowed).with_clock(clock.clone())
}

#[test]
fn test_play_to_end_then_restore_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("progress.db");
    let clock = ManualClock::new();

    {
        let db = Db::new(&path).unwrap();
        let mut reader = Reader::new(AppConfig::default(), db, Windowed).with_clock(clock.clone());
        let outcome = reader.load(
            "story.txt",
            Extraction::plain("one two three four five"),
            |_| true,
        );
        assert_eq!(outcome, LoadOutcome::Loaded { words: 5 });
        assert!(reader.play());

        // 300 wpm is one word every 200ms
        clock.advance(200);
        assert_eq!(reader.tick(), TickOutcome::Advanced(1));
        clock.advance(199);
        assert_eq!(reader.tick(), TickOutcome::Idle);
        clock.advance(1);
        assert_eq!(reader.tick(), TickOutcome::Advanced(2));
        assert_eq!(reader.current_word(), Some("three"));

        reader.pause();
        reader.persist().unwrap();
    }

    let db = Db::new(&path).unwrap();
    let mut reader = Reader::new(AppConfig::default(), db, Windowed).with_clock(clock.clone());
    assert!(reader.restore());
    assert_eq!(reader.current_index(), 2);
    assert_eq!(reader.word_count(), 5);
    assert_eq!(reader.state(), PlaybackState::Paused);
    assert_eq!(reader.document().unwrap().file_name(), "story.txt");

    assert!(reader.play());
    for expected in [3, 4] {
        clock.advance(200);
        assert_eq!(reader.tick(), TickOutcome::Advanced(expected));
    }
    clock.advance(200);
    assert_eq!(reader.tick(), TickOutcome::ReachedEnd(4));
    assert_eq!(reader.state(), PlaybackState::Finished);
    assert_eq!(reader.next_tick_in_ms(), None);
}

#[test]
fn test_declining_oversized_document_keeps_session() {
    let clock = ManualClock::new();
    let mut reader = reader_with(MemoryStore::new(), &clock);
    reader.load("short.txt", Extraction::plain("alpha beta gamma"), |_| true);
    reader.seek(1);

    let big = "word ".repeat(150_000);
    let mut asked = None;
    let outcome = reader.load("big.txt", Extraction::plain(big), |words| {
        asked = Some(words);
        false
    });

    assert_eq!(asked, Some(150_000));
    assert_eq!(outcome, LoadOutcome::Declined { words: 150_000 });
    assert_eq!(reader.word_count(), 3);
    assert_eq!(reader.current_word(), Some("beta"));
}

#[test]
fn test_empty_store_starts_clean() {
    let clock = ManualClock::new();
    let mut reader = reader_with(MemoryStore::new(), &clock);
    assert!(!reader.restore());
    assert_eq!(reader.state(), PlaybackState::Idle);
    assert_eq!(reader.position_label(), "0 / 0");
    assert!(reader.minimap().is_empty());
    assert!(!reader.play());
}

#[test]
fn test_pdf_pages_follow_playback() {
    let clock = ManualClock::new();
    let mut reader = reader_with(MemoryStore::new(), &clock);
    let extraction = pdf::split_pages("a b c\x0c\x0cd e\x0cf\x0c");
    reader.load("paper.pdf", extraction, |_| true);

    assert_eq!(reader.word_count(), 6);
    assert_eq!(reader.page_count(), 3);
    assert_eq!(reader.current_page(), Some(1));

    assert!(reader.next_page());
    assert_eq!(reader.current_index(), 3);
    assert_eq!(reader.current_page(), Some(3));

    assert!(reader.next_page());
    assert_eq!(reader.current_word(), Some("f"));
    assert_eq!(reader.current_page(), Some(4));
    assert!(!reader.next_page());

    assert!(reader.previous_page());
    assert_eq!(reader.current_index(), 3);
}

#[test]
fn test_minimap_bounded_on_large_document() {
    let clock = ManualClock::new();
    let text = (0..20_000).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
    let mut reader = reader_with(MemoryStore::new(), &clock);
    reader.load("long.txt", Extraction::plain(text), |_| true);
    reader.seek(12_345);

    let entries = reader.minimap();
    assert!(entries.len() <= reader.config().minimap_max_visible + 1);
    assert!(entries.iter().any(|e| e.index == 12_345 && e.word == "w12345"));
    assert!(entries.windows(2).all(|w| w[0].index < w[1].index));
}

#[test]
fn test_tokenized_text_reconstructs_source() {
    let source = "  Hello,\tworld!\n\nSecond\u{00A0}line ";
    let index = tokenize(source);
    assert_eq!(index.reconstruct(), source);
    assert_eq!(index.words(), ["Hello,", "world!", "Second", "line"]);
}
