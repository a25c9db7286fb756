//! The single owner of reading state.
//!
//! `Reader` holds the loaded document, the playback scheduler, the user
//! settings, the progress store and the presentation-mode collaborator.
//! Every mutation goes through its methods; views are recomputed from the
//! current state on demand.

use crate::config::AppConfig;
use crate::db::{KeyValueStore, ProgressStore};
use crate::engine::minimap::{self, ContextWord, MinimapEntry};
use crate::engine::{
    Highlight, PageIndex, PlaybackState, Scheduler, TickOutcome, TokenIndex, highlight, tokenize,
};
use crate::parser::Extraction;
use crate::settings::Settings;
use anyhow::Result;
use log::{debug, info, warn};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Monotonic millisecond time source for the scheduler.
pub trait Clock: Send {
    fn now_ms(&self) -> u64;
}

pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: u64) {
        self.now.store(ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// The exclusive full-attention display mode, owned by the host.
pub trait PresentationMode {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
}

/// Host without an exclusive mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct Windowed;

impl PresentationMode for Windowed {
    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    file_name: String,
    text: TokenIndex,
    pages: PageIndex,
}

impl Document {
    pub fn from_extraction(file_name: &str, extraction: Extraction) -> Self {
        Self {
            file_name: file_name.to_string(),
            text: tokenize(&extraction.text),
            pages: PageIndex::new(extraction.pages.unwrap_or_default()),
        }
    }

    pub fn from_words(file_name: &str, words: &[String]) -> Self {
        let irregular = words
            .iter()
            .filter(|w| w.is_empty() || w.contains(char::is_whitespace))
            .count();
        if irregular > 0 {
            warn!(
                "{} stored words in {:?} are empty or contain whitespace",
                irregular, file_name
            );
        }
        Self {
            file_name: file_name.to_string(),
            text: TokenIndex::from_words(words),
            pages: PageIndex::default(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn text(&self) -> &TokenIndex {
        &self.text
    }

    pub fn words(&self) -> &[String] {
        self.text.words()
    }

    pub fn pages(&self) -> &PageIndex {
        &self.pages
    }
}

/// A tokenized document waiting to replace the current one.
#[derive(Debug)]
pub struct PendingLoad {
    document: Document,
    needs_confirmation: bool,
}

impl PendingLoad {
    pub fn word_count(&self) -> usize {
        self.document.text.word_count()
    }

    pub fn file_name(&self) -> &str {
        &self.document.file_name
    }

    /// True when the document is over the oversize threshold.
    pub fn needs_confirmation(&self) -> bool {
        self.needs_confirmation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { words: usize },
    Declined { words: usize },
}

/// Snapshot of the reading state, as persisted.
#[derive(Debug, Clone, Copy)]
pub struct ReadingSession<'a> {
    pub words: &'a [String],
    pub current_index: usize,
    pub wpm: u32,
    pub is_playing: bool,
    pub file_name: &'a str,
}

pub struct Reader<S: KeyValueStore, P: PresentationMode> {
    config: AppConfig,
    document: Option<Document>,
    playback: Scheduler,
    settings: Settings,
    progress: ProgressStore<S>,
    presentation: P,
    presenting: bool,
    clock: Box<dyn Clock>,
}

fn session_of<'a>(document: &'a Document, playback: &Scheduler) -> ReadingSession<'a> {
    ReadingSession {
        words: document.words(),
        current_index: playback.current_index(),
        wpm: playback.wpm().get(),
        is_playing: playback.is_playing(),
        file_name: &document.file_name,
    }
}

impl<S: KeyValueStore, P: PresentationMode> Reader<S, P> {
    pub fn new(config: AppConfig, store: S, presentation: P) -> Self {
        let playback = Scheduler::new(config.initial_wpm());
        Self {
            config,
            document: None,
            playback,
            settings: Settings::default(),
            progress: ProgressStore::new(store),
            presentation,
            presenting: false,
            clock: Box::new(SystemClock::default()),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Restores the last saved session and settings. The session comes back
    /// paused. Returns whether a session was restored.
    pub fn restore(&mut self) -> bool {
        let (progress, settings) = self.progress.load();
        if let Some(settings) = settings {
            self.settings = settings;
        }
        let Some(record) = progress else {
            return false;
        };

        self.release_presentation();
        let document = Document::from_words(&record.file_name, &record.words);
        self.playback
            .restore(document.text.word_count(), record.current_index);
        info!(
            "restored {:?} at word {} of {}",
            document.file_name,
            self.playback.current_index() + 1,
            document.text.word_count()
        );
        self.document = Some(document);
        true
    }

    pub fn prepare(&self, file_name: &str, extraction: Extraction) -> PendingLoad {
        let document = Document::from_extraction(file_name, extraction);
        let needs_confirmation = document.text.word_count() > self.config.oversize_threshold;
        PendingLoad {
            document,
            needs_confirmation,
        }
    }

    /// Replaces the current document in one step, paused on the first word.
    pub fn commit(&mut self, pending: PendingLoad) -> LoadOutcome {
        self.release_presentation();
        let words = pending.word_count();
        self.playback.load(words);
        info!("loaded {:?}: {} words", pending.document.file_name, words);
        self.document = Some(pending.document);
        self.save_document();
        LoadOutcome::Loaded { words }
    }

    /// Prepares and commits, asking `confirm` first when the document is
    /// oversized. Declining leaves the current session untouched.
    pub fn load(
        &mut self,
        file_name: &str,
        extraction: Extraction,
        confirm: impl FnOnce(usize) -> bool,
    ) -> LoadOutcome {
        let pending = self.prepare(file_name, extraction);
        if pending.needs_confirmation() && !confirm(pending.word_count()) {
            info!("declined oversized document {:?}", pending.file_name());
            return LoadOutcome::Declined {
                words: pending.word_count(),
            };
        }
        self.commit(pending)
    }

    pub fn play(&mut self) -> bool {
        let now = self.clock.now_ms();
        if !self.playback.play(now) {
            return false;
        }
        if self.settings.fullscreen_on_play {
            self.engage_presentation();
        }
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.playback.pause() {
            return false;
        }
        self.release_presentation();
        self.autosave();
        true
    }

    pub fn toggle(&mut self) -> bool {
        if self.playback.is_playing() {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Drives the scheduler; call whenever the host wakes up.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.playback.poll(self.clock.now_ms());
        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Advanced(_) => self.autosave(),
            TickOutcome::ReachedEnd(_) => {
                self.release_presentation();
                self.autosave();
            }
        }
        outcome
    }

    /// Milliseconds until the next tick is due, if one is pending.
    pub fn next_tick_in_ms(&self) -> Option<u64> {
        self.playback
            .next_due_ms()
            .map(|due| due.saturating_sub(self.clock.now_ms()))
    }

    /// Moves to `index` (clamped) without changing the play state.
    pub fn seek(&mut self, index: usize) {
        self.playback.seek(index, self.clock.now_ms());
        self.autosave();
    }

    /// Moves to `index` and pauses, as when picking a word from the
    /// document view.
    pub fn jump_to(&mut self, index: usize) {
        self.pause();
        self.seek(index);
    }

    pub fn step_back(&mut self) {
        self.playback.step_back(self.clock.now_ms());
        self.autosave();
    }

    pub fn step_forward(&mut self) {
        self.playback.step_forward(self.clock.now_ms());
        self.autosave();
    }

    pub fn reset(&mut self) {
        self.playback.reset();
        self.release_presentation();
        self.autosave();
    }

    /// Seeks to the first word of `page_number`. Returns false when the
    /// document has no such page.
    pub fn jump_to_page(&mut self, page_number: u32) -> bool {
        let Some(start) = self
            .document
            .as_ref()
            .and_then(|d| d.pages.page_range(page_number))
            .map(|p| p.word_start)
        else {
            return false;
        };
        self.seek(start);
        true
    }

    pub fn next_page(&mut self) -> bool {
        let current = self.playback.current_index();
        match self
            .document
            .as_ref()
            .and_then(|d| d.pages.next_page_start(current))
        {
            Some(start) => {
                self.seek(start);
                true
            }
            None => false,
        }
    }

    pub fn previous_page(&mut self) -> bool {
        let current = self.playback.current_index();
        match self
            .document
            .as_ref()
            .and_then(|d| d.pages.previous_page_start(current))
        {
            Some(start) => {
                self.seek(start);
                true
            }
            None => false,
        }
    }

    pub fn set_wpm(&mut self, wpm: NonZeroU32) {
        let wpm = self.config.clamp_wpm(wpm.get());
        debug!("wpm set to {}", wpm);
        self.playback.set_wpm(wpm);
    }

    /// Moves the rate by `steps` increments of the configured step.
    pub fn adjust_wpm(&mut self, steps: i32) {
        let delta = i64::from(steps) * i64::from(self.config.wpm_step);
        let target = (i64::from(self.playback.wpm().get()) + delta).clamp(1, i64::from(u32::MAX));
        self.set_wpm(self.config.clamp_wpm(target as u32));
    }

    /// The host left the exclusive mode on its own.
    pub fn presentation_exited(&mut self) {
        self.presenting = false;
        if self.playback.pause() {
            debug!("paused after presentation mode was left externally");
            self.autosave();
        }
    }

    pub fn update_settings(&mut self, update: impl FnOnce(&mut Settings)) {
        update(&mut self.settings);
        if let Err(e) = self.progress.save_settings(&self.settings) {
            warn!("failed to save settings: {:#}", e);
        }
    }

    /// Writes session and settings now.
    pub fn persist(&mut self) -> Result<()> {
        match &self.document {
            Some(document) => {
                let session = session_of(document, &self.playback);
                self.progress.save(&session, &self.settings)
            }
            None => self.progress.save_settings(&self.settings),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn progress_store(&self) -> &ProgressStore<S> {
        &self.progress
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn session(&self) -> Option<ReadingSession<'_>> {
        self.document
            .as_ref()
            .map(|document| session_of(document, &self.playback))
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn is_presenting(&self) -> bool {
        self.presenting
    }

    pub fn wpm(&self) -> u32 {
        self.playback.wpm().get()
    }

    pub fn words(&self) -> &[String] {
        self.document.as_ref().map(|d| d.words()).unwrap_or(&[])
    }

    pub fn word_count(&self) -> usize {
        self.playback.word_count()
    }

    pub fn current_index(&self) -> usize {
        self.playback.current_index()
    }

    pub fn current_word(&self) -> Option<&str> {
        self.words()
            .get(self.playback.current_index())
            .map(String::as_str)
    }

    pub fn highlight(&self) -> Option<Highlight<'_>> {
        self.current_word().map(highlight)
    }

    /// `None` in plain mode.
    pub fn current_page(&self) -> Option<u32> {
        let document = self.document.as_ref()?;
        if document.pages.is_empty() {
            return None;
        }
        Some(document.pages.lookup(self.playback.current_index()))
    }

    pub fn page_count(&self) -> usize {
        self.document.as_ref().map_or(0, |d| d.pages.page_count())
    }

    pub fn progress_percent(&self) -> f64 {
        let total = self.word_count();
        if total == 0 {
            return 0.0;
        }
        self.current_index() as f64 / total as f64 * 100.0
    }

    pub fn position_label(&self) -> String {
        if self.word_count() == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current_index() + 1, self.word_count())
    }

    pub fn minimap(&self) -> Vec<MinimapEntry<'_>> {
        minimap::sample(
            self.words(),
            self.current_index(),
            self.config.minimap_max_visible,
        )
    }

    pub fn context(&self) -> Vec<ContextWord<'_>> {
        minimap::context(self.words(), self.current_index(), self.config.context_radius)
    }

    fn engage_presentation(&mut self) {
        if self.presenting {
            return;
        }
        match self.presentation.enter() {
            Ok(()) => self.presenting = true,
            Err(e) => warn!("presentation mode unavailable, continuing windowed: {:#}", e),
        }
    }

    fn release_presentation(&mut self) {
        if !self.presenting {
            return;
        }
        self.presenting = false;
        if let Err(e) = self.presentation.exit() {
            warn!("failed to leave presentation mode: {:#}", e);
        }
    }

    fn save_document(&mut self) {
        let Some(document) = &self.document else {
            return;
        };
        let session = session_of(document, &self.playback);
        if let Err(e) = self.progress.save_progress(&session) {
            warn!("failed to save progress: {:#}", e);
        }
    }

    /// Position only; the word list was written when the document loaded.
    fn autosave(&mut self) {
        let Some(document) = &self.document else {
            return;
        };
        let session = session_of(document, &self.playback);
        if let Err(e) = self.progress.save_position(&session) {
            warn!("failed to save reading position: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::CountingStore;
    use crate::db::progress::{POSITION_KEY, PROGRESS_KEY};
    use crate::db::{MemoryStore, ProgressRecord};

    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        refuse: bool,
    }

    impl PresentationMode for Recorder {
        fn enter(&mut self) -> Result<()> {
            self.calls.push("enter");
            if self.refuse {
                anyhow::bail!("denied");
            }
            Ok(())
        }

        fn exit(&mut self) -> Result<()> {
            self.calls.push("exit");
            Ok(())
        }
    }

    fn reader() -> (Reader<MemoryStore, Recorder>, ManualClock) {
        let clock = ManualClock::new();
        let config = AppConfig {
            default_wpm: 600,
            ..Default::default()
        };
        let reader =
            Reader::new(config, MemoryStore::new(), Recorder::default()).with_clock(clock.clone());
        (reader, clock)
    }

    fn text(n: usize) -> Extraction {
        Extraction::plain(
            (0..n)
                .map(|i| format!("w{}", i))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    #[test]
    fn test_load_starts_paused_at_zero() {
        let (mut r, _) = reader();
        assert_eq!(r.state(), PlaybackState::Idle);
        let outcome = r.load("a.txt", text(5), |_| true);
        assert_eq!(outcome, LoadOutcome::Loaded { words: 5 });
        assert_eq!(r.state(), PlaybackState::Paused);
        assert_eq!(r.current_word(), Some("w0"));
        assert_eq!(r.current_page(), None);
    }

    #[test]
    fn test_playback_follows_clock() {
        let (mut r, clock) = reader();
        r.load("a.txt", text(3), |_| true);
        assert!(r.play());
        clock.advance(99);
        assert_eq!(r.tick(), TickOutcome::Idle);
        clock.advance(1);
        assert_eq!(r.tick(), TickOutcome::Advanced(1));
        clock.advance(100);
        assert_eq!(r.tick(), TickOutcome::Advanced(2));
        clock.advance(100);
        assert_eq!(r.tick(), TickOutcome::ReachedEnd(2));
        assert_eq!(r.state(), PlaybackState::Finished);
        assert_eq!(r.presentation().calls, ["enter", "exit"]);
    }

    #[test]
    fn test_presentation_skipped_when_disabled() {
        let (mut r, _) = reader();
        r.update_settings(|s| s.fullscreen_on_play = false);
        r.load("a.txt", text(3), |_| true);
        r.play();
        r.pause();
        assert!(r.presentation().calls.is_empty());
    }

    #[test]
    fn test_presentation_failure_keeps_playing() {
        let (mut r, clock) = reader();
        r.presentation.refuse = true;
        r.load("a.txt", text(3), |_| true);
        assert!(r.play());
        assert!(!r.is_presenting());
        assert!(r.is_playing());
        clock.advance(100);
        assert_eq!(r.tick(), TickOutcome::Advanced(1));
        r.pause();
        // never engaged, so nothing to release
        assert_eq!(r.presentation().calls, ["enter"]);
    }

    #[test]
    fn test_external_exit_pauses() {
        let (mut r, clock) = reader();
        r.load("a.txt", text(10), |_| true);
        r.play();
        r.presentation_exited();
        assert_eq!(r.state(), PlaybackState::Paused);
        assert!(!r.is_presenting());
        clock.advance(10_000);
        assert_eq!(r.tick(), TickOutcome::Idle);
        // no exit request is echoed back to the host
        assert_eq!(r.presentation().calls, ["enter"]);
    }

    #[test]
    fn test_oversized_load_declined() {
        let (mut r, _) = reader();
        r.config.oversize_threshold = 10;
        let mut asked = None;
        let outcome = r.load("big.txt", text(11), |n| {
            asked = Some(n);
            false
        });
        assert_eq!(asked, Some(11));
        assert_eq!(outcome, LoadOutcome::Declined { words: 11 });
        assert_eq!(r.word_count(), 0);
        assert_eq!(r.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_declined_load_keeps_prior_session() {
        let (mut r, _) = reader();
        r.config.oversize_threshold = 10;
        r.load("small.txt", text(4), |_| true);
        r.seek(2);
        r.load("big.txt", text(50), |_| false);
        assert_eq!(r.word_count(), 4);
        assert_eq!(r.current_index(), 2);
        assert_eq!(r.document().unwrap().file_name(), "small.txt");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let (mut r, _) = reader();
        r.config.oversize_threshold = 10;
        let pending = r.prepare("edge.txt", text(10));
        assert!(!pending.needs_confirmation());
        assert_eq!(r.commit(pending), LoadOutcome::Loaded { words: 10 });
    }

    #[test]
    fn test_new_load_replaces_and_stops_playback() {
        let (mut r, clock) = reader();
        r.load("one.txt", text(10), |_| true);
        r.play();
        r.load("two.txt", text(3), |_| true);
        assert_eq!(r.state(), PlaybackState::Paused);
        assert_eq!(r.current_index(), 0);
        assert_eq!(r.document().unwrap().file_name(), "two.txt");
        clock.advance(1_000);
        assert_eq!(r.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_jump_to_pauses_but_seek_does_not() {
        let (mut r, _) = reader();
        r.load("a.txt", text(10), |_| true);
        r.play();
        r.seek(5);
        assert!(r.is_playing());
        r.jump_to(7);
        assert!(!r.is_playing());
        assert_eq!(r.current_index(), 7);
    }

    #[test]
    fn test_progress_is_autosaved() {
        let (mut r, clock) = reader();
        r.load("saved.txt", text(5), |_| true);
        r.play();
        clock.advance(100);
        r.tick();
        let record: ProgressRecord = r.progress_store().load_progress().unwrap();
        assert_eq!(record.current_index, 1);
        assert_eq!(record.file_name, "saved.txt");
        assert_eq!(record.total_words, 5);
    }

    #[test]
    fn test_restore_round_trip() {
        let (mut r, _) = reader();
        r.update_settings(|s| s.highlight_color = "#22c55e".into());
        r.load("saved.txt", text(5), |_| true);
        r.seek(3);
        let store = r.progress.into_inner();

        let mut restored = Reader::new(AppConfig::default(), store, Recorder::default());
        assert!(restored.restore());
        assert_eq!(restored.current_index(), 3);
        assert_eq!(restored.current_word(), Some("w3"));
        assert_eq!(restored.state(), PlaybackState::Paused);
        assert_eq!(restored.settings().highlight_color, "#22c55e");
    }

    #[test]
    fn test_ticks_write_position_not_word_list() {
        let clock = ManualClock::new();
        let config = AppConfig {
            default_wpm: 1000,
            ..Default::default()
        };
        let mut r = Reader::new(config, CountingStore::default(), Recorder::default())
            .with_clock(clock.clone());
        r.load("huge.txt", text(150_000), |_| true);
        r.play();
        for _ in 0..100 {
            clock.advance(60);
            r.tick();
        }
        r.pause();
        assert_eq!(r.current_index(), 100);

        let store = r.progress_store().store();
        assert_eq!(store.writes_to(PROGRESS_KEY), 1);
        assert!(store.writes_to(POSITION_KEY) >= 100);
        let largest_position = store
            .writes
            .iter()
            .filter(|(k, _)| k == POSITION_KEY)
            .map(|(_, len)| *len)
            .max()
            .unwrap();
        assert!(largest_position < 200);
        assert_eq!(r.progress_store().load_progress().unwrap().current_index, 100);
    }

    #[test]
    fn test_restore_keeps_irregular_stored_words_aligned() {
        let mut kv = MemoryStore::new();
        kv.set(
            PROGRESS_KEY,
            r#"{"words":["a","","b c","d"],"currentIndex":3,"fileName":"odd.txt"}"#,
        )
        .unwrap();
        let mut r = Reader::new(AppConfig::default(), kv, Recorder::default());
        assert!(r.restore());
        assert_eq!(r.word_count(), 4);
        assert_eq!(r.current_word(), Some("d"));
    }

    #[test]
    fn test_restore_without_records() {
        let (mut r, _) = reader();
        assert!(!r.restore());
        assert_eq!(r.state(), PlaybackState::Idle);
        assert_eq!(r.settings(), &Settings::default());
    }

    #[test]
    fn test_pages_drive_navigation() {
        let (mut r, _) = reader();
        let extraction = crate::parser::pdf::split_pages("a b c\u{0c}d e\u{0c}f g h i\u{0c}");
        r.load("doc.pdf", extraction, |_| true);
        assert_eq!(r.page_count(), 3);
        assert_eq!(r.current_page(), Some(1));
        assert!(r.next_page());
        assert_eq!(r.current_index(), 3);
        assert_eq!(r.current_page(), Some(2));
        assert!(r.jump_to_page(3));
        assert_eq!(r.current_word(), Some("f"));
        assert!(!r.next_page());
        r.step_forward();
        assert!(r.previous_page());
        assert_eq!(r.current_index(), 5);
        assert!(!r.jump_to_page(9));
    }

    #[test]
    fn test_wpm_adjustment_clamps() {
        let (mut r, _) = reader();
        r.adjust_wpm(1);
        assert_eq!(r.wpm(), 650);
        r.adjust_wpm(100);
        assert_eq!(r.wpm(), 1000);
        r.adjust_wpm(-100);
        assert_eq!(r.wpm(), 100);
        r.set_wpm(NonZeroU32::new(5).unwrap());
        assert_eq!(r.wpm(), 100);
    }

    #[test]
    fn test_views() {
        let (mut r, _) = reader();
        assert_eq!(r.position_label(), "0 / 0");
        assert_eq!(r.progress_percent(), 0.0);
        r.load("a.txt", Extraction::plain("the quick brown fox"), |_| true);
        r.seek(2);
        assert_eq!(r.position_label(), "3 / 4");
        assert_eq!(r.progress_percent(), 50.0);
        let h = r.highlight().unwrap();
        assert_eq!((h.before, h.pivot, h.after), ("b", "r", "own"));
        assert_eq!(r.minimap().len(), 4);
        assert_eq!(r.context().iter().filter(|c| c.is_current).count(), 1);
    }
}
