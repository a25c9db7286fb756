//! Reading-progress and settings records on top of a [`KeyValueStore`].
//!
//! Progress is one JSON record, stored in two parts: the document (words,
//! file name, word count) is written when a document is loaded, and the
//! small position part is rewritten as reading advances. Loading recombines
//! them. Each setting is its own record so that settings can be written
//! before any document exists and survive document changes. Anything
//! unreadable on load is treated as absent.

use super::KeyValueStore;
use crate::reader::ReadingSession;
use crate::settings::{Settings, Theme};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

pub const PROGRESS_KEY: &str = "speedreader-progress";
pub const POSITION_KEY: &str = "speedreader-position";
pub const THEME_KEY: &str = "speedreader-theme";
pub const FULLSCREEN_KEY: &str = "speedreader-fullscreen-on-play";
pub const HIGHLIGHT_COLOR_KEY: &str = "speedreader-highlight-color";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub words: Vec<String>,
    #[serde(alias = "index")]
    pub current_index: usize,
    pub file_name: String,
    #[serde(default)]
    pub last_read: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_words: usize,
}

impl ProgressRecord {
    pub fn from_session(session: &ReadingSession<'_>, now: DateTime<Utc>) -> Self {
        Self {
            words: session.words.to_vec(),
            current_index: session.current_index,
            file_name: session.file_name.to_string(),
            last_read: Some(now),
            total_words: session.words.len(),
        }
    }
}

/// Where reading stands in the document last written under [`PROGRESS_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    pub current_index: usize,
    pub file_name: String,
    pub total_words: usize,
    pub last_read: DateTime<Utc>,
}

impl PositionRecord {
    pub fn from_session(session: &ReadingSession<'_>, now: DateTime<Utc>) -> Self {
        Self {
            current_index: session.current_index,
            file_name: session.file_name.to_string(),
            total_words: session.words.len(),
            last_read: now,
        }
    }

    fn matches(&self, record: &ProgressRecord) -> bool {
        self.file_name == record.file_name && self.total_words == record.words.len()
    }
}

pub struct ProgressStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Writes the session (when it has words) and every setting.
    pub fn save(&mut self, session: &ReadingSession<'_>, settings: &Settings) -> Result<()> {
        self.save_progress(session)?;
        self.save_settings(settings)
    }

    /// Writes the whole record, word list included. Call once per loaded
    /// document; use [`ProgressStore::save_position`] while reading.
    pub fn save_progress(&mut self, session: &ReadingSession<'_>) -> Result<()> {
        if session.words.is_empty() {
            return Ok(());
        }
        let now = Utc::now();
        let record = ProgressRecord::from_session(session, now);
        let json = serde_json::to_string(&record).context("Failed to encode progress")?;
        self.store.set(PROGRESS_KEY, &json)?;
        self.write_position(&PositionRecord::from_session(session, now))
    }

    /// Writes only the reading position.
    pub fn save_position(&mut self, session: &ReadingSession<'_>) -> Result<()> {
        if session.words.is_empty() {
            return Ok(());
        }
        self.write_position(&PositionRecord::from_session(session, Utc::now()))
    }

    fn write_position(&mut self, position: &PositionRecord) -> Result<()> {
        let json = serde_json::to_string(position).context("Failed to encode position")?;
        self.store.set(POSITION_KEY, &json)
    }

    pub fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        self.store.set(THEME_KEY, settings.theme.as_str())?;
        self.store
            .set(FULLSCREEN_KEY, &serde_json::to_string(&settings.fullscreen_on_play)?)?;
        self.store.set(HIGHLIGHT_COLOR_KEY, &settings.highlight_color)?;
        Ok(())
    }

    pub fn load(&self) -> (Option<ProgressRecord>, Option<Settings>) {
        (self.load_progress(), self.load_settings())
    }

    pub fn load_progress(&self) -> Option<ProgressRecord> {
        let raw = self.read(PROGRESS_KEY)?;
        let mut record = match serde_json::from_str::<ProgressRecord>(&raw) {
            Ok(record) if record.words.is_empty() => return None,
            Ok(record) => record,
            Err(e) => {
                warn!("ignoring unreadable progress record: {}", e);
                return None;
            }
        };
        if record.total_words != 0 && record.total_words != record.words.len() {
            warn!(
                "progress record claims {} words but holds {}",
                record.total_words,
                record.words.len()
            );
        }

        if let Some(raw) = self.read(POSITION_KEY) {
            match serde_json::from_str::<PositionRecord>(&raw) {
                Ok(position) if position.matches(&record) => {
                    record.current_index = position.current_index;
                    record.last_read = Some(position.last_read);
                }
                Ok(position) => warn!(
                    "ignoring position saved for {:?}, which is not the stored document",
                    position.file_name
                ),
                Err(e) => warn!("ignoring unreadable reading position: {}", e),
            }
        }
        Some(record)
    }

    /// `None` when no setting was ever stored. Individual unreadable
    /// settings fall back to their defaults.
    pub fn load_settings(&self) -> Option<Settings> {
        let theme = self.read(THEME_KEY);
        let fullscreen = self.read(FULLSCREEN_KEY);
        let color = self.read(HIGHLIGHT_COLOR_KEY);
        if theme.is_none() && fullscreen.is_none() && color.is_none() {
            return None;
        }

        let mut settings = Settings::default();
        if let Some(raw) = theme {
            match raw.parse::<Theme>() {
                Ok(theme) => settings.theme = theme,
                Err(e) => warn!("ignoring stored theme: {}", e),
            }
        }
        if let Some(raw) = fullscreen {
            match serde_json::from_str::<bool>(&raw) {
                Ok(flag) => settings.fullscreen_on_play = flag,
                Err(e) => warn!("ignoring stored fullscreen flag {:?}: {}", raw, e),
            }
        }
        if let Some(raw) = color {
            if !raw.trim().is_empty() {
                settings.highlight_color = raw;
            }
        }
        Some(settings)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("failed to read {}: {:#}", key, e);
                None
            }
        }
    }
}
