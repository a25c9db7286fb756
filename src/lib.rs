//! Word-at-a-time reading engine.
//!
//! Extracted text is tokenized into a word index, played back one word at a
//! time under a WPM-driven scheduler, and persisted through a small
//! key-value store.

pub mod config;
pub mod db;
pub mod deps;
pub mod engine;
pub mod parser;
pub mod reader;
pub mod settings;

pub use config::AppConfig;
pub use reader::{LoadOutcome, PendingLoad, Reader, ReadingSession};
pub use settings::{Settings, Theme};
