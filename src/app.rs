use anyhow::Result;
use crossterm::{cursor, execute, terminal::SetTitle};
use log::warn;
use speedread::db::Db;
use speedread::parser::{self, Extraction};
use speedread::reader::{PendingLoad, PresentationMode, Reader};
use std::io;
use tokio::runtime::Handle;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum AppView {
    Reader,
    Document,
    Settings,
    PathInput,
    Confirm,
    Help,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum SettingRow {
    HighlightColor,
    Theme,
    FullscreenOnPlay,
}

impl SettingRow {
    pub const ALL: [SettingRow; 3] = [
        SettingRow::HighlightColor,
        SettingRow::Theme,
        SettingRow::FullscreenOnPlay,
    ];
}

/// Focus mode in the terminal: the window title changes and the cursor is
/// hidden while the UI drops its chrome.
pub struct TerminalFocus;

impl PresentationMode for TerminalFocus {
    fn enter(&mut self) -> Result<()> {
        execute!(io::stdout(), SetTitle("speedread · reading"), cursor::Hide)?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        execute!(io::stdout(), SetTitle("speedread"), cursor::Show)?;
        Ok(())
    }
}

pub struct App {
    pub reader: Reader<Db, TerminalFocus>,
    pub view: AppView,
    pub previous_view: Option<AppView>,
    pub show_minimap: bool,
    pub show_context: bool,
    pub doc_cursor: usize,
    pub selected_setting: usize,
    pub path_input: String,
    pub pending_load: Option<PendingLoad>,
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(reader: Reader<Db, TerminalFocus>) -> Self {
        Self {
            reader,
            view: AppView::Reader,
            previous_view: None,
            show_minimap: false,
            show_context: false,
            doc_cursor: 0,
            selected_setting: 0,
            path_input: String::new(),
            pending_load: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Runs extraction on the async runtime and stages the result. Called
    /// from the blocking UI thread.
    pub fn open_path(&mut self, handle: &Handle, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            return;
        }
        match handle.block_on(parser::extract_path(path)) {
            Ok((file_name, extraction)) => self.stage(&file_name, extraction),
            Err(e) => self.open_failed(e),
        }
    }

    pub fn stage(&mut self, file_name: &str, extraction: Extraction) {
        let pending = self.reader.prepare(file_name, extraction);
        if pending.word_count() == 0 {
            self.notice = Some(format!("No readable text found in {}", file_name));
            return;
        }
        if pending.needs_confirmation() {
            self.pending_load = Some(pending);
            self.enter_view(AppView::Confirm);
        } else {
            self.reader.commit(pending);
            self.notice = None;
            self.view = AppView::Reader;
        }
    }

    pub fn open_failed(&mut self, error: anyhow::Error) {
        warn!("open failed: {:#}", error);
        self.notice = Some("Error reading file. Please try a different file.".to_string());
    }

    pub fn resolve_confirmation(&mut self, accept: bool) {
        if let Some(pending) = self.pending_load.take() {
            if accept {
                self.reader.commit(pending);
                self.notice = None;
            }
        }
        self.view = AppView::Reader;
        self.previous_view = None;
    }

    pub fn enter_view(&mut self, view: AppView) {
        if self.view != view {
            self.previous_view = Some(self.view);
        }
        if view == AppView::Document {
            self.doc_cursor = self.reader.current_index();
        }
        self.view = view;
    }

    pub fn leave_view(&mut self) {
        self.view = self.previous_view.take().unwrap_or(AppView::Reader);
    }

    pub fn move_doc_cursor(&mut self, delta: isize) {
        let last = self.reader.word_count().saturating_sub(1);
        self.doc_cursor = self.doc_cursor.saturating_add_signed(delta).min(last);
    }

    pub fn selected_row(&self) -> SettingRow {
        SettingRow::ALL[self.selected_setting % SettingRow::ALL.len()]
    }

    pub fn change_setting(&mut self) {
        match self.selected_row() {
            SettingRow::HighlightColor => self.reader.update_settings(|s| s.cycle_highlight_color()),
            SettingRow::Theme => self.reader.update_settings(|s| s.theme = s.theme.next()),
            SettingRow::FullscreenOnPlay => self
                .reader
                .update_settings(|s| s.fullscreen_on_play = !s.fullscreen_on_play),
        }
    }
}
