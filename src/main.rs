mod app;
mod ui;

use anyhow::{Context, Result};
use app::{App, AppView, SettingRow};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use speedread::config::{self, AppConfig};
use speedread::db::Db;
use speedread::engine::tokenize;
use speedread::parser;
use speedread::reader::Reader;
use std::fs::{self, OpenOptions};
use std::{io, time::Duration};
use tokio::runtime::Handle;

const MAX_POLL_MS: u64 = 100;

const USAGE: &str = "usage: speedread [FILE] | speedread stats FILE | speedread config";

#[derive(Debug, PartialEq)]
enum Command {
    Read(Option<String>),
    Stats(String),
    WriteConfig,
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args.get(1).map(String::as_str) {
        None => Ok(Command::Read(None)),
        Some("config") if args.len() == 2 => Ok(Command::WriteConfig),
        Some("stats") => match args.get(2) {
            Some(file) if args.len() == 3 => Ok(Command::Stats(file.clone())),
            _ => anyhow::bail!(USAGE),
        },
        Some("-h") | Some("--help") => anyhow::bail!(USAGE),
        Some(file) if args.len() == 2 => Ok(Command::Read(Some(file.to_string()))),
        Some(_) => anyhow::bail!(USAGE),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let command = parse_args(&args)?;
    if let Err(e) = init_logging() {
        eprintln!("logging disabled: {:#}", e);
    }
    let config = load_config();

    let path = match command {
        Command::WriteConfig => {
            config.save()?;
            println!("Wrote {}", config::CONFIG_FILE);
            return Ok(());
        }
        Command::Stats(path) => return print_stats(&path).await,
        Command::Read(path) => path,
    };

    let db = open_store(&config)?;
    let mut reader = Reader::new(config, db, app::TerminalFocus);
    reader.restore();
    let mut app = App::new(reader);

    if let Some(path) = path {
        match parser::extract_path(&path).await {
            Ok((file_name, extraction)) => app.stage(&file_name, extraction),
            Err(e) => app.open_failed(e),
        }
    }

    let handle = Handle::current();
    tokio::task::spawn_blocking(move || run_terminal(app, handle))
        .await
        .context("UI thread panicked")?
}

async fn print_stats(path: &str) -> Result<()> {
    let (file_name, extraction) = parser::extract_path(path).await?;
    let index = tokenize(&extraction.text);
    println!("File: {}", file_name);
    println!("Words: {}", index.word_count());
    println!("Tokens: {}", index.token_count());
    match extraction.pages {
        Some(pages) => println!("Pages with text: {}", pages.len()),
        None => println!("Pages: none (plain text)"),
    }
    Ok(())
}

fn init_logging() -> Result<()> {
    let dir = config::data_dir();
    fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("speedread.log"))?;
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("SPEEDREAD_LOG", "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn load_config() -> AppConfig {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("unreadable speedread.toml, using defaults: {}", e);
            return AppConfig::default();
        }
    };
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warn!("invalid configuration, using defaults: {:#}", e);
            AppConfig::default()
        }
    }
}

fn open_store(config: &AppConfig) -> Result<Db> {
    if let Some(parent) = config.database_path.parent() {
        fs::create_dir_all(parent).ok();
    }
    match Db::new(&config.database_path) {
        Ok(db) => Ok(db),
        Err(e) => {
            warn!("progress will not persist: {:#}", e);
            Db::in_memory()
        }
    }
}

fn run_terminal(app: App, handle: Handle) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, app, &handle);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    handle: &Handle,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, &app))
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;

        let wait = app
            .reader
            .next_tick_in_ms()
            .map_or(MAX_POLL_MS, |ms| ms.min(MAX_POLL_MS));

        if event::poll(Duration::from_millis(wait))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut app, key.code, handle)
                }
                Event::FocusLost => {
                    if app.reader.is_presenting() {
                        app.reader.presentation_exited();
                    }
                }
                _ => {}
            }
        }

        app.reader.tick();

        if app.should_quit {
            if let Err(e) = app.reader.persist() {
                warn!("failed to save on exit: {:#}", e);
            }
            info!("bye");
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode, handle: &Handle) {
    match app.view {
        AppView::Reader => match code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char(' ') => {
                app.reader.toggle();
            }
            KeyCode::Left | KeyCode::Char('h') => app.reader.step_back(),
            KeyCode::Right | KeyCode::Char('l') => app.reader.step_forward(),
            KeyCode::Char('r') => app.reader.reset(),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => app.reader.adjust_wpm(1),
            KeyCode::Char('-') | KeyCode::Down => app.reader.adjust_wpm(-1),
            KeyCode::Char('[') => {
                app.reader.previous_page();
            }
            KeyCode::Char(']') => {
                app.reader.next_page();
            }
            KeyCode::Char('m') => app.show_minimap = !app.show_minimap,
            KeyCode::Char('c') => app.show_context = !app.show_context,
            KeyCode::Char('d') if app.reader.word_count() > 0 => {
                app.reader.pause();
                app.enter_view(AppView::Document);
            }
            KeyCode::Char('s') => app.enter_view(AppView::Settings),
            KeyCode::Char('o') => {
                app.reader.pause();
                app.path_input.clear();
                app.enter_view(AppView::PathInput);
            }
            KeyCode::Char('?') => app.enter_view(AppView::Help),
            KeyCode::Esc => {
                app.reader.pause();
                app.notice = None;
            }
            _ => {}
        },
        AppView::Document => match code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('d') => app.leave_view(),
            KeyCode::Left | KeyCode::Char('h') => app.move_doc_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => app.move_doc_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => app.move_doc_cursor(-10),
            KeyCode::Down | KeyCode::Char('j') => app.move_doc_cursor(10),
            KeyCode::PageUp | KeyCode::Char('[') => {
                if let Some(start) = app
                    .reader
                    .document()
                    .and_then(|d| d.pages().previous_page_start(app.doc_cursor))
                {
                    app.doc_cursor = start;
                }
            }
            KeyCode::PageDown | KeyCode::Char(']') => {
                if let Some(start) = app
                    .reader
                    .document()
                    .and_then(|d| d.pages().next_page_start(app.doc_cursor))
                {
                    app.doc_cursor = start;
                }
            }
            KeyCode::Enter => {
                app.reader.seek(app.doc_cursor);
                app.leave_view();
            }
            KeyCode::Char('g') => {
                app.reader.jump_to(app.doc_cursor);
                app.leave_view();
            }
            _ => {}
        },
        AppView::Settings => match code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('s') => app.leave_view(),
            KeyCode::Down | KeyCode::Char('j') => {
                app.selected_setting = (app.selected_setting + 1) % SettingRow::ALL.len();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.selected_setting > 0 {
                    app.selected_setting -= 1;
                } else {
                    app.selected_setting = SettingRow::ALL.len() - 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Left => {
                app.change_setting()
            }
            _ => {}
        },
        AppView::PathInput => match code {
            KeyCode::Enter => {
                let path = std::mem::take(&mut app.path_input);
                app.leave_view();
                app.open_path(handle, &path);
            }
            KeyCode::Esc => app.leave_view(),
            KeyCode::Char(c) => app.path_input.push(c),
            KeyCode::Backspace => {
                app.path_input.pop();
            }
            _ => {}
        },
        AppView::Confirm => match code {
            KeyCode::Char('y') | KeyCode::Enter => app.resolve_confirmation(true),
            KeyCode::Char('n') | KeyCode::Esc => app.resolve_confirmation(false),
            _ => {}
        },
        AppView::Help => match code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => app.leave_view(),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("speedread")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_open_file() {
        assert_eq!(parse_args(&args(&[])).unwrap(), Command::Read(None));
        assert_eq!(
            parse_args(&args(&["book.pdf"])).unwrap(),
            Command::Read(Some("book.pdf".to_string()))
        );
    }

    #[test]
    fn test_parse_subcommands() {
        assert_eq!(
            parse_args(&args(&["stats", "book.epub"])).unwrap(),
            Command::Stats("book.epub".to_string())
        );
        assert_eq!(parse_args(&args(&["config"])).unwrap(), Command::WriteConfig);
    }

    #[test]
    fn test_stats_without_file_is_a_usage_error() {
        let err = parse_args(&args(&["stats"])).unwrap_err();
        assert!(err.to_string().starts_with("usage:"));
        assert!(parse_args(&args(&["stats", "a", "b"])).is_err());
        assert!(parse_args(&args(&["one.txt", "two.txt"])).is_err());
    }
}
