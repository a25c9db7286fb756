use crate::app::App;
use crate::ui::{highlight_color, minimap, palette};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
};
use speedread::engine::Highlight;
use speedread::engine::PlaybackState;
use unicode_width::UnicodeWidthStr;

const SIDEBAR_WIDTH: u16 = 28;

pub fn render(f: &mut Frame, app: &App) {
    let reader = &app.reader;
    let (bg, fg) = palette(reader.settings().theme);
    let accent = highlight_color(&reader.settings().highlight_color);

    if reader.is_presenting() {
        render_focus(f, app, accent);
        return;
    }

    // Fill background
    f.render_widget(Block::default().style(Style::default().bg(bg)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, app, chunks[0], fg, bg);

    if reader.word_count() == 0 {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("Press [o] to open a file"),
            Line::from("PDF, TXT, Markdown, EPUB, MOBI, AZW3"),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(fg).bg(bg));
        f.render_widget(empty, centered_band(chunks[1], 3));
    } else {
        let mut constraints = Vec::new();
        if app.show_context {
            constraints.push(Constraint::Length(SIDEBAR_WIDTH));
        }
        constraints.push(Constraint::Min(0));
        if app.show_minimap {
            constraints.push(Constraint::Length(SIDEBAR_WIDTH));
        }
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(chunks[1]);

        let mut slot = 0;
        if app.show_context {
            minimap::render_context(f, app, columns[slot]);
            slot += 1;
        }
        if let Some(h) = reader.highlight() {
            render_word(f, &h, columns[slot], fg, accent);
        }
        slot += 1;
        if app.show_minimap {
            minimap::render_minimap(f, app, columns[slot]);
        }

        let ratio = (reader.progress_percent() / 100.0).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .ratio(ratio)
            .label(format!("{} words", reader.position_label()))
            .gauge_style(Style::default().fg(accent).bg(bg));
        f.render_widget(gauge, chunks[2]);
    }

    let notice = app.notice.as_deref().unwrap_or("");
    f.render_widget(
        Paragraph::new(notice)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow).bg(bg)),
        chunks[3],
    );

    let state = match reader.state() {
        PlaybackState::Idle => "empty",
        PlaybackState::Paused => "paused",
        PlaybackState::Playing => "playing",
        PlaybackState::Finished => "finished",
    };
    let help = Paragraph::new(format!(
        " {} | WPM: {} | [Space] Play/Pause | [←/→] Word | [+/-] Speed | [d] Document | [?] Help | [q] Quit ",
        state,
        reader.wpm()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(fg).bg(bg));
    f.render_widget(help, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect, fg: Color, bg: Color) {
    let reader = &app.reader;
    let mut spans = vec![Span::styled(
        " SpeedRead ",
        Style::default().fg(fg).add_modifier(Modifier::BOLD),
    )];
    if let Some(doc) = reader.document() {
        spans.push(Span::styled(
            doc.file_name().to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(page) = reader.current_page() {
        spans.push(Span::styled(
            format!("  page {} ({} with text)", page, reader.page_count()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn render_focus(f: &mut Frame, app: &App, accent: Color) {
    let reader = &app.reader;
    f.render_widget(Block::default().style(Style::default().bg(Color::Black)), f.area());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    if let Some(h) = reader.highlight() {
        render_word(f, &h, chunks[0], Color::White, accent);
    }
    f.render_widget(
        Paragraph::new(format!("{} wpm", reader.wpm()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray).bg(Color::Black)),
        chunks[1],
    );
}

/// Draws the word with its pivot pinned to the horizontal center, between
/// two guide ticks.
fn render_word(f: &mut Frame, h: &Highlight<'_>, area: Rect, fg: Color, accent: Color) {
    let band = centered_band(area, 3);
    let center = band.width / 2;
    let pad = usize::from(center).saturating_sub(h.before.width());
    let guide = format!("{}│", " ".repeat(usize::from(center)));

    let word = Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(h.before, Style::default().fg(fg).add_modifier(Modifier::BOLD)),
        Span::styled(
            h.pivot,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(h.after, Style::default().fg(fg).add_modifier(Modifier::BOLD)),
    ]);

    let guide_style = Style::default().fg(Color::DarkGray);
    let p = Paragraph::new(vec![
        Line::styled(guide.clone(), guide_style),
        word,
        Line::styled(guide, guide_style),
    ]);
    f.render_widget(p, band);
}

fn centered_band(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}
