use crate::app::App;
use crate::ui::{highlight_color, palette};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use speedread::engine::PageCursor;

// Rough average of a word plus its trailing space, in cells.
const CELLS_PER_WORD: usize = 7;

pub fn render(f: &mut Frame, app: &App) {
    let reader = &app.reader;
    let (bg, fg) = palette(reader.settings().theme);
    let accent = highlight_color(&reader.settings().highlight_color);

    // Fill background
    f.render_widget(Block::default().style(Style::default().bg(bg)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let Some(document) = reader.document() else {
        return;
    };
    let words = document.words();
    let pages = document.pages();

    let inner_cells = usize::from(chunks[0].width.saturating_sub(2))
        * usize::from(chunks[0].height.saturating_sub(2));
    let budget = (inner_cells / CELLS_PER_WORD).max(1);
    let start = app.doc_cursor.saturating_sub(budget / 3);
    let end = (start + budget).min(words.len());

    let mut lines: Vec<Line> = Vec::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut cursor = PageCursor::default();
    let mut last_page = None;

    for (i, word) in words.iter().enumerate().take(end).skip(start) {
        if !pages.is_empty() {
            let page = cursor.page_for(pages, i);
            if last_page != Some(page) {
                if !spans.is_empty() {
                    lines.push(Line::from(std::mem::take(&mut spans)));
                }
                lines.push(Line::styled(
                    format!("── page {} ──", page),
                    Style::default().fg(Color::DarkGray),
                ));
                last_page = Some(page);
            }
        }

        let mut style = Style::default().fg(fg);
        if i == reader.current_index() {
            style = style
                .fg(accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        if i == app.doc_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(word.clone(), style));
        spans.push(Span::raw(" "));
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }

    let title = format!(
        " {} | word {} of {} ",
        document.file_name(),
        app.doc_cursor + 1,
        words.len()
    );
    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(fg).bg(bg)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(p, chunks[0]);

    let help = Paragraph::new(
        " [h/l] Word | [j/k] Line | [ [ / ] ] Page | [Enter] Jump | [g] Jump & Pause | [Esc] Back ",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(fg).bg(bg));
    f.render_widget(help, chunks[1]);
}
