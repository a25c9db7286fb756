use crate::app::App;
use crate::ui::{highlight_color, palette};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Sampled word list, scrolled so the current word stays in view.
pub fn render_minimap(f: &mut Frame, app: &App, area: Rect) {
    let reader = &app.reader;
    let (bg, fg) = palette(reader.settings().theme);
    let accent = highlight_color(&reader.settings().highlight_color);
    let current = reader.current_index();

    let entries = reader.minimap();
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    let focus = entries
        .iter()
        .position(|e| e.index == current)
        .unwrap_or(0);
    let start = focus
        .saturating_sub(visible / 2)
        .min(entries.len().saturating_sub(visible));

    let lines: Vec<Line> = entries
        .iter()
        .skip(start)
        .take(visible)
        .map(|e| {
            let style = if e.index == current {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(fg)
            };
            Line::from(vec![
                Span::styled(format!("{:>7} ", e.index + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(e.word.to_string(), style),
            ])
        })
        .collect();

    let p = Paragraph::new(lines)
        .block(Block::default().title(" Minimap ").borders(Borders::ALL))
        .style(Style::default().fg(fg).bg(bg));
    f.render_widget(p, area);
}

pub fn render_context(f: &mut Frame, app: &App, area: Rect) {
    let reader = &app.reader;
    let (bg, fg) = palette(reader.settings().theme);
    let accent = highlight_color(&reader.settings().highlight_color);

    let mut spans = Vec::new();
    for w in reader.context() {
        let style = if w.is_current {
            Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(w.word.to_string(), style));
        spans.push(Span::raw(" "));
    }

    let p = Paragraph::new(Line::from(spans))
        .block(Block::default().title(" Context ").borders(Borders::ALL))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(fg).bg(bg));
    f.render_widget(p, area);
}
