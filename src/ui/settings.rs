use crate::app::{App, SettingRow};
use crate::ui::{centered_rect, highlight_color};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

pub fn render(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 40, f.area());
    f.render_widget(Clear, area);

    let settings = app.reader.settings();
    let items: Vec<ListItem> = SettingRow::ALL
        .iter()
        .map(|row| {
            let line = match row {
                SettingRow::HighlightColor => Line::from(vec![
                    Span::raw("Highlight color   "),
                    Span::styled(
                        "■ ",
                        Style::default().fg(highlight_color(&settings.highlight_color)),
                    ),
                    Span::raw(settings.highlight_color_name().to_string()),
                ]),
                SettingRow::Theme => Line::from(format!("Theme             {}", settings.theme)),
                SettingRow::FullscreenOnPlay => Line::from(format!(
                    "Focus on play     {}",
                    if settings.fullscreen_on_play { "on" } else { "off" }
                )),
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Settings ([Enter] Change | [Esc] Close) ")
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_setting));
    f.render_stateful_widget(list, area, &mut state);
}
