use crate::app::App;
use crate::ui::{centered_rect, palette};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render_path_input(f: &mut Frame, app: &App) {
    let (bg, fg) = palette(app.reader.settings().theme);
    let area = centered_rect(70, 30, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(" Open File ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(fg).bg(bg)),
        )
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, chunks[0]);

    let input = Paragraph::new(format!("{}_", app.path_input))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Path ")
                .style(Style::default().fg(fg).bg(bg)),
        )
        .alignment(Alignment::Left);
    f.render_widget(input, chunks[1]);

    let help = Paragraph::new(" [Enter] Open | [Esc] Cancel ")
        .alignment(Alignment::Center)
        .style(Style::default().fg(fg).bg(bg));
    f.render_widget(help, chunks[2]);
}

pub fn render_confirm(f: &mut Frame, app: &App) {
    let Some(pending) = app.pending_load.as_ref() else {
        return;
    };
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(format!(
            "{} contains {} words.",
            pending.file_name(),
            pending.word_count()
        )),
        Line::from("Large documents may take a moment to load."),
        Line::from(""),
        Line::styled(
            "[y] Continue   [n] Cancel",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];

    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Large Document ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(p, area);
}
