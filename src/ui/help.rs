use crate::app::App;
use crate::ui::centered_rect;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render(f: &mut Frame, _app: &App) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area); // Clear the area for the popup

    let help_text = [
        "--- READER ---",
        "Space : Play / Pause",
        "Left/Right : Previous / Next Word",
        "r : Back to Start",
        "+/- : Speed Up / Slow Down",
        "[ / ] : Previous / Next Page",
        "m : Toggle Minimap",
        "c : Toggle Context",
        "d : Document View",
        "o : Open File",
        "s : Settings",
        "--- DOCUMENT ---",
        "h/l : Move by Word",
        "j/k : Move by Line",
        "[ / ] : Move by Page",
        "Enter : Jump Here",
        "g : Jump Here and Pause",
        "--- GLOBAL ---",
        "? : Toggle Help",
        "q : Back / Quit",
    ];

    let p = Paragraph::new(help_text.join("\n"))
        .block(Block::default().title(" Quick Help ").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(p, area);
}
