pub mod dialog;
pub mod document;
pub mod help;
pub mod minimap;
pub mod rsvp;
pub mod settings;

use crate::app::{App, AppView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
};
use speedread::Theme;

pub fn render(f: &mut Frame, app: &App) {
    match app.view {
        AppView::Document => document::render(f, app),
        _ => rsvp::render(f, app),
    }

    match app.view {
        AppView::Settings => settings::render(f, app),
        AppView::PathInput => dialog::render_path_input(f, app),
        AppView::Confirm => dialog::render_confirm(f, app),
        AppView::Help => help::render(f, app),
        AppView::Reader | AppView::Document => {}
    }
}

/// Background and foreground for a theme. `System` leaves the terminal's
/// own colors alone.
pub fn palette(theme: Theme) -> (Color, Color) {
    match theme {
        Theme::Light => (Color::Rgb(250, 250, 247), Color::Rgb(30, 30, 30)),
        Theme::Dark => (Color::Rgb(18, 18, 18), Color::Rgb(228, 228, 228)),
        Theme::System => (Color::Reset, Color::Reset),
    }
}

pub fn highlight_color(value: &str) -> Color {
    value.parse::<Color>().unwrap_or(Color::Red)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
