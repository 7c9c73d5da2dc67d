//! Layout components (form area, result area, status bar)

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Form block height: four field rows per column plus the outer borders
const FORM_HEIGHT: u16 = 4 * BUTTON_HEIGHT + 2;

/// Create the main layout: form on top, result panel below, one line
/// reserved for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_HEIGHT), // Form
            Constraint::Min(5),              // Result panel
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar with key hints or a transient message
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let bar = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);

    let line = if let Some(ref message) = app.status_message {
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled("Tab/↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(": fields  "),
            Span::styled("←→", Style::default().fg(Color::Cyan)),
            Span::raw(": adjust  "),
            Span::styled(crate::platform::SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
            Span::raw(": predict  "),
            Span::styled(crate::platform::COPY_SHORTCUT, Style::default().fg(Color::Cyan)),
            Span::raw(": copy price  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ])
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        bar,
    );
}
