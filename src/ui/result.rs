//! Result panel rendering: the price on success, the failure message
//! otherwise. The two are mutually exclusive by construction.

use crate::app::App;
use crate::state::{format_price, Submission};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    match &app.state.submission {
        Submission::Idle => draw_idle(frame, area),
        Submission::Submitting => draw_submitting(frame, area),
        Submission::Success(response) => draw_success(frame, area, response.predicted_price),
        Submission::Failure(message) => draw_failure(frame, area, message, &app.endpoint),
    }
}

fn draw_idle(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let text = Paragraph::new("Fill in the vehicle details and press Predict Price.")
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    frame.render_widget(text, area);
}

fn draw_submitting(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let text = Paragraph::new("Contacting the prediction service…")
        .style(Style::default().fg(Color::Yellow))
        .block(block);
    frame.render_widget(text, area);
}

fn draw_success(frame: &mut Frame, area: Rect, price: f64) {
    let block = Block::default()
        .title(" Estimated Price ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let lines = vec![
        Line::from(Span::styled(
            format_price(price),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} copies the price", crate::platform::COPY_SHORTCUT),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_failure(frame: &mut Frame, area: Rect, message: &str, endpoint: &str) {
    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Check that the backend is reachable at {endpoint}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
