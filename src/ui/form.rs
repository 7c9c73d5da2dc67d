//! Vehicle form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the vehicle attribute form: two columns of fields with the submit
/// button in the bottom-right slot
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Karhba — Car Price Estimator ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let row_constraints = [
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(BUTTON_HEIGHT),
    ];
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(columns[1]);

    // Left column: year, brand, model, mileage. Right column: cv, fuel,
    // transmission, then the submit button.
    for (slot, index) in left.iter().zip(0usize..4) {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, *slot, field, form.active_field_index == index);
        }
    }
    for (slot, index) in right.iter().zip(4usize..7) {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, *slot, field, form.active_field_index == index);
        }
    }

    let submitting = app.state.submission.in_flight();
    let label = if submitting {
        "Submitting…"
    } else {
        "Predict Price"
    };
    render_button(
        frame,
        right[3],
        label,
        form.is_submit_row_active(),
        !submitting,
    );
}
