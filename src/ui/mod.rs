//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;
mod layout;
mod result;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, result_area) = layout::create_layout(area);

    form::draw(frame, form_area, app);
    result::draw(frame, result_area, app);

    layout::draw_status_bar(frame, app);
}
