//! Field rendering utilities for the form

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let line = match field.value {
        // Selects render as a picker with cycle arrows when active
        FieldValue::Select { .. } => {
            if is_active {
                Line::from(vec![
                    Span::styled("◂ ", Style::default().fg(Color::Cyan)),
                    Span::styled(display_value, style),
                    Span::styled(" ▸", Style::default().fg(Color::Cyan)),
                ])
            } else {
                Line::from(Span::styled(display_value, style))
            }
        }
        // Text and number fields get a cursor while active
        _ => {
            let display_str = if display_value.is_empty() && !is_active {
                "(empty)".to_string()
            } else {
                display_value
            };
            let cursor = if is_active { "▌" } else { "" };
            Line::from(vec![
                Span::styled(display_str, style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ])
        }
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
