//! Field rendering utilities for forms

use crate::state::forms::Field;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Mask character for secret fields
const MASK: char = '•';

/// Text shown inside a field box; secret fields are masked
pub fn display_value(field: Field, value: &str) -> String {
    if field.is_secret() {
        std::iter::repeat(MASK).take(value.chars().count()).collect()
    } else {
        value.to_string()
    }
}

/// Draw a single-line text field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    value: &str,
    is_active: bool,
    is_enabled: bool,
    has_error: bool,
) {
    let border_color = if !is_enabled {
        Color::DarkGray
    } else if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::Gray
    };
    let text_style = if is_enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display = display_value(field, value);
    // Keep the tail visible when the value is wider than the box
    let inner_width = area.width.saturating_sub(3) as usize;
    let skip = display.chars().count().saturating_sub(inner_width);
    let visible: String = display.chars().skip(skip).collect();

    let cursor = if is_active && is_enabled { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(visible, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.block(block), area);
}

/// Draw the error line under a field; blank when there is no error
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_shown_verbatim() {
        assert_eq!(display_value(Field::Email, "a@b.com"), "a@b.com");
    }

    #[test]
    fn test_password_is_masked_per_character() {
        assert_eq!(display_value(Field::Password, "Ab1§"), "••••");
        assert_eq!(display_value(Field::Password, ""), "");
    }
}
