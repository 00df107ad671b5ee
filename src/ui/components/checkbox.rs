//! Checkbox component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_checkbox(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_checked: bool,
    is_focused: bool,
    is_enabled: bool,
) {
    let mark = if is_checked { "[x]" } else { "[ ]" };

    let style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(mark, style),
        Span::raw(" "),
        Span::styled(label, style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
