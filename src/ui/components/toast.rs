//! Transient toast message

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a one-line toast near the bottom of `area`
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let height = 3u16.min(area.height);
    let toast_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height - height,
        width,
        height,
    };

    frame.render_widget(Clear, toast_area);
    let toast = Paragraph::new(format!(" {message} ")).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(toast, toast_area);
}
