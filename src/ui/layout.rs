//! Layout helpers and the status bar

use crate::app::{App, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// A rectangle of at most `width` x `height`, centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Key hints for the focused element
fn get_focus_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Email | Focus::Password => "Type to edit | Tab: next | Ctrl+S: sign in",
        Focus::Agreement => "Space: toggle | Tab: next",
        Focus::Submit => "Enter: sign in | Tab: next",
    }
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.controller.state();
    let mut spans = vec![
        Span::styled(
            format!(" {} ", state.label()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(" "),
        Span::styled(get_focus_hints(app.focus), Style::default().fg(Color::DarkGray)),
        Span::styled(
            " | Ctrl+R: recreate view | Esc: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if app.recreations > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("recreated {}x", app.recreations),
            Style::default().fg(Color::Blue),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 40, 10);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 30, 8);
        let rect = centered_rect(area, 40, 10);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_create_layout_reserves_status_line() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }
}
