//! Indeterminate progress bar

use crate::state::ProgressState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split a bar of `width` cells into (before, segment, after) lengths
fn segment_layout(width: u16, position: f32) -> (u16, u16, u16) {
    let segment = (width / 4).max(1).min(width);
    let travel = width - segment;
    let before = (position.clamp(0.0, 1.0) * travel as f32).round() as u16;
    (before, segment, travel - before)
}

pub fn render_progress(frame: &mut Frame, area: Rect, progress: &ProgressState) {
    let (before, segment, after) = segment_layout(area.width, progress.position);
    let track = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled("─".repeat(before as usize), track),
        Span::styled("━".repeat(segment as usize), Style::default().fg(Color::Cyan)),
        Span::styled("─".repeat(after as usize), track),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_starts_at_left() {
        assert_eq!(segment_layout(40, 0.0), (0, 10, 30));
    }

    #[test]
    fn test_segment_ends_at_right() {
        assert_eq!(segment_layout(40, 1.0), (30, 10, 0));
    }

    #[test]
    fn test_layout_always_fills_width() {
        for width in [1u16, 3, 17, 48] {
            for step in 0..=10 {
                let (before, segment, after) = segment_layout(width, step as f32 / 10.0);
                assert_eq!(before + segment + after, width);
            }
        }
    }

    #[test]
    fn test_zero_width_is_empty() {
        assert_eq!(segment_layout(0, 0.5), (0, 0, 0));
    }
}
