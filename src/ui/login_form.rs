//! Login form rendering

use super::components::{render_button, render_checkbox, render_progress, BUTTON_HEIGHT};
use super::forms::{draw_field, draw_field_error};
use crate::app::{App, Focus};
use crate::state::forms::{ErrorKind, Field};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub const FORM_WIDTH: u16 = 56;
pub const FORM_HEIGHT: u16 = 18;

const AGREEMENT_LABEL: &str = "I agree to the terms of service";
const SUBMIT_LABEL: &str = "Sign in";

/// User-facing text for a validation error
pub fn error_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::InvalidEmail => "Enter a valid email address",
        ErrorKind::InvalidPassword => "8+ chars with a digit, a-z, A-Z and a symbol",
    }
}

/// Draw the form panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let screen = app.screen();
    let controller = &app.controller;

    let border_color = if screen.inputs_enabled {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Sign in ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(3),             // Password
            Constraint::Length(1),             // Password error
            Constraint::Length(1),             // Agreement
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Progress
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    for (field, field_area, error_area) in [
        (Field::Email, chunks[0], chunks[1]),
        (Field::Password, chunks[2], chunks[3]),
    ] {
        let error = screen.error_for(field);
        draw_field(
            frame,
            field_area,
            field,
            controller.field_value(field),
            app.focus.field() == Some(field),
            screen.inputs_enabled,
            error.is_some(),
        );
        draw_field_error(frame, error_area, error.map(error_message));
    }

    render_checkbox(
        frame,
        chunks[4],
        AGREEMENT_LABEL,
        controller.agreement_checked(),
        app.focus == Focus::Agreement,
        screen.inputs_enabled,
    );

    let button_width = (SUBMIT_LABEL.len() as u16 + 8).min(chunks[6].width);
    let button_area = Rect {
        x: chunks[6].x + (chunks[6].width - button_width) / 2,
        width: button_width,
        ..chunks[6]
    };
    render_button(
        frame,
        button_area,
        SUBMIT_LABEL,
        app.focus == Focus::Submit,
        screen.submit_enabled,
    );

    if let Some(ref progress) = screen.progress {
        render_progress(frame, chunks[7], progress);
    }
}
