//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod login_form;

use crate::app::App;
use components::{render_error_dialog, render_toast};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (content_area, status_area) = layout::create_layout(area);

    let form_area = layout::centered_rect(
        content_area,
        login_form::FORM_WIDTH,
        login_form::FORM_HEIGHT,
    );
    login_form::draw(frame, form_area, app);

    layout::draw_status_bar(frame, status_area, app);

    let screen = app.screen();
    if let Some(ref toast) = screen.toast {
        render_toast(frame, content_area, &toast.message);
    }
    // Dialog goes last so it covers everything else
    if let Some(ref message) = screen.dialog {
        render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{SimulatedOutcome, SimulatedService};
    use crate::state::forms::{ErrorKind, Field, FormEvents};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> App {
        App::with_service(Arc::new(SimulatedService::new(
            Duration::from_millis(3000),
            SimulatedOutcome::Unavailable,
        )))
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[tokio::test]
    async fn test_initial_screen_shows_form() {
        let text = render(&app());
        assert!(text.contains("Sign in"));
        assert!(text.contains("Email"));
        assert!(text.contains("Password"));
        assert!(text.contains("[ ] I agree to the terms"));
    }

    #[tokio::test]
    async fn test_password_is_masked() {
        let mut app = app();
        app.controller.on_field_changed(Field::Password, "Abcdef1!");
        let text = render(&app);
        assert!(!text.contains("Abcdef1!"));
        assert!(text.contains("••••••••"));
    }

    #[tokio::test]
    async fn test_errors_are_rendered_after_invalid_submit() {
        let mut app = app();
        app.controller.on_field_changed(Field::Email, "bad");
        app.controller.on_agreement_toggled(true);
        app.controller.on_submit();

        let text = render(&app);
        assert!(text.contains("[x] I agree to the terms"));
        assert!(text.contains(login_form::error_message(ErrorKind::InvalidEmail)));
    }

    #[tokio::test]
    async fn test_dialog_is_rendered() {
        let mut app = app();
        app.controller
            .events_mut()
            .outcome_failed("service unavailable");

        let text = render(&app);
        assert!(text.contains("service unavailable"));
        assert!(text.contains("to dismiss"));

        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert!(!render(&app).contains("to dismiss"));
    }
}
