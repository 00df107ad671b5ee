//! Screen model for the login form
//!
//! Receives [`FormEvents`] from the controller and keeps exactly what the
//! renderer needs: error banners, enabled flags, progress, dialog and toast.

use super::forms::{ErrorKind, Field, FormEvents};
use super::progress_state::ProgressState;
use std::time::{Duration, Instant};

/// A transient message at the bottom of the screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    /// How long a toast stays on screen
    pub const DURATION: Duration = Duration::from_secs(2);

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::DURATION
    }
}

#[derive(Debug)]
pub struct LoginScreen {
    pub email_error: Option<ErrorKind>,
    pub password_error: Option<ErrorKind>,
    pub submit_enabled: bool,
    pub inputs_enabled: bool,
    /// Present while the progress indicator is visible
    pub progress: Option<ProgressState>,
    /// Set by the controller, consumed by the host
    keyboard_dismiss_pending: bool,
    /// Modal message (dismissed by the user)
    pub dialog: Option<String>,
    pub toast: Option<Toast>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self {
            email_error: None,
            password_error: None,
            submit_enabled: false,
            inputs_enabled: true,
            progress: None,
            keyboard_dismiss_pending: false,
            dialog: None,
            toast: None,
        }
    }
}

impl LoginScreen {
    pub fn error_for(&self, field: Field) -> Option<ErrorKind> {
        match field {
            Field::Email => self.email_error,
            Field::Password => self.password_error,
        }
    }

    pub fn is_progress_visible(&self) -> bool {
        self.progress.is_some()
    }

    /// Returns true once per keyboard dismissal request
    pub fn take_keyboard_dismiss(&mut self) -> bool {
        std::mem::take(&mut self.keyboard_dismiss_pending)
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Advance animations and drop expired transient messages
    pub fn tick(&mut self) {
        if let Some(ref mut progress) = self.progress {
            progress.update();
        }
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

impl FormEvents for LoginScreen {
    fn field_error_changed(&mut self, field: Field, error: Option<ErrorKind>) {
        match field {
            Field::Email => self.email_error = error,
            Field::Password => self.password_error = error,
        }
    }

    fn submit_enabled_changed(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn inputs_enabled_changed(&mut self, enabled: bool) {
        self.inputs_enabled = enabled;
    }

    fn progress_visibility_changed(&mut self, visible: bool) {
        match (visible, self.progress.is_some()) {
            (true, false) => self.progress = Some(ProgressState::new()),
            (false, true) => self.progress = None,
            _ => {}
        }
    }

    fn keyboard_dismiss_requested(&mut self) {
        self.keyboard_dismiss_pending = true;
    }

    fn outcome_failed(&mut self, message: &str) {
        self.dialog = Some(message.to_string());
    }

    fn outcome_succeeded(&mut self, message: &str) {
        self.toast = Some(Toast::new(message));
    }
}
