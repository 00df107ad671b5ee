//! Application state and core logic

use crate::config::FormConfig;
use crate::service::{LoginService, SimulatedService};
use crate::state::forms::{Field, FormController, FormSnapshot, Outcome};
use crate::state::LoginScreen;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Focusable elements of the login form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    Agreement,
    Submit,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Email, Focus::Password, Focus::Agreement, Focus::Submit];

    fn index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| focus == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[index - 1]
        }
    }

    /// The text field behind this focus, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Email => Some(Field::Email),
            Self::Password => Some(Field::Password),
            Self::Agreement | Self::Submit => None,
        }
    }
}

/// Main application struct
pub struct App {
    /// The login form and its screen model
    pub controller: FormController<LoginScreen>,
    /// Finished sign-in attempts for the current controller
    outcome_rx: mpsc::UnboundedReceiver<Outcome>,
    service: Arc<dyn LoginService>,
    /// Currently focused form element
    pub focus: Focus,
    /// How many times the view has been recreated
    pub recreations: u32,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig) -> Self {
        let delay = config.submit_delay();
        tracing::info!(
            delay_ms = delay.as_millis() as u64,
            outcome = ?config.outcome(),
            "starting login form"
        );
        Self::with_service(Arc::new(SimulatedService::new(delay, config.outcome())))
    }

    /// Create an App backed by the given login service
    pub fn with_service(service: Arc<dyn LoginService>) -> Self {
        let (controller, outcome_rx) = Self::build_controller(&service);
        Self {
            controller,
            outcome_rx,
            service,
            focus: Focus::default(),
            recreations: 0,
            quit: false,
        }
    }

    fn build_controller(
        service: &Arc<dyn LoginService>,
    ) -> (FormController<LoginScreen>, mpsc::UnboundedReceiver<Outcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = FormController::new(LoginScreen::default(), Arc::clone(service), tx);
        (controller, rx)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn screen(&self) -> &LoginScreen {
        self.controller.events()
    }

    /// Advance animations and expire transient messages
    pub fn tick(&mut self) {
        self.controller.events_mut().tick();
    }

    /// Feed finished sign-in attempts back into the form.
    /// Returns the number of outcomes applied.
    pub fn poll_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.controller.handle_outcome(outcome);
            applied += 1;
        }
        applied
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.request_quit();
                return Ok(());
            }
            KeyCode::Char('r') if ctrl => return self.recreate(),
            _ => {}
        }

        // A visible dialog is modal
        if self.screen().dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.controller.events_mut().dismiss_dialog();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Esc => self.request_quit(),
            KeyCode::Char(' ') if self.focus == Focus::Agreement => self.toggle_agreement(),
            KeyCode::Char(c) => {
                if let Some(field) = self.focus.field() {
                    self.edit_field(field, |text| text.push(c));
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focus.field() {
                    self.edit_field(field, |text| {
                        text.pop();
                    });
                }
            }
            KeyCode::Enter => match self.focus {
                Focus::Email | Focus::Password => self.focus = self.focus.next(),
                Focus::Agreement => self.toggle_agreement(),
                Focus::Submit => self.submit(),
            },
            _ => {}
        }

        self.apply_keyboard_dismiss();
        Ok(())
    }

    fn edit_field(&mut self, field: Field, edit: impl FnOnce(&mut String)) {
        if !self.screen().inputs_enabled {
            return;
        }
        let mut text = self.controller.field_value(field).to_string();
        edit(&mut text);
        self.controller.on_field_changed(field, text);
    }

    fn toggle_agreement(&mut self) {
        if !self.screen().inputs_enabled {
            return;
        }
        let checked = !self.controller.agreement_checked();
        self.controller.on_agreement_toggled(checked);
    }

    fn submit(&mut self) {
        if self.screen().submit_enabled {
            self.controller.on_submit();
        }
    }

    /// The terminal has no soft keyboard; leaving the text fields is the equivalent
    fn apply_keyboard_dismiss(&mut self) {
        if self.controller.events_mut().take_keyboard_dismiss() && self.focus.field().is_some() {
            self.focus = Focus::Submit;
        }
    }

    /// Tear the form view down and rebuild it from a saved bundle, as a
    /// device rotation would.
    pub fn recreate(&mut self) -> Result<()> {
        // Teardown aborts the old pending attempt, and the old receiver goes
        // with it so nothing stale can reach the new form.
        let (controller, outcome_rx) = Self::build_controller(&self.service);
        let previous = std::mem::replace(&mut self.controller, controller);
        self.outcome_rx = outcome_rx;
        let bundle = previous.teardown().to_bundle()?;

        let snapshot = FormSnapshot::from_bundle(&bundle)?;
        self.controller.restore_state(snapshot);
        self.recreations += 1;
        tracing::info!(
            recreations = self.recreations,
            state = ?self.controller.state(),
            "view recreated"
        );
        Ok(())
    }
}
