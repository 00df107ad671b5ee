//! Login form state machine
//!
//! [`FormController`] owns the field values, per-field error flags, submit
//! gating and the single in-flight sign-in attempt. It talks to presentation
//! only through [`FormEvents`] and survives view recreation through
//! [`FormController::snapshot`] / [`FormController::restore_state`].

use super::events::FormEvents;
use super::field::{Field, FieldValue};
use super::form_state::{FormSnapshot, FormState};
use super::validator::{validate, ErrorKind};
use crate::service::{Credentials, LoginService, ServiceError};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Result of a finished sign-in attempt, delivered back to the UI loop
#[derive(Debug)]
pub struct Outcome {
    pub attempt: Uuid,
    pub result: Result<String, ServiceError>,
}

/// The single pending sign-in task
#[derive(Debug)]
struct PendingAttempt {
    id: Uuid,
    handle: JoinHandle<()>,
}

pub struct FormController<E: FormEvents> {
    email: FieldValue,
    password: FieldValue,
    email_error: Option<ErrorKind>,
    password_error: Option<ErrorKind>,
    agreement_checked: bool,
    state: FormState,
    /// Last value sent through `submit_enabled_changed`
    submit_enabled: bool,
    pending: Option<PendingAttempt>,
    events: E,
    service: Arc<dyn LoginService>,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
}

impl<E: FormEvents> FormController<E> {
    /// Create a controller in the `Initial` state.
    ///
    /// Finished attempts are sent to `outcome_tx`; the host feeds them back
    /// through [`FormController::handle_outcome`].
    pub fn new(
        events: E,
        service: Arc<dyn LoginService>,
        outcome_tx: mpsc::UnboundedSender<Outcome>,
    ) -> Self {
        Self {
            email: FieldValue::default(),
            password: FieldValue::default(),
            email_error: None,
            password_error: None,
            agreement_checked: false,
            state: FormState::Initial,
            submit_enabled: false,
            pending: None,
            events,
            service,
            outcome_tx,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Email => self.email.as_str(),
            Field::Password => self.password.as_str(),
        }
    }

    pub fn field_error(&self, field: Field) -> Option<ErrorKind> {
        match field {
            Field::Email => self.email_error,
            Field::Password => self.password_error,
        }
    }

    pub fn agreement_checked(&self) -> bool {
        self.agreement_checked
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.agreement_checked && self.state != FormState::Submitting
    }

    pub fn has_pending_attempt(&self) -> bool {
        self.pending.is_some()
    }

    /// Store new text for a field and hide that field's error.
    ///
    /// Never re-validates and never changes the form state.
    pub fn on_field_changed(&mut self, field: Field, text: impl Into<String>) {
        if self.state == FormState::Submitting {
            tracing::warn!(?field, "ignoring field edit while submitting");
            return;
        }

        match field {
            Field::Email => self.email.set(text),
            Field::Password => self.password.set(text),
        }
        self.set_field_error(field, None);
    }

    pub fn on_agreement_toggled(&mut self, checked: bool) {
        tracing::debug!(checked, "agreement toggled");
        self.agreement_checked = checked;
        self.sync_submit_enabled();
    }

    /// Validate both fields and, if they pass, start a sign-in attempt.
    ///
    /// Invalid input is reported through field errors and the `InputError`
    /// state; this never fails.
    pub fn on_submit(&mut self) {
        if !self.is_submit_enabled() {
            tracing::warn!(state = ?self.state, agreement = self.agreement_checked, "submit ignored");
            return;
        }

        if !self.validate_fields() {
            self.transition(FormState::InputError);
            return;
        }

        self.transition(FormState::Submitting);
        self.events.inputs_enabled_changed(false);
        self.events.progress_visibility_changed(true);
        self.sync_submit_enabled();
        self.events.keyboard_dismiss_requested();
        self.start_attempt();
    }

    /// Apply a finished attempt. Results from superseded attempts are dropped.
    pub fn handle_outcome(&mut self, outcome: Outcome) {
        let is_current = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.id == outcome.attempt);
        if !is_current || self.state != FormState::Submitting {
            tracing::warn!(attempt = %outcome.attempt, "dropping stale sign-in outcome");
            return;
        }
        self.pending = None;

        match outcome.result {
            Ok(message) => {
                tracing::info!(attempt = %outcome.attempt, "sign-in succeeded");
                self.transition(FormState::Succeeded);
                self.finish_attempt();
                self.events.outcome_succeeded(&message);
            }
            Err(err) => {
                tracing::info!(attempt = %outcome.attempt, error = %err, "sign-in failed");
                self.transition(FormState::Failed);
                self.finish_attempt();
                self.events.outcome_failed(&err.to_string());
            }
        }
    }

    /// Capture everything needed to rebuild this form after a teardown
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            state: self.state,
            email: self.email.clone(),
            password: self.password.clone(),
            agreement_checked: self.agreement_checked,
            saved_at: Utc::now(),
        }
    }

    /// Rebuild from a snapshot taken by a previous controller instance.
    ///
    /// A snapshot taken mid-submission resumes as `Failed`; failure is shown
    /// again, and `InputError` re-validates the restored values.
    pub fn restore_state(&mut self, snapshot: FormSnapshot) {
        self.cancel_pending();

        let restored = snapshot.state.restored();
        tracing::debug!(saved = ?snapshot.state, restored = ?restored, "restoring form state");

        self.email = snapshot.email;
        self.password = snapshot.password;
        self.agreement_checked = snapshot.agreement_checked;
        self.state = restored;

        self.events.inputs_enabled_changed(true);
        self.events.progress_visibility_changed(false);
        self.sync_submit_enabled();

        match restored {
            FormState::InputError => {
                if self.validate_fields() {
                    self.transition(FormState::Initial);
                }
            }
            FormState::Failed => {
                self.events
                    .outcome_failed(&ServiceError::Unavailable.to_string());
            }
            FormState::Initial | FormState::Succeeded | FormState::Submitting => {
                for field in Field::ALL {
                    self.set_field_error(field, None);
                }
            }
        }
    }

    /// Cancel any in-flight attempt and hand back the final snapshot
    pub fn teardown(mut self) -> FormSnapshot {
        let snapshot = self.snapshot();
        self.cancel_pending();
        snapshot
    }

    /// Validate both fields, publishing each field's error. Returns true if both pass.
    fn validate_fields(&mut self) -> bool {
        let mut all_valid = true;
        for field in Field::ALL {
            let result = validate(field, self.field_value(field));
            self.set_field_error(field, result.error_kind);
            all_valid &= result.is_valid;
        }
        all_valid
    }

    fn set_field_error(&mut self, field: Field, error: Option<ErrorKind>) {
        match field {
            Field::Email => self.email_error = error,
            Field::Password => self.password_error = error,
        }
        self.events.field_error_changed(field, error);
    }

    fn sync_submit_enabled(&mut self) {
        let enabled = self.is_submit_enabled();
        if enabled != self.submit_enabled {
            self.submit_enabled = enabled;
            self.events.submit_enabled_changed(enabled);
        }
    }

    fn transition(&mut self, next: FormState) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "form state transition");
        }
        self.state = next;
    }

    /// Re-open the form after an attempt resolves
    fn finish_attempt(&mut self) {
        self.events.progress_visibility_changed(false);
        self.events.inputs_enabled_changed(true);
        self.sync_submit_enabled();
    }

    fn start_attempt(&mut self) {
        let id = Uuid::new_v4();
        let credentials = Credentials {
            email: self.email.as_str().to_string(),
            password: self.password.as_str().to_string(),
        };
        let service = Arc::clone(&self.service);
        let tx = self.outcome_tx.clone();

        tracing::info!(attempt = %id, "starting sign-in attempt");
        let handle = tokio::spawn(async move {
            let result = service.login(credentials).await;
            // The receiver is gone once the host has shut down
            let _ = tx.send(Outcome {
                attempt: id,
                result,
            });
        });

        self.pending = Some(PendingAttempt { id, handle });
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(attempt = %pending.id, "cancelling pending sign-in attempt");
            pending.handle.abort();
        }
    }
}

impl<E: FormEvents> Drop for FormController<E> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
