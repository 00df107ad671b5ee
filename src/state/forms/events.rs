//! Outbound events from the form controller to its presentation

use super::field::Field;
use super::validator::ErrorKind;

/// Receiver of everything the form controller wants shown.
///
/// The controller never holds widgets; the host implements this trait and
/// decides how each event is rendered.
#[cfg_attr(test, mockall::automock)]
pub trait FormEvents {
    /// Show (`Some`) or hide (`None`) a field's error banner
    fn field_error_changed(&mut self, field: Field, error: Option<ErrorKind>);

    fn submit_enabled_changed(&mut self, enabled: bool);

    /// Toggle both text fields and the agreement checkbox
    fn inputs_enabled_changed(&mut self, enabled: bool);

    fn progress_visibility_changed(&mut self, visible: bool);

    fn keyboard_dismiss_requested(&mut self);

    fn outcome_failed(&mut self, message: &str);

    fn outcome_succeeded(&mut self, message: &str);
}
