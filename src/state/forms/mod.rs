//! Form domain layer
//!
//! Validation rules, the login form state machine and the event seam it
//! uses to reach presentation.

mod controller;
mod events;
mod field;
mod form_state;
mod validator;

pub use controller::{FormController, Outcome};
pub use events::FormEvents;
pub use field::Field;
pub use form_state::{FormSnapshot, FormState};
pub use validator::ErrorKind;
