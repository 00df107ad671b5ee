//! Reusable UI components

mod button;
mod checkbox;
mod dialog;
mod progress;
mod toast;

pub use button::{render_button, BUTTON_HEIGHT};
pub use checkbox::render_checkbox;
pub use dialog::render_error_dialog;
pub use progress::render_progress;
pub use toast::render_toast;
