//! Application state module

pub mod forms;
mod login_screen;
mod progress_state;

pub use login_screen::*;
pub use progress_state::*;
