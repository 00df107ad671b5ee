//! Form field value objects

use serde::{Deserialize, Serialize};

/// The two user-editable inputs of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Email, Field::Password];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    /// Whether the rendered value must be masked
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }
}

/// Raw user input for one field
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(String);

impl FieldValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace the whole value (text widgets report full contents per edit)
    pub fn set(&mut self, value: impl Into<String>) {
        self.0 = value.into();
    }

    /// Number of characters, used for masking
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

// Password values end up in debug logs otherwise
impl std::fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FieldValue({} chars)", self.char_count())
    }
}
