//! Form lifecycle state and its persisted snapshot

use super::field::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle stage of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormState {
    #[default]
    Initial,
    InputError,
    Submitting,
    Succeeded,
    Failed,
}

impl FormState {
    /// State to resume in after the hosting view was recreated.
    ///
    /// An in-flight submission cannot survive a teardown, so it resumes as failed.
    pub fn restored(self) -> Self {
        match self {
            Self::Submitting => Self::Failed,
            other => other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Initial => "Ready",
            Self::InputError => "Check your input",
            Self::Submitting => "Signing in",
            Self::Succeeded => "Signed in",
            Self::Failed => "Sign-in failed",
        }
    }
}

/// Errors while moving a snapshot across a view teardown
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to encode form snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode form snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Everything the host keeps across a view teardown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub state: FormState,
    pub email: FieldValue,
    pub password: FieldValue,
    pub agreement_checked: bool,
    pub saved_at: DateTime<Utc>,
}

impl FormSnapshot {
    /// Encode into an opaque bundle string held by the host
    pub fn to_bundle(&self) -> Result<String, BundleError> {
        serde_json::to_string(self).map_err(BundleError::Encode)
    }

    /// Decode a bundle produced by [`FormSnapshot::to_bundle`]
    pub fn from_bundle(bundle: &str) -> Result<Self, BundleError> {
        serde_json::from_str(bundle).map_err(BundleError::Decode)
    }
}
