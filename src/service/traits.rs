//! Trait abstraction for the login call to enable mocking in tests

use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a login call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("service unavailable")]
    Unavailable,
}

/// What the form sends to the service
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A sign-in backend. Resolves to a user-facing welcome message on success.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    async fn login(&self, credentials: Credentials) -> Result<String, ServiceError>;
}
