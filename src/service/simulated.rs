//! Simulated login backend
//!
//! Waits a fixed delay and then resolves to a configured outcome. The
//! reference behaviour is that the backing service is never reachable.

use super::traits::{Credentials, LoginService, ServiceError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How simulated sign-in attempts resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulatedOutcome {
    #[default]
    Unavailable,
    Success,
}

/// Login service that never touches the network
#[derive(Debug, Clone)]
pub struct SimulatedService {
    delay: Duration,
    outcome: SimulatedOutcome,
}

impl SimulatedService {
    pub fn new(delay: Duration, outcome: SimulatedOutcome) -> Self {
        Self { delay, outcome }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl LoginService for SimulatedService {
    async fn login(&self, credentials: Credentials) -> Result<String, ServiceError> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "simulating login call");
        tokio::time::sleep(self.delay).await;

        match self.outcome {
            SimulatedOutcome::Unavailable => Err(ServiceError::Unavailable),
            SimulatedOutcome::Success => Ok(format!("Welcome, {}", credentials.email)),
        }
    }
}
