//! Configuration handling for the TUI

use crate::service::SimulatedOutcome;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the simulated network delay
pub const SUBMIT_DELAY_ENV: &str = "INPUTFORM_SUBMIT_DELAY_MS";

/// Default simulated network delay
const DEFAULT_SUBMIT_DELAY_MS: u64 = 3000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Simulated network delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How simulated sign-in attempts resolve
    pub simulated_outcome: Option<SimulatedOutcome>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "example", "inputform")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("inputform.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Simulated network delay, honouring the environment override
    pub fn submit_delay(&self) -> Duration {
        self.resolve_submit_delay(std::env::var(SUBMIT_DELAY_ENV).ok().as_deref())
    }

    fn resolve_submit_delay(&self, env_value: Option<&str>) -> Duration {
        let from_env = env_value.and_then(|value| match value.trim().parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(err) => {
                tracing::warn!("Ignoring invalid {SUBMIT_DELAY_ENV}={value:?}: {err}");
                None
            }
        });
        let ms = from_env
            .or(self.submit_delay_ms)
            .unwrap_or(DEFAULT_SUBMIT_DELAY_MS);
        Duration::from_millis(ms)
    }

    pub fn outcome(&self) -> SimulatedOutcome {
        self.simulated_outcome.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.submit_delay_ms.is_none());
        assert!(config.simulated_outcome.is_none());
        assert_eq!(config.outcome(), SimulatedOutcome::Unavailable);
        assert_eq!(
            config.resolve_submit_delay(None),
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            submit_delay_ms: Some(500),
            simulated_outcome: Some(SimulatedOutcome::Success),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.submit_delay_ms, Some(500));
        assert_eq!(parsed.simulated_outcome, Some(SimulatedOutcome::Success));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.submit_delay_ms.is_none());
        assert_eq!(parsed.outcome(), SimulatedOutcome::Unavailable);
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"simulated_outcome": "success", "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.outcome(), SimulatedOutcome::Success);
    }

    #[test]
    fn test_file_delay_is_used() {
        let config = FormConfig {
            submit_delay_ms: Some(250),
            ..Default::default()
        };
        assert_eq!(config.resolve_submit_delay(None), Duration::from_millis(250));
    }

    #[test]
    fn test_env_delay_overrides_file() {
        let config = FormConfig {
            submit_delay_ms: Some(250),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_submit_delay(Some("10")),
            Duration::from_millis(10)
        );
    }

    #[test]
    fn test_invalid_env_delay_falls_back() {
        let config = FormConfig {
            submit_delay_ms: Some(250),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_submit_delay(Some("soon")),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_load_returns_ok_when_no_file() {
        // May read a real config file if one exists on this machine
        let result = FormConfig::load();
        assert!(result.is_ok());
    }
}
