//! Shell configuration loaded from environment variables.

use mentorconnect_core::{CoreError, NumberingPlan};

use crate::submit::REGISTRATION_DELAY_MS;

/// Shell configuration with development defaults.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Simulated submission latency in milliseconds.
    pub submit_delay_ms: u64,
    /// Default toast duration in milliseconds.
    pub notification_duration_ms: i64,
    /// Seconds between update-check toasts.
    pub refresh_interval_secs: u64,
    /// Mobile numbering plan for the rule engine.
    pub numbering_plan: NumberingPlan,
}

impl ShellConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default |
    /// |----------------------------|---------|
    /// | `SUBMIT_DELAY_MS`          | `1500`  |
    /// | `NOTIFICATION_DURATION_MS` | `3000`  |
    /// | `REFRESH_INTERVAL_SECS`    | `30`    |
    /// | `MOBILE_DIGITS`            | `10`    |
    /// | `MOBILE_LEAD_MIN`          | `6`     |
    /// | `MOBILE_LEAD_MAX`          | `9`     |
    pub fn from_env() -> Result<Self, CoreError> {
        let submit_delay_ms = env_parsed("SUBMIT_DELAY_MS", REGISTRATION_DELAY_MS)?;
        let notification_duration_ms = env_parsed(
            "NOTIFICATION_DURATION_MS",
            mentorconnect_events::notification::DEFAULT_DURATION_MS,
        )?;
        let refresh_interval_secs = env_parsed("REFRESH_INTERVAL_SECS", 30u64)?;

        let mobile_digits = env_parsed("MOBILE_DIGITS", 10usize)?;
        let lead_min = env_parsed("MOBILE_LEAD_MIN", 6u8)?;
        let lead_max = env_parsed("MOBILE_LEAD_MAX", 9u8)?;
        let numbering_plan = NumberingPlan::new(mobile_digits, lead_min, lead_max)?;

        Ok(Self {
            submit_delay_ms,
            notification_duration_ms,
            refresh_interval_secs,
            numbering_plan,
        })
    }
}

/// Read and parse an env var, falling back to `default` when unset.
fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, CoreError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| CoreError::Validation(format!("{name} must be a valid number, got '{raw}'"))),
        Err(_) => Ok(default),
    }
}
