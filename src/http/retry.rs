use std::time::Duration;

use reqwest::StatusCode;

use crate::config::settings::RetrySettings;

/// Bounded retry schedule for transient upstream failures
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    pub fn from_settings(settings: &RetrySettings) -> Self {
        Self::new(
            settings.max_retries,
            Duration::from_millis(settings.base_delay_ms),
        )
    }

    /// Only rate limiting and server errors are worth retrying
    pub fn is_transient(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
    }

    /// Linear backoff: retry n (1-based) waits n * base_delay
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}
