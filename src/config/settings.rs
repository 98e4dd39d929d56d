/// Environment variable holding the upstream API key.
/// Required by the gateway; selects direct mode on the client.
pub const API_KEY_ENV: &str = "TENNIS_API_KEY";

/// Environment variable holding a deployed gateway base URL.
/// When set, the client routes every call through the gateway instead
/// of holding a credential itself.
pub const PROXY_ENV: &str = "TENNIS_API_PROXY";

#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub timezone: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.api-tennis.com/tennis/".to_string(),
            timezone: "Australia/Sydney".to_string(),
            user_agent: "TennisLivescore/1.0",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RetrySettings {
    /// Extra attempts after the first request, spent on 429/5xx only
    pub max_retries: u32,
    /// Backoff for retry n (1-based) is n * base_delay_ms
    pub base_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PollingSettings {
    pub live_interval_secs: u64,
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            live_interval_secs: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub upstream: UpstreamSettings,
    pub retry: RetrySettings,
    pub polling: PollingSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            upstream: UpstreamSettings::default(),
            retry: RetrySettings::default(),
            polling: PollingSettings::default(),
        }
    }
}
