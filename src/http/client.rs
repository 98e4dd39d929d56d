use anyhow::{Context, Result};
use log::warn;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;

use crate::http::retry::RetryPolicy;

/// HTTP client with built-in retry on transient upstream failures
pub struct RetryingClient {
    client: Client,
    policy: RetryPolicy,
}

impl RetryingClient {
    pub fn new(user_agent: &str, timeout_secs: u64, policy: RetryPolicy) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;

        Ok(Self { client, policy })
    }

    /// Issue a GET and parse the body as JSON, retrying 429/5xx responses
    /// up to the policy budget with a linearly growing delay. Transport
    /// errors and all other non-success statuses fail immediately.
    pub async fn get_json(&self, url: Url) -> Result<Value> {
        let mut attempts = 0u32;

        loop {
            let response = self.send_get_request(url.clone()).await?;
            let status = response.status();

            if status.is_success() {
                return response
                    .json()
                    .await
                    .context("Failed to parse response body as JSON");
            }

            if attempts < self.policy.max_retries && RetryPolicy::is_transient(status) {
                attempts += 1;
                warn!(
                    "Upstream returned {}, retrying ({}/{})",
                    status, attempts, self.policy.max_retries
                );
                sleep(self.policy.delay_for(attempts)).await;
                continue;
            }

            anyhow::bail!("HTTP {}", status.as_u16());
        }
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: Url) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send GET request")
    }
}
