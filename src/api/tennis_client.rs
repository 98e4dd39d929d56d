use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use reqwest::Url;
use serde_json::Value;
use std::env;

use crate::api::parsers::{
    build_momentum, envelope_error, envelope_success, parse_h2h, parse_match_row,
    parse_ranking_rows,
};
use crate::cache::event_types::{event_type_map, EventTypeCache};
use crate::config::settings::UpstreamSettings;
use crate::config::{AppConfig, API_KEY_ENV, PROXY_ENV};
use crate::domain::{H2HItem, LiveStats, MatchDetails, MatchSummary, RankingItem, Tour};
use crate::http::{RetryPolicy, RetryingClient};

// Fixtures are queried with a wide-open range so the target match is
// found no matter when it was played
const DATE_START: &str = "2000-01-01";
const DATE_STOP: &str = "2100-01-01";

/// How requests reach the upstream feed
#[derive(Debug, Clone)]
pub enum Transport {
    /// Through a deployed gateway; the credential stays server-side
    Proxy { base_url: String },
    /// Straight to the feed with a locally held key (development only)
    Direct {
        base_url: String,
        api_key: String,
        timezone: String,
    },
}

impl Transport {
    /// Proxy mode when TENNIS_API_PROXY is set, direct mode when
    /// TENNIS_API_KEY is set, otherwise a configuration error
    pub fn from_env(upstream: &UpstreamSettings) -> Result<Self> {
        if let Some(base_url) = non_empty_env(PROXY_ENV) {
            return Ok(Transport::Proxy { base_url });
        }
        if let Some(api_key) = non_empty_env(API_KEY_ENV) {
            return Ok(Transport::Direct {
                base_url: upstream.base_url.clone(),
                api_key,
                timezone: upstream.timezone.clone(),
            });
        }
        anyhow::bail!("Missing {API_KEY_ENV} or {PROXY_ENV}")
    }

    fn build_url(&self, method: &str, params: &[(&str, &str)]) -> Result<Url> {
        let base = match self {
            Transport::Proxy { base_url } => base_url,
            Transport::Direct { base_url, .. } => base_url,
        };
        let mut url = Url::parse(base).with_context(|| format!("Invalid base URL: {base}"))?;

        {
            let mut query = url.query_pairs_mut();
            if let Transport::Direct {
                api_key, timezone, ..
            } = self
            {
                query.append_pair("APIkey", api_key);
                query.append_pair("timezone", timezone);
            }
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query.append_pair("method", method);
        }

        Ok(url)
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Typed client for the tennis feed. Every endpoint routes through
/// `call`, which owns transport selection, retries and envelope checks.
pub struct TennisClient {
    http: RetryingClient,
    transport: Transport,
    event_types: EventTypeCache,
}

impl TennisClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let transport = Transport::from_env(&config.upstream)?;
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: &AppConfig, transport: Transport) -> Result<Self> {
        let http = RetryingClient::new(
            config.upstream.user_agent,
            config.upstream.timeout_secs,
            RetryPolicy::from_settings(&config.retry),
        )?;

        Ok(Self {
            http,
            transport,
            event_types: EventTypeCache::new(),
        })
    }

    /// Fetch the current live match list
    pub async fn fetch_live_matches(&self) -> Result<Vec<MatchSummary>> {
        let rows = self.call_rows("get_livescore", &[]).await?;
        Ok(rows.iter().map(parse_match_row).collect())
    }

    /// Fetch one match's detail view: summary, reconstructed momentum
    /// stats, and the head-to-head history of its two players
    pub async fn fetch_match_details(&self, match_key: &str) -> Result<MatchDetails> {
        let rows = self
            .call_rows(
                "get_fixtures",
                &[
                    ("match_key", match_key),
                    ("date_start", DATE_START),
                    ("date_stop", DATE_STOP),
                ],
            )
            .await?;
        let row = rows
            .first()
            .with_context(|| format!("No fixture found for match {match_key}"))?;

        let summary = parse_match_row(row);

        let start_ms = Utc::now().timestamp_millis() - 60_000;
        let pointbypoint = row.get("pointbypoint").cloned().unwrap_or(Value::Null);
        let trace = build_momentum(&pointbypoint, start_ms);
        let stats = LiveStats::from_momentum(trace.samples, trace.p1_points, trace.p2_points);

        let h2h = self
            .fetch_h2h(&summary.player1.key, &summary.player2.key)
            .await?;

        Ok(MatchDetails {
            summary,
            stats,
            h2h,
        })
    }

    /// Fetch the head-to-head history between two players
    pub async fn fetch_h2h(
        &self,
        first_player_key: &str,
        second_player_key: &str,
    ) -> Result<Vec<H2HItem>> {
        let result = self
            .call(
                "get_H2H",
                &[
                    ("first_player_key", first_player_key),
                    ("second_player_key", second_player_key),
                ],
            )
            .await?;
        Ok(parse_h2h(&result))
    }

    /// Fetch world rankings for a tour, normalized and sorted by rank.
    /// The discipline is accepted for forward compatibility but the
    /// standings endpoint does not yet distinguish disciplines.
    pub async fn fetch_rankings(&self, tour: Tour, discipline: &str) -> Result<Vec<RankingItem>> {
        debug!("Fetching {} {} rankings", tour.as_str(), discipline);

        let rows = self
            .call_rows("get_standings", &[("event_type", tour.as_str())])
            .await?;
        Ok(parse_ranking_rows(&rows))
    }

    /// Fetch a player's profile rows, unmodified
    pub async fn fetch_player_profile(&self, player_key: &str) -> Result<Vec<Value>> {
        self.call_rows("get_players", &[("player_key", player_key)])
            .await
    }

    /// Resolve an event type label (e.g. "Atp Singles") to its upstream
    /// numeric key, fetching and memoizing the full map on first use
    pub async fn event_type_key(&self, label: &str) -> Result<Option<i64>> {
        if let Some(key) = self.event_types.lookup(label).await {
            return Ok(Some(key));
        }
        if !self.event_types.is_populated().await {
            let rows = self.call_rows("get_events", &[]).await?;
            self.event_types.store(event_type_map(&rows)).await;
        }
        Ok(self.event_types.lookup(label).await)
    }

    /// Discard the memoized event type map and refetch it
    pub async fn refresh_event_types(&self) -> Result<()> {
        let rows = self.call_rows("get_events", &[]).await?;
        info!("Refreshed event type map ({} entries)", rows.len());
        self.event_types.replace(event_type_map(&rows)).await;
        Ok(())
    }

    // --- Call Plumbing ---

    /// Single choke point: build the URL for the active transport,
    /// fetch with retries, verify the `{success, result}` envelope and
    /// hand back the `result` payload. A falsy `success` is a semantic
    /// upstream error and is never retried.
    async fn call(&self, method: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = self.transport.build_url(method, params)?;
        let body = self
            .http
            .get_json(url)
            .await
            .with_context(|| format!("Request for {method} failed"))?;

        if !envelope_success(&body) {
            let message = envelope_error(&body).unwrap_or("Upstream returned error");
            anyhow::bail!("{message}");
        }

        Ok(body.get("result").cloned().unwrap_or(Value::Null))
    }

    async fn call_rows(&self, method: &str, params: &[(&str, &str)]) -> Result<Vec<Value>> {
        let result = self.call(method, params).await?;
        match result {
            Value::Array(rows) => Ok(rows),
            Value::Null => Ok(Vec::new()),
            other => Ok(vec![other]),
        }
    }
}
