use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use anyhow::{Context, Result};
use log::warn;
use reqwest::Url;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::models::ErrorEnvelope;
use crate::config::settings::UpstreamSettings;
use crate::config::{AppConfig, API_KEY_ENV};

/// Upstream methods the gateway is willing to forward
const ALLOWED_METHODS: [&str; 3] = ["get_livescore", "get_fixtures", "get_H2H"];

pub struct AppState {
    pub config: AppConfig,
    pub http: reqwest::Client,
    /// Server-held upstream credential; absence is a deploy-time
    /// misconfiguration surfaced per request
    pub api_key: Option<String>,
}

/// The single gateway route. Validates the method against the
/// allow-list, forwards everything else plus the server credential and
/// the fixed timezone upstream, and relays status and body verbatim.
pub async fn proxy_tennis(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(api_key) = state.api_key.as_deref() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Missing {API_KEY_ENV} on server"),
        );
    };

    let method = params.get("method").map(String::as_str).unwrap_or("");
    if !ALLOWED_METHODS.contains(&method) {
        return error_response(StatusCode::BAD_REQUEST, "Unsupported method".to_string());
    }

    let url = match build_upstream_url(&state.config.upstream, api_key, method, &params) {
        Ok(url) => url,
        Err(e) => {
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    match relay(&state.http, url).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Upstream relay failed: {e:#}");
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

/// Credential and timezone first, passthrough parameters next,
/// `method` re-added last
fn build_upstream_url(
    upstream: &UpstreamSettings,
    api_key: &str,
    method: &str,
    params: &HashMap<String, String>,
) -> Result<Url> {
    let mut url = Url::parse(&upstream.base_url).context("Invalid upstream base URL")?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("APIkey", api_key);
        query.append_pair("timezone", &upstream.timezone);
        for (key, value) in params {
            if key == "method" {
                continue;
            }
            query.append_pair(key, value);
        }
        query.append_pair("method", method);
    }

    Ok(url)
}

/// One outbound request, no retries at this layer; the caller owns
/// retry policy
async fn relay(client: &reqwest::Client, url: Url) -> Result<Response> {
    let upstream = client
        .get(url)
        .send()
        .await
        .context("Failed to reach upstream")?;

    let status = StatusCode::from_u16(upstream.status().as_u16())
        .context("Upstream returned an invalid status code")?;
    let body = upstream
        .bytes()
        .await
        .context("Failed to read upstream body")?;

    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorEnvelope::new(message))).into_response()
}
