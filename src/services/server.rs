use anyhow::{Context, Result};
use axum::http::{header, Method};
use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::{AppConfig, API_KEY_ENV};

/// Runs the proxy gateway
pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            warn!("{API_KEY_ENV} is not set; all proxied requests will fail with 500");
        }

        let state = Arc::new(AppState {
            http: self.build_upstream_client()?,
            api_key,
            config: self.config.clone(),
        });

        let app = create_router(state).layer(cors_layer());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Gateway listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    fn build_upstream_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(self.config.upstream.user_agent)
            .timeout(Duration::from_secs(self.config.upstream.timeout_secs))
            .build()
            .context("Failed to build upstream HTTP client")
    }
}

/// Any origin, GET and OPTIONS, Content-Type. Preflight requests are
/// answered by the layer before the handler runs.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
