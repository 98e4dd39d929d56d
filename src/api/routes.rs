use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{proxy_tennis, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/tennis", get(proxy_tennis))
        .with_state(state)
}
