//! Liveness probe

use axum::{Router, routing::get};

pub const HEALTH_PATH: &str = "/health";

/// Answers as soon as the process can serve requests; checks nothing else
pub async fn liveness() -> &'static str {
    "healthy"
}

pub fn router() -> Router {
    Router::new().route(HEALTH_PATH, get(liveness))
}
