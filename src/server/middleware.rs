//! Request middleware - rate limiting, API key check, request counting

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, MatchedPath, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use super::AppState;
use crate::error::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Peer address, or the first `x-forwarded-for` hop when running behind a
/// trusted proxy. Requests with neither share one bucket.
fn client_key(request: &Request, trust_proxy: bool) -> String {
    if trust_proxy {
        let forwarded = request
            .headers()
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());
        if let Some(ip) = forwarded {
            return ip.to_string();
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "anonymous".to_string())
}

pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let client = client_key(&request, state.trust_proxy);
    if let Err(retry_after_secs) = state.limiter.check(&client, Instant::now()).await {
        warn!("Rate limit exceeded for {}", client);
        return Err(ApiError::RateLimited { retry_after_secs });
    }
    Ok(next.run(request).await)
}

fn api_key_matches(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|provided| provided == expected)
}

pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(expected) = state.api_key.as_deref() {
        if !api_key_matches(request.headers(), expected) {
            warn!("Rejected request to {} with missing or wrong API key", request.uri().path());
            return Err(ApiError::Unauthorized);
        }
    }
    Ok(next.run(request).await)
}

/// Counts requests per matched route, e.g. `GET /api/exercises/:id`
pub async fn count_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    state
        .counters
        .record(&format!("{} {}", request.method(), path))
        .await;
    next.run(request).await
}
