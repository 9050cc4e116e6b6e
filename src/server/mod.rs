//! HTTP server - axum router, shared state and startup

pub mod middleware;
pub mod rate_limit;
pub mod routes;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::{Router, middleware::from_fn_with_state, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analytics::RequestCounters;
use crate::catalog::Catalog;
use crate::config::ServerConfig;
use crate::store::Store;
use rate_limit::RateLimiter;

/// Shared by every handler; cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub counters: Arc<RequestCounters>,
    pub limiter: Arc<RateLimiter>,
    pub api_key: Option<Arc<str>>,
    /// Rate-limit on `x-forwarded-for` instead of the peer address
    pub trust_proxy: bool,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            store: Arc::new(Store::new(Arc::new(Catalog::builtin()))),
            counters: Arc::new(RequestCounters::new()),
            limiter: Arc::new(RateLimiter::new(
                config.rate_limit_max,
                config.rate_limit_window(),
            )),
            api_key: config.api_key().map(Arc::from),
            trust_proxy: config.trust_proxy,
        }
    }
}

/// `/health` is always open; `/api/*` goes through rate limiting, the API key
/// check and request counting, in that order
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = routes::api_routes()
        .route_layer(from_fn_with_state(state.clone(), middleware::count_requests))
        .layer(from_fn_with_state(state.clone(), middleware::require_api_key))
        .layer(from_fn_with_state(state.clone(), middleware::rate_limit));

    let mut app = Router::new()
        .route("/health", get(routes::meta::health))
        .merge(api);
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = config.bind_addr().await?;
    let state = AppState::new(&config);
    info!(
        "Catalog loaded: {} built-in exercises",
        state.store.catalog().exercises().len()
    );
    if config.api_key().is_none() {
        info!("API_KEY not set, /api routes are open");
    }
    if state.limiter.is_enabled() {
        info!(
            "Rate limit: {} requests per {}s",
            config.rate_limit_max, config.rate_limit_window_secs
        );
    }

    let app = router(state, config.static_dir.as_deref());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
