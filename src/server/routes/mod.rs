//! Route table for `/api/*`
//!
//! Handlers are thin: parse parameters, call the composer or the store,
//! wrap the result in JSON.

pub mod exercises;
pub mod meta;
pub mod user;
pub mod workouts;

use axum::{
    Json, Router,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::{get, post},
};

use super::AppState;
use crate::error::{ApiError, ApiResult};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/api/exercises", get(exercises::list).post(exercises::create))
        .route("/api/exercises/random", get(exercises::random))
        .route("/api/exercises/search", get(exercises::search))
        .route("/api/exercises/category/:category", get(exercises::by_category))
        .route("/api/exercises/:id", get(exercises::get).delete(exercises::delete))
        .route("/api/muscles", get(meta::muscles))
        // Composer
        .route("/api/generate-workout", get(workouts::generate))
        .route("/api/workout-plan", get(workouts::plan))
        .route("/api/warmup", get(workouts::warmup))
        .route("/api/stretches", get(workouts::stretches))
        .route("/api/cooldown", get(workouts::cooldown))
        .route("/api/superset", get(workouts::superset))
        .route("/api/hiit", get(workouts::hiit))
        .route("/api/nutrition-tips", get(meta::nutrition_tips))
        // User state
        .route("/api/favorites", get(user::favorites))
        .route(
            "/api/favorites/:id",
            post(user::add_favorite).delete(user::remove_favorite),
        )
        .route(
            "/api/history",
            get(user::history).post(user::log_workout).delete(user::clear_history),
        )
        .route("/api/stats", get(meta::stats))
}

fn parse_id(raw: &str) -> ApiResult<u32> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::InvalidInput(format!("'{raw}' is not a valid exercise id")))
}

/// Malformed query strings (e.g. a repeated parameter) get the JSON error body
fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> ApiResult<T> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))
}

/// Malformed bodies become the same JSON error as any other bad input
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))
}


#[cfg(test)]
mod tests {
    use super::testing::{app, app_with, get};
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::{Request, StatusCode};
    use std::net::SocketAddr;
    use tower::ServiceExt;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Ok(42));
        assert!(matches!(parse_id("abc"), Err(ApiError::InvalidInput(_))));
        assert!(matches!(parse_id("-1"), Err(ApiError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_health_is_open_with_api_key() {
        let app = app_with(ServerConfig {
            api_key: Some("s3cret".to_string()),
            ..Default::default()
        });
        let (status, body) = get(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_api_key_required_when_configured() {
        let app = app_with(ServerConfig {
            api_key: Some("s3cret".to_string()),
            ..Default::default()
        });
        let (status, body) = get(&app, "/api/exercises").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "unauthorized");

        let request = Request::builder()
            .uri("/api/exercises")
            .header("x-api-key", "s3cret")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rate_limit_rejects_after_max() {
        let app = app_with(ServerConfig {
            rate_limit_max: 2,
            ..Default::default()
        });
        assert_eq!(get(&app, "/api/muscles").await.0, StatusCode::OK);
        assert_eq!(get(&app, "/api/muscles").await.0, StatusCode::OK);
        let (status, body) = get(&app, "/api/muscles").await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"], "rate_limited");

        // /health sits outside the limiter
        assert_eq!(get(&app, "/health").await.0, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rate_limit_ignores_rotating_forwarded_for() {
        let app = app_with(ServerConfig {
            rate_limit_max: 2,
            ..Default::default()
        });
        let peer: SocketAddr = "198.51.100.4:40000".parse().unwrap();
        let mut accepted = 0;
        for i in 0..10 {
            let mut request = Request::builder()
                .uri("/api/muscles")
                .header("x-forwarded-for", format!("10.0.0.{i}"))
                .body(Body::empty())
                .unwrap();
            request.extensions_mut().insert(ConnectInfo(peer));
            let response = app.clone().oneshot(request).await.unwrap();
            if response.status() == StatusCode::OK {
                accepted += 1;
            } else {
                assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
            }
        }
        assert_eq!(accepted, 2);
    }

    #[tokio::test]
    async fn test_rate_limit_per_forwarded_client_behind_proxy() {
        let app = app_with(ServerConfig {
            rate_limit_max: 1,
            trust_proxy: true,
            ..Default::default()
        });
        for client in ["10.0.0.1", "10.0.0.2"] {
            let request = Request::builder()
                .uri("/api/muscles")
                .header("x-forwarded-for", client)
                .body(Body::empty())
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "first request from {}", client);
        }
        let request = Request::builder()
            .uri("/api/muscles")
            .header("x-forwarded-for", "10.0.0.1")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_malformed_query_is_json_error() {
        let (status, body) = get(&app(), "/api/generate-workout?count=1&count=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");
        assert!(body["message"].as_str().unwrap().contains("count"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, _) = get(&app(), "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
