//! Service metadata - health, muscle groups, nutrition tips, stats

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use chrono::Utc;
use serde_json::{Value, json};

use super::query_params;
use crate::catalog::Catalog;
use crate::error::{ApiError, ApiResult};
use crate::params::TipsQuery;
use crate::server::AppState;
use crate::tips::{random_tip, tips_of};

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn muscles(State(state): State<AppState>) -> Json<Value> {
    let exercises = state.store.exercises().await;
    let muscles: Vec<Value> = Catalog::muscle_counts(&exercises)
        .into_iter()
        .map(|(muscle, count)| json!({ "muscle": muscle, "count": count }))
        .collect();
    Json(json!({
        "count": muscles.len(),
        "muscles": muscles,
    }))
}

pub async fn nutrition_tips(
    query: Result<Query<TipsQuery>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let (category, random) = query_params(query)?.parse()?;

    if random {
        let tip = random_tip(category, &mut rand::thread_rng())
            .ok_or_else(|| ApiError::NotFound("No nutrition tips available".to_string()))?;
        return Ok(Json(json!({
            "category": category,
            "tip": tip,
        })));
    }

    let tips = tips_of(category);
    Ok(Json(json!({
        "category": category,
        "count": tips.len(),
        "tips": tips,
    })))
}

pub async fn stats(State(state): State<AppState>) -> Json<Value> {
    let requests = state.counters.snapshot().await;
    let store = state.store.counts().await;
    Json(json!({
        "requests": requests,
        "catalog": store,
    }))
}

#[cfg(test)]
mod tests {
    use super::super::testing::{app, get};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_muscles_counts() {
        let (status, body) = get(&app(), "/api/muscles").await;
        assert_eq!(status, StatusCode::OK);
        let muscles = body["muscles"].as_array().unwrap();
        assert_eq!(muscles.len(), 6);
        assert_eq!(muscles[0]["muscle"], "chest");
        assert_eq!(muscles[0]["count"], 6);
    }

    #[tokio::test]
    async fn test_tips_by_category() {
        let (status, body) = get(&app(), "/api/nutrition-tips?category=hydration").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "hydration");
        for tip in body["tips"].as_array().unwrap() {
            assert_eq!(tip["category"], "hydration");
        }
    }

    #[tokio::test]
    async fn test_random_tip() {
        let (status, body) = get(&app(), "/api/nutrition-tips?random=true&category=general").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tip"]["category"], "general");
        assert_eq!(body["category"], "general");

        let (_, body) = get(&app(), "/api/nutrition-tips?random=true").await;
        assert!(body["category"].is_null());
        assert!(body["tip"]["text"].is_string());
    }

    #[tokio::test]
    async fn test_tips_invalid_category() {
        let (status, body) = get(&app(), "/api/nutrition-tips?category=snacks").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["parameter"], "category");
    }

    #[tokio::test]
    async fn test_stats_counts_requests() {
        let app = app();
        get(&app, "/api/hiit").await;
        get(&app, "/api/hiit").await;
        get(&app, "/api/exercises/3").await;

        let (status, body) = get(&app, "/api/stats").await;
        assert_eq!(status, StatusCode::OK);
        // the stats request itself is counted before the handler runs
        assert_eq!(body["requests"]["totalRequests"], 4);
        assert_eq!(body["requests"]["byEndpoint"]["GET /api/hiit"], 2);
        assert_eq!(body["requests"]["byEndpoint"]["GET /api/exercises/:id"], 1);
        assert_eq!(body["catalog"]["builtinExercises"], 36);
    }
}
