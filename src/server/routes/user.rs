//! Favorites and workout history

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::{Value, json};

use super::{json_body, parse_id, query_params};
use crate::error::ApiResult;
use crate::params::LimitQuery;
use crate::server::AppState;
use crate::store::{HistoryEntry, NewHistoryEntry};

pub async fn favorites(State(state): State<AppState>) -> Json<Value> {
    let favorites = state.store.favorites().await;
    Json(json!({
        "count": favorites.len(),
        "favorites": favorites,
    }))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let id = parse_id(&id)?;
    let exercise = state.store.add_favorite(id).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("{} added to favorites", exercise.name),
            "exercise": exercise,
        })),
    ))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    state.store.remove_favorite(id).await?;
    Ok(Json(json!({
        "message": format!("Exercise {id} removed from favorites"),
        "id": id,
    })))
}

pub async fn history(
    State(state): State<AppState>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let limit = query_params(query)?.parse()?;
    let history = state.store.history(limit).await;
    Ok(Json(json!({
        "count": history.len(),
        "history": history,
    })))
}

pub async fn log_workout(
    State(state): State<AppState>,
    payload: Result<Json<NewHistoryEntry>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<HistoryEntry>)> {
    let new = json_body(payload)?;
    let entry = state.store.append_history(new).await;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn clear_history(State(state): State<AppState>) -> Json<Value> {
    let removed = state.store.clear_history().await;
    Json(json!({
        "message": "History cleared",
        "removed": removed,
    }))
}

#[cfg(test)]
mod tests {
    use super::super::testing::{app, get, send};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_favorite_lifecycle() {
        let app = app();
        let (status, _) = send(&app, Method::POST, "/api/favorites/7", None).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, Method::POST, "/api/favorites/7", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "conflict");

        let (_, body) = get(&app, "/api/favorites").await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["favorites"][0]["id"], 7);

        let (status, _) = send(&app, Method::DELETE, "/api/favorites/7", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, Method::DELETE, "/api/favorites/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_favorite_unknown_exercise() {
        let (status, _) = send(&app(), Method::POST, "/api/favorites/4242", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_history_log_and_list() {
        let app = app();
        let (status, entry) = send(
            &app,
            Method::POST,
            "/api/history",
            Some(json!({
                "workoutType": "strength",
                "exercises": [{"name": "Squat", "calories": 80}, {"name": "Row", "calories": "40"}],
                "duration": 30,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(entry["id"], 1);
        assert_eq!(entry["totalCalories"], 120.0);

        send(&app, Method::POST, "/api/history", Some(json!({}))).await;

        let (status, body) = get(&app, "/api/history?limit=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["history"][0]["id"], 2);
        assert_eq!(body["history"][0]["workoutType"], "general");
    }

    #[tokio::test]
    async fn test_history_rejects_malformed_body() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/history",
            Some(json!({"exercises": "not a list"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");
    }

    #[tokio::test]
    async fn test_history_malformed_limit() {
        let (status, body) = get(&app(), "/api/history?limit=1&limit=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");
    }

    #[tokio::test]
    async fn test_clear_history() {
        let app = app();
        send(&app, Method::POST, "/api/history", Some(json!({}))).await;
        send(&app, Method::POST, "/api/history", Some(json!({}))).await;

        let (status, body) = send(&app, Method::DELETE, "/api/history", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["removed"], 2);

        let (_, body) = get(&app, "/api/history").await;
        assert_eq!(body["count"], 0);
    }
}
