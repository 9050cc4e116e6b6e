//! Catalog routes - listing, lookup, search and custom exercises

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Serialize;
use serde_json::{Value, json};

use super::{json_body, parse_id, query_params};
use crate::composer::random_exercise;
use crate::error::{ApiError, ApiResult};
use crate::exercises::{CategoryTag, Exercise};
use crate::filter::{ExerciseFilter, search as search_exercises};
use crate::params::{ExerciseQuery, SearchQuery, required_choice};
use crate::server::AppState;
use crate::store::NewExercise;

#[derive(Debug, Serialize)]
pub struct ExerciseList {
    pub exercises: Vec<Exercise>,
    pub count: usize,
    pub filters: ExerciseFilter,
}

/// One random pick plus the filters it was drawn under
#[derive(Debug, Serialize)]
pub struct RandomExercise {
    pub exercise: Exercise,
    pub filters: ExerciseFilter,
}

/// Single exercise with its category tags
#[derive(Debug, Serialize)]
pub struct ExerciseDetail {
    #[serde(flatten)]
    pub exercise: Exercise,
    pub categories: Vec<CategoryTag>,
}

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ExerciseQuery>, QueryRejection>,
) -> ApiResult<Json<ExerciseList>> {
    let filter = query_params(query)?.to_filter()?;
    let all = state.store.exercises().await;
    let exercises = filter.apply(&all, state.store.catalog().categories());
    Ok(Json(ExerciseList {
        count: exercises.len(),
        exercises,
        filters: filter,
    }))
}

pub async fn random(
    State(state): State<AppState>,
    query: Result<Query<ExerciseQuery>, QueryRejection>,
) -> ApiResult<Json<RandomExercise>> {
    let filter = query_params(query)?.to_filter()?;
    let all = state.store.exercises().await;
    let exercise = random_exercise(
        &all,
        state.store.catalog().categories(),
        &filter,
        &mut rand::thread_rng(),
    )?;
    Ok(Json(RandomExercise {
        exercise,
        filters: filter,
    }))
}

pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let q = query_params(query)?.parse()?;
    let all = state.store.exercises().await;
    let exercises = search_exercises(&all, &q);
    Ok(Json(json!({
        "query": q,
        "count": exercises.len(),
        "exercises": exercises,
    })))
}

pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<ExerciseList>> {
    let tag: CategoryTag = required_choice("category", Some(&category))?;
    let filter = ExerciseFilter {
        category: Some(tag),
        ..Default::default()
    };
    let all = state.store.exercises().await;
    let exercises = filter.apply(&all, state.store.catalog().categories());
    Ok(Json(ExerciseList {
        count: exercises.len(),
        exercises,
        filters: filter,
    }))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ExerciseDetail>> {
    let id = parse_id(&id)?;
    let exercise = state
        .store
        .find_exercise(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Exercise {id} not found")))?;
    let categories = state.store.catalog().categories().tags_of(id);
    Ok(Json(ExerciseDetail {
        exercise,
        categories,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewExercise>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Exercise>)> {
    let new = json_body(payload)?;
    let exercise = state.store.add_exercise(new).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    let removed = state.store.delete_exercise(id).await?;
    Ok(Json(json!({
        "message": format!("Exercise {} deleted", removed.id),
        "exercise": removed,
    })))
}

#[cfg(test)]
mod tests {
    use super::super::testing::{app, get, send};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_all() {
        let (status, body) = get(&app(), "/api/exercises").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 36);
        assert_eq!(body["exercises"].as_array().unwrap().len(), 36);
    }

    #[tokio::test]
    async fn test_list_filtered_echoes_filters() {
        let (status, body) = get(&app(), "/api/exercises?muscle=CHEST&difficulty=beginner").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        assert_eq!(body["filters"]["muscle"], "chest");
        assert_eq!(body["filters"]["difficulty"], "beginner");
        for exercise in body["exercises"].as_array().unwrap() {
            assert_eq!(exercise["muscle"], "chest");
        }
    }

    #[tokio::test]
    async fn test_invalid_muscle_reports_valid_values() {
        let (status, body) = get(&app(), "/api/exercises?muscle=glutes").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["parameter"], "muscle");
        assert_eq!(body["validValues"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_get_includes_categories() {
        let (status, body) = get(&app(), "/api/exercises/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        let categories = body["categories"].as_array().unwrap();
        assert!(categories.contains(&json!("push")));
    }

    #[tokio::test]
    async fn test_get_missing_and_malformed() {
        let app = app();
        assert_eq!(get(&app, "/api/exercises/999").await.0, StatusCode::NOT_FOUND);
        assert_eq!(get(&app, "/api/exercises/abc").await.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_random_respects_filter() {
        let (status, body) = get(&app(), "/api/exercises/random?muscle=legs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["exercise"]["muscle"], "legs");
        assert_eq!(body["filters"]["muscle"], "legs");
        assert!(body["filters"].get("difficulty").is_none());
    }

    #[tokio::test]
    async fn test_random_without_filters_echoes_empty_filters() {
        let (status, body) = get(&app(), "/api/exercises/random").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["exercise"]["id"].is_u64());
        assert_eq!(body["filters"], json!({}));
    }

    #[tokio::test]
    async fn test_list_rejects_repeated_parameter_as_json() {
        let (status, body) = get(&app(), "/api/exercises?muscle=legs&muscle=arms").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");
    }

    #[tokio::test]
    async fn test_random_no_match_is_not_found() {
        let (status, body) = get(&app(), "/api/exercises/random?equipment=trampoline").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_search() {
        let app = app();
        let (status, body) = get(&app, "/api/exercises/search?q=PUSH").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["count"].as_u64().unwrap() >= 1);

        let (status, _) = get(&app, "/api/exercises/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_by_category() {
        let app = app();
        let (status, body) = get(&app, "/api/exercises/category/pull").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 9);

        let (status, body) = get(&app, "/api/exercises/category/cardio").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["parameter"], "category");
    }

    #[tokio::test]
    async fn test_delete_builtin_is_forbidden() {
        let app = app();
        let (status, body) = send(&app, Method::DELETE, "/api/exercises/5", None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "forbidden");
        assert_eq!(get(&app, "/api/exercises/5").await.0, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_add_then_delete_custom() {
        let app = app();
        let (status, created) = send(
            &app,
            Method::POST,
            "/api/exercises",
            Some(json!({"name": "Sled Push", "muscle": "legs", "difficulty": "advanced", "reps": 20})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1000);
        assert_eq!(created["custom"], true);
        assert_eq!(created["reps"], "20");
        assert_eq!(created["equipment"], "none");

        let (_, listing) = get(&app, "/api/exercises").await;
        assert_eq!(listing["count"], 37);

        let (status, _) = send(&app, Method::DELETE, "/api/exercises/1000", None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, listing) = get(&app, "/api/exercises").await;
        assert_eq!(listing["count"], 36);
        assert_eq!(get(&app, "/api/exercises/1000").await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_requires_fields() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/exercises",
            Some(json!({"muscle": "legs", "difficulty": "advanced"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/exercises",
            Some(json!({"name": "Thing", "muscle": "wings", "difficulty": "advanced"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["parameter"], "muscle");
    }
}
