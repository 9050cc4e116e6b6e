//! Composer routes - generated workouts, plans, routines, supersets, HIIT

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use super::query_params;

use crate::composer::{
    GeneratedWorkout, HiitSession, Routine, Superset, WeeklyPlan, build_cooldown, build_hiit,
    build_stretches, build_superset, build_warmup, build_weekly_plan, generate_workout,
};
use crate::error::ApiResult;
use crate::params::{
    CooldownQuery, HiitQuery, PlanQuery, StretchQuery, SupersetQuery, WarmupQuery, WorkoutQuery,
};
use crate::routines::{StretchItem, WarmupItem};
use crate::server::AppState;

pub async fn generate(
    State(state): State<AppState>,
    query: Result<Query<WorkoutQuery>, QueryRejection>,
) -> ApiResult<Json<GeneratedWorkout>> {
    let request = query_params(query)?.parse()?;
    let exercises = state.store.exercises().await;
    let workout = generate_workout(
        &exercises,
        state.store.catalog().categories(),
        request,
        &mut rand::thread_rng(),
    )?;
    Ok(Json(workout))
}

pub async fn plan(
    State(state): State<AppState>,
    query: Result<Query<PlanQuery>, QueryRejection>,
) -> ApiResult<Json<WeeklyPlan>> {
    let request = query_params(query)?.parse()?;
    let exercises = state.store.exercises().await;
    let plan = build_weekly_plan(
        &exercises,
        state.store.catalog().categories(),
        request,
        &mut rand::thread_rng(),
    );
    Ok(Json(plan))
}

pub async fn warmup(
    query: Result<Query<WarmupQuery>, QueryRejection>,
) -> ApiResult<Json<Routine<WarmupItem>>> {
    let request = query_params(query)?.parse()?;
    Ok(Json(build_warmup(request, &mut rand::thread_rng())))
}

pub async fn stretches(
    query: Result<Query<StretchQuery>, QueryRejection>,
) -> ApiResult<Json<Routine<StretchItem>>> {
    let request = query_params(query)?.parse()?;
    Ok(Json(build_stretches(request, &mut rand::thread_rng())))
}

pub async fn cooldown(
    query: Result<Query<CooldownQuery>, QueryRejection>,
) -> ApiResult<Json<Routine<StretchItem>>> {
    let count = query_params(query)?.parse()?;
    Ok(Json(build_cooldown(count, &mut rand::thread_rng())))
}

pub async fn superset(
    State(state): State<AppState>,
    query: Result<Query<SupersetQuery>, QueryRejection>,
) -> ApiResult<Json<Superset>> {
    let request = query_params(query)?.parse()?;
    let exercises = state.store.exercises().await;
    let superset = build_superset(
        &exercises,
        state.store.catalog().categories(),
        request,
        &mut rand::thread_rng(),
    );
    Ok(Json(superset))
}

pub async fn hiit(
    query: Result<Query<HiitQuery>, QueryRejection>,
) -> ApiResult<Json<HiitSession>> {
    let request = query_params(query)?.parse()?;
    Ok(Json(build_hiit(request, &mut rand::thread_rng())))
}

#[cfg(test)]
mod tests {
    use super::super::testing::{app, get};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_generate_workout_defaults() {
        let (status, body) = get(&app(), "/api/generate-workout").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 3);
        assert_eq!(body["workout"].as_array().unwrap().len(), 3);
        assert_eq!(body["filters"]["count"], 3);
    }

    #[tokio::test]
    async fn test_generate_workout_clamps_to_matches() {
        let (status, body) = get(&app(), "/api/generate-workout?muscle=chest&difficulty=beginner&count=5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        for exercise in body["workout"].as_array().unwrap() {
            assert_eq!(exercise["muscle"], "chest");
            assert_eq!(exercise["difficulty"], "beginner");
        }
    }

    #[tokio::test]
    async fn test_generate_workout_errors() {
        let app = app();
        let (status, body) = get(&app, "/api/generate-workout?difficulty=expert").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["parameter"], "difficulty");

        let (status, _) = get(&app, "/api/generate-workout?count=lots").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get(&app, "/api/generate-workout?equipment=trampoline").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_plan_always_seven_days() {
        let (status, body) = get(&app(), "/api/workout-plan?difficulty=advanced&days=2").await;
        assert_eq!(status, StatusCode::OK);
        let days = body["plan"].as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["day"], "Monday");
        assert_eq!(days[6]["day"], "Sunday");
        assert_eq!(body["parameters"]["days"], 2);
        assert_eq!(body["parameters"]["difficulty"], "advanced");
    }

    #[tokio::test]
    async fn test_warmup_by_type() {
        let (status, body) = get(&app(), "/api/warmup?type=cardio&count=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 4);
        for item in body["items"].as_array().unwrap() {
            assert_eq!(item["type"], "cardio");
        }
        assert_eq!(body["parameters"]["type"], "cardio");
    }

    #[tokio::test]
    async fn test_warmup_invalid_type() {
        let (status, body) = get(&app(), "/api/warmup?type=yoga").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["validValues"].as_array().unwrap().contains(&"all".into()));
    }

    #[tokio::test]
    async fn test_stretches_and_cooldown() {
        let app = app();
        let (status, body) = get(&app, "/api/stretches?targetArea=full&count=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 3);

        let (status, body) = get(&app, "/api/cooldown").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["routine"], "cooldown");
        assert_eq!(body["count"], 5);
    }

    #[tokio::test]
    async fn test_superset_push_pull() {
        let (status, body) = get(&app(), "/api/superset?sets=5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 5);
        assert_eq!(body["parameters"]["type"], "push-pull");
    }

    #[tokio::test]
    async fn test_superset_ignored_muscle_not_echoed() {
        let (status, body) = get(&app(), "/api/superset?type=upper-lower&muscle=core").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["parameters"].get("muscle").is_none());
        assert!(body.get("muscle").is_none());
    }

    #[tokio::test]
    async fn test_superset_same_muscle() {
        let (status, body) = get(&app(), "/api/superset?type=same-muscle&muscle=core&sets=5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 3);
        assert_eq!(body["muscle"], "core");
        assert_eq!(body["parameters"]["muscle"], "core");
    }

    #[tokio::test]
    async fn test_hiit() {
        let (status, body) = get(&app(), "/api/hiit?rounds=4&work=30&rest=15").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rounds"].as_array().unwrap().len(), 4);
        assert_eq!(body["totalTimeSecs"], 180);
        assert_eq!(body["totalTime"], "3:00");
    }
}
