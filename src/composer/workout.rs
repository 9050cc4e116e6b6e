//! Flat random workout

use rand::Rng;
use serde::Serialize;

use crate::catalog::CategoryIndex;
use crate::error::{ApiError, ApiResult};
use crate::exercises::Exercise;
use crate::filter::ExerciseFilter;
use crate::params::CountRange;
use crate::sampler::sample;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutRequest {
    #[serde(flatten)]
    pub filter: ExerciseFilter,
    pub count: u32,
}

impl WorkoutRequest {
    pub const COUNT: CountRange = CountRange::new(3, 1, 10);
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedWorkout {
    pub workout: Vec<Exercise>,
    pub count: usize,
    pub total_calories: u32,
    /// Effective parameters after defaults and clamping
    pub filters: WorkoutRequest,
}

fn candidates(
    exercises: &[Exercise],
    categories: &CategoryIndex,
    filter: &ExerciseFilter,
) -> ApiResult<Vec<Exercise>> {
    let matching = filter.apply(exercises, categories);
    if matching.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No exercises found matching {}",
            filter.describe()
        )));
    }
    Ok(matching)
}

/// Random set of up to `count` distinct exercises matching the filter
pub fn generate_workout<R: Rng + ?Sized>(
    exercises: &[Exercise],
    categories: &CategoryIndex,
    request: WorkoutRequest,
    rng: &mut R,
) -> ApiResult<GeneratedWorkout> {
    let matching = candidates(exercises, categories, &request.filter)?;
    let workout = sample(&matching, request.count as usize, rng);
    let total_calories = workout.iter().map(|e| e.calories).sum();

    Ok(GeneratedWorkout {
        count: workout.len(),
        workout,
        total_calories,
        filters: request,
    })
}

/// One random exercise matching the filter
pub fn random_exercise<R: Rng + ?Sized>(
    exercises: &[Exercise],
    categories: &CategoryIndex,
    filter: &ExerciseFilter,
    rng: &mut R,
) -> ApiResult<Exercise> {
    let matching = candidates(exercises, categories, filter)?;
    sample(&matching, 1, rng)
        .pop()
        .ok_or_else(|| ApiError::NotFound(format!("No exercises found matching {}", filter.describe())))
}
