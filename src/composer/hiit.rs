//! HIIT interval schedule

use rand::Rng;
use serde::Serialize;

use super::format_duration;
use crate::params::CountRange;
use crate::sampler::sample;

/// Work interval the base calorie figures are quoted for
pub const BASE_WORK_SECS: u32 = 40;

/// Bodyweight moves with calories burned per 40 s of work
pub const HIIT_MOVES: &[(&str, u32)] = &[
    ("Burpees", 12),
    ("Jumping Jacks", 8),
    ("Mountain Climbers", 10),
    ("High Knees", 9),
    ("Jump Squats", 11),
    ("Skaters", 9),
    ("Plank Jacks", 7),
    ("Tuck Jumps", 12),
    ("Sprint in Place", 10),
    ("Push-Up to Shoulder Tap", 8),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiitRequest {
    pub rounds: u32,
    #[serde(rename = "work")]
    pub work_secs: u32,
    #[serde(rename = "rest")]
    pub rest_secs: u32,
}

impl HiitRequest {
    pub const ROUNDS: CountRange = CountRange::new(8, 1, 10);
    pub const WORK: CountRange = CountRange::new(40, 10, 120);
    pub const REST: CountRange = CountRange::new(20, 5, 120);
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiitRound {
    pub round: usize,
    pub exercise: &'static str,
    pub work_secs: u32,
    pub rest_secs: u32,
    pub calories: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiitSession {
    pub rounds: Vec<HiitRound>,
    pub total_time_secs: u32,
    /// `m:ss`
    pub total_time: String,
    pub total_calories: u32,
    pub parameters: HiitRequest,
}

/// Calories for one work interval, scaled linearly from the 40 s base
pub fn round_calories(base: u32, work_secs: u32) -> u32 {
    (f64::from(base) * f64::from(work_secs) / f64::from(BASE_WORK_SECS)).round() as u32
}

pub fn build_hiit<R: Rng + ?Sized>(request: HiitRequest, rng: &mut R) -> HiitSession {
    let rounds: Vec<HiitRound> = sample(HIIT_MOVES, request.rounds as usize, rng)
        .into_iter()
        .enumerate()
        .map(|(i, (exercise, base))| HiitRound {
            round: i + 1,
            exercise,
            work_secs: request.work_secs,
            rest_secs: request.rest_secs,
            calories: round_calories(base, request.work_secs),
        })
        .collect();

    let total_time_secs = rounds.len() as u32 * (request.work_secs + request.rest_secs);
    HiitSession {
        total_calories: rounds.iter().map(|r| r.calories).sum(),
        total_time_secs,
        total_time: format_duration(total_time_secs),
        rounds,
        parameters: request,
    }
}
