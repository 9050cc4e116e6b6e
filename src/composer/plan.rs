//! Weekly plan - fixed 7-day muscle split per difficulty

use rand::Rng;
use serde::Serialize;

use crate::catalog::CategoryIndex;
use crate::exercises::{Difficulty, Exercise, Muscle};
use crate::filter::ExerciseFilter;
use crate::params::CountRange;
use crate::sampler::sample;

/// Exercises drawn per target muscle on a training day
pub const EXERCISES_PER_MUSCLE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanRequest {
    pub difficulty: Difficulty,
    /// Accepted and echoed; the plan always covers the full week
    pub days: u32,
}

impl PlanRequest {
    pub const DAYS: CountRange = CountRange::new(3, 1, 7);
}

/// One row of a split table; no muscles means rest
#[derive(Debug, Clone, Copy)]
struct DaySplit {
    day: &'static str,
    focus: &'static str,
    muscles: &'static [Muscle],
}

const fn rest(day: &'static str) -> DaySplit {
    DaySplit {
        day,
        focus: "Rest",
        muscles: &[],
    }
}

const BEGINNER_SPLIT: [DaySplit; 7] = [
    DaySplit { day: "Monday", focus: "Full Body A", muscles: &[Muscle::Chest, Muscle::Back, Muscle::Legs] },
    rest("Tuesday"),
    DaySplit { day: "Wednesday", focus: "Full Body B", muscles: &[Muscle::Shoulders, Muscle::Arms, Muscle::Core] },
    rest("Thursday"),
    DaySplit { day: "Friday", focus: "Full Body C", muscles: &[Muscle::Legs, Muscle::Chest, Muscle::Core] },
    rest("Saturday"),
    rest("Sunday"),
];

const INTERMEDIATE_SPLIT: [DaySplit; 7] = [
    DaySplit { day: "Monday", focus: "Upper Body", muscles: &[Muscle::Chest, Muscle::Back, Muscle::Shoulders] },
    DaySplit { day: "Tuesday", focus: "Lower Body", muscles: &[Muscle::Legs, Muscle::Core] },
    rest("Wednesday"),
    DaySplit { day: "Thursday", focus: "Upper Body", muscles: &[Muscle::Back, Muscle::Chest, Muscle::Arms] },
    DaySplit { day: "Friday", focus: "Lower Body", muscles: &[Muscle::Legs, Muscle::Core] },
    rest("Saturday"),
    rest("Sunday"),
];

const ADVANCED_SPLIT: [DaySplit; 7] = [
    DaySplit { day: "Monday", focus: "Push", muscles: &[Muscle::Chest, Muscle::Shoulders, Muscle::Arms] },
    DaySplit { day: "Tuesday", focus: "Pull", muscles: &[Muscle::Back, Muscle::Arms] },
    DaySplit { day: "Wednesday", focus: "Legs", muscles: &[Muscle::Legs, Muscle::Core] },
    DaySplit { day: "Thursday", focus: "Push", muscles: &[Muscle::Chest, Muscle::Shoulders] },
    DaySplit { day: "Friday", focus: "Pull", muscles: &[Muscle::Back, Muscle::Arms] },
    DaySplit { day: "Saturday", focus: "Legs", muscles: &[Muscle::Legs, Muscle::Core] },
    rest("Sunday"),
];

fn split_for(difficulty: Difficulty) -> &'static [DaySplit; 7] {
    match difficulty {
        Difficulty::Beginner => &BEGINNER_SPLIT,
        Difficulty::Intermediate => &INTERMEDIATE_SPLIT,
        Difficulty::Advanced => &ADVANCED_SPLIT,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    pub day: &'static str,
    pub focus: &'static str,
    pub muscles: Vec<Muscle>,
    pub rest_day: bool,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub plan: Vec<PlanDay>,
    pub training_days: usize,
    pub parameters: PlanRequest,
}

/// Seven days, Monday first. Each training day gets up to two exercises per
/// target muscle, concatenated in the split's muscle order.
pub fn build_weekly_plan<R: Rng + ?Sized>(
    exercises: &[Exercise],
    categories: &CategoryIndex,
    request: PlanRequest,
    rng: &mut R,
) -> WeeklyPlan {
    let plan: Vec<PlanDay> = split_for(request.difficulty)
        .iter()
        .map(|split| {
            let day_exercises = split
                .muscles
                .iter()
                .flat_map(|muscle| {
                    let pool = ExerciseFilter::muscle(*muscle).apply(exercises, categories);
                    sample(&pool, EXERCISES_PER_MUSCLE, rng)
                })
                .collect();
            PlanDay {
                day: split.day,
                focus: split.focus,
                muscles: split.muscles.to_vec(),
                rest_day: split.muscles.is_empty(),
                exercises: day_exercises,
            }
        })
        .collect();

    WeeklyPlan {
        training_days: plan.iter().filter(|d| !d.rest_day).count(),
        plan,
        parameters: request,
    }
}
