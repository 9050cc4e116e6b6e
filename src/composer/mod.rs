//! Composer - builds workouts, plans, routines, supersets and HIIT sessions
//!
//! Every builder is a pure function of the exercise list, the validated
//! request and an injected RNG:
//! - flat random workouts and single random exercises
//! - weekly plans from a fixed muscle split
//! - warm-up, stretch and cooldown routines
//! - push/pull, upper/lower and same-muscle supersets
//! - HIIT interval schedules

pub mod hiit;
pub mod plan;
pub mod routine;
pub mod superset;
pub mod workout;

pub use hiit::{HiitRequest, HiitSession, build_hiit};
pub use plan::{PlanRequest, WeeklyPlan, build_weekly_plan};
pub use routine::{Routine, RoutineRequest, build_cooldown, build_stretches, build_warmup};
pub use superset::{Superset, SupersetRequest, SupersetType, build_superset};
pub use workout::{GeneratedWorkout, WorkoutRequest, generate_workout, random_exercise};

/// Seconds as `m:ss`
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
