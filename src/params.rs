//! Request parameters - raw query strings turned into validated, clamped values
//!
//! Everything here runs before any filtering or sampling, so the composer
//! only ever sees typed values.

use serde::Deserialize;

use crate::composer::hiit::HiitRequest;
use crate::composer::plan::PlanRequest;
use crate::composer::routine::RoutineRequest;
use crate::composer::superset::{SupersetRequest, SupersetType};
use crate::composer::workout::WorkoutRequest;
use crate::error::{ApiError, ApiResult};
use crate::exercises::{CategoryTag, Difficulty, Muscle, Variants};
use crate::filter::ExerciseFilter;
use crate::routines::{ALL_WARMUPS, FULL_BODY, StretchArea, WarmupType};
use crate::tips::TipCategory;

/// Inclusive bounds and default for a numeric parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub default: u32,
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(default: u32, min: u32, max: u32) -> Self {
        Self { default, min, max }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Optional enum parameter; absent or blank means "no constraint"
pub fn choice<T: Variants>(parameter: &'static str, raw: Option<&str>) -> ApiResult<Option<T>> {
    match non_blank(raw) {
        None => Ok(None),
        Some(value) => T::parse(value)
            .map(Some)
            .ok_or_else(|| ApiError::validation(parameter, value, T::names())),
    }
}

/// Enum parameter that also accepts a catch-all keyword (`all`, `full`),
/// which maps to `None` just like an absent value
pub fn choice_or_any<T: Variants>(
    parameter: &'static str,
    raw: Option<&str>,
    any_keyword: &'static str,
) -> ApiResult<Option<T>> {
    match non_blank(raw) {
        None => Ok(None),
        Some(value) if value.eq_ignore_ascii_case(any_keyword) => Ok(None),
        Some(value) => T::parse(value).map(Some).ok_or_else(|| {
            let mut valid = T::names();
            valid.push(any_keyword);
            ApiError::validation(parameter, value, valid)
        }),
    }
}

/// Enum parameter that must be present
pub fn required_choice<T: Variants>(parameter: &'static str, raw: Option<&str>) -> ApiResult<T> {
    choice(parameter, raw)?.ok_or_else(|| ApiError::InvalidInput(format!("{parameter} is required")))
}

/// Numeric parameter: absent ⇒ default, otherwise clamped into range.
/// Non-numeric input is rejected rather than silently defaulted.
pub fn count(parameter: &'static str, raw: Option<&str>, range: CountRange) -> ApiResult<u32> {
    let Some(value) = non_blank(raw) else {
        return Ok(range.default);
    };
    let parsed: i64 = value.parse().map_err(|_| {
        ApiError::InvalidInput(format!("{parameter} must be a whole number, got '{value}'"))
    })?;
    let clamped = parsed.clamp(i64::from(range.min), i64::from(range.max));
    Ok(u32::try_from(clamped).unwrap_or(range.default))
}

fn flag(raw: Option<&str>) -> bool {
    non_blank(raw).is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseQuery {
    pub muscle: Option<String>,
    pub difficulty: Option<String>,
    pub equipment: Option<String>,
    pub category: Option<String>,
}

impl ExerciseQuery {
    pub fn to_filter(&self) -> ApiResult<ExerciseFilter> {
        Ok(ExerciseFilter {
            muscle: choice::<Muscle>("muscle", self.muscle.as_deref())?,
            difficulty: choice::<Difficulty>("difficulty", self.difficulty.as_deref())?,
            equipment: non_blank(self.equipment.as_deref()).map(str::to_string),
            category: choice::<CategoryTag>("category", self.category.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutQuery {
    pub muscle: Option<String>,
    pub difficulty: Option<String>,
    pub equipment: Option<String>,
    pub count: Option<String>,
}

impl WorkoutQuery {
    pub fn parse(&self) -> ApiResult<WorkoutRequest> {
        let filter = ExerciseQuery {
            muscle: self.muscle.clone(),
            difficulty: self.difficulty.clone(),
            equipment: self.equipment.clone(),
            category: None,
        }
        .to_filter()?;
        Ok(WorkoutRequest {
            filter,
            count: count("count", self.count.as_deref(), WorkoutRequest::COUNT)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanQuery {
    pub difficulty: Option<String>,
    pub days: Option<String>,
}

impl PlanQuery {
    pub fn parse(&self) -> ApiResult<PlanRequest> {
        Ok(PlanRequest {
            difficulty: choice("difficulty", self.difficulty.as_deref())?
                .unwrap_or(Difficulty::Beginner),
            days: count("days", self.days.as_deref(), PlanRequest::DAYS)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WarmupQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub count: Option<String>,
}

impl WarmupQuery {
    pub fn parse(&self) -> ApiResult<RoutineRequest<WarmupType>> {
        Ok(RoutineRequest {
            selection: choice_or_any("type", self.kind.as_deref(), ALL_WARMUPS)?,
            count: count("count", self.count.as_deref(), RoutineRequest::<WarmupType>::COUNT)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StretchQuery {
    #[serde(rename = "targetArea")]
    pub target_area: Option<String>,
    pub count: Option<String>,
}

impl StretchQuery {
    pub fn parse(&self) -> ApiResult<RoutineRequest<StretchArea>> {
        Ok(RoutineRequest {
            selection: choice_or_any("targetArea", self.target_area.as_deref(), FULL_BODY)?,
            count: count("count", self.count.as_deref(), RoutineRequest::<StretchArea>::COUNT)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CooldownQuery {
    pub count: Option<String>,
}

impl CooldownQuery {
    pub fn parse(&self) -> ApiResult<u32> {
        count("count", self.count.as_deref(), RoutineRequest::<StretchArea>::COUNT)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupersetQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sets: Option<String>,
    pub muscle: Option<String>,
}

impl SupersetQuery {
    pub fn parse(&self) -> ApiResult<SupersetRequest> {
        let kind = choice("type", self.kind.as_deref())?.unwrap_or(SupersetType::PushPull);
        let muscle: Option<Muscle> = choice("muscle", self.muscle.as_deref())?;
        Ok(SupersetRequest {
            kind,
            sets: count("sets", self.sets.as_deref(), SupersetRequest::SETS)?,
            // other pairings never look at the muscle, so it is not echoed back
            muscle: muscle.filter(|_| kind == SupersetType::SameMuscle),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HiitQuery {
    pub rounds: Option<String>,
    pub work: Option<String>,
    pub rest: Option<String>,
}

impl HiitQuery {
    pub fn parse(&self) -> ApiResult<HiitRequest> {
        Ok(HiitRequest {
            rounds: count("rounds", self.rounds.as_deref(), HiitRequest::ROUNDS)?,
            work_secs: count("work", self.work.as_deref(), HiitRequest::WORK)?,
            rest_secs: count("rest", self.rest.as_deref(), HiitRequest::REST)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TipsQuery {
    pub category: Option<String>,
    pub random: Option<String>,
}

impl TipsQuery {
    pub fn parse(&self) -> ApiResult<(Option<TipCategory>, bool)> {
        Ok((
            choice("category", self.category.as_deref())?,
            flag(self.random.as_deref()),
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    pub fn parse(&self) -> ApiResult<String> {
        non_blank(self.q.as_deref())
            .map(str::to_string)
            .ok_or_else(|| ApiError::InvalidInput("q is required".to_string()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<String>,
}

impl LimitQuery {
    pub const LIMIT: CountRange = CountRange::new(100, 1, 100);

    pub fn parse(&self) -> ApiResult<usize> {
        Ok(count("limit", self.limit.as_deref(), Self::LIMIT)? as usize)
    }
}
