//! Warm-up, stretch and cooldown routines

use rand::Rng;
use serde::Serialize;

use super::format_duration;
use crate::exercises::Variants;
use crate::params::CountRange;
use crate::routines::{
    ALL_WARMUPS, FULL_BODY, RoutineItem, StretchArea, StretchItem, WarmupItem, WarmupType,
    stretches_for, warmups_of,
};
use crate::sampler::sample;

/// `selection: None` means every tag (`all` / `full`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutineRequest<T> {
    pub selection: Option<T>,
    pub count: u32,
}

impl<T> RoutineRequest<T> {
    pub const COUNT: CountRange = CountRange::new(5, 1, 10);
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineParameters {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_area: Option<&'static str>,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine<T> {
    pub routine: &'static str,
    pub items: Vec<T>,
    pub count: usize,
    pub total_duration_secs: u32,
    /// `m:ss`
    pub total_duration: String,
    pub total_calories: u32,
    pub parameters: RoutineParameters,
}

fn compose<T: RoutineItem, R: Rng + ?Sized>(
    routine: &'static str,
    pool: &[T],
    parameters: RoutineParameters,
    rng: &mut R,
) -> Routine<T> {
    let items = sample(pool, parameters.count as usize, rng);
    let total_duration_secs = items.iter().map(RoutineItem::duration_secs).sum();
    let total_calories = items.iter().map(RoutineItem::calories).sum();

    Routine {
        routine,
        count: items.len(),
        items,
        total_duration_secs,
        total_duration: format_duration(total_duration_secs),
        total_calories,
        parameters,
    }
}

pub fn build_warmup<R: Rng + ?Sized>(
    request: RoutineRequest<WarmupType>,
    rng: &mut R,
) -> Routine<WarmupItem> {
    let parameters = RoutineParameters {
        kind: Some(request.selection.map_or(ALL_WARMUPS, |k| k.as_str())),
        target_area: None,
        count: request.count,
    };
    compose("warmup", &warmups_of(request.selection), parameters, rng)
}

pub fn build_stretches<R: Rng + ?Sized>(
    request: RoutineRequest<StretchArea>,
    rng: &mut R,
) -> Routine<StretchItem> {
    let parameters = RoutineParameters {
        kind: None,
        target_area: Some(request.selection.map_or(FULL_BODY, |a| a.as_str())),
        count: request.count,
    };
    compose("stretch", &stretches_for(request.selection), parameters, rng)
}

/// Full-body stretches, reported as a cooldown
pub fn build_cooldown<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Routine<StretchItem> {
    let parameters = RoutineParameters {
        kind: None,
        target_area: Some(FULL_BODY),
        count,
    };
    compose("cooldown", &stretches_for(None), parameters, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_warmup_filters_by_type() {
        let mut rng = StdRng::seed_from_u64(1);
        let request = RoutineRequest {
            selection: Some(WarmupType::Mobility),
            count: 10,
        };
        let routine = build_warmup(request, &mut rng);
        assert!(routine.items.iter().all(|w| w.kind == WarmupType::Mobility));
        assert_eq!(routine.count, warmups_of(Some(WarmupType::Mobility)).len());
        assert_eq!(routine.parameters.kind, Some("mobility"));
    }

    #[test]
    fn test_warmup_totals() {
        let mut rng = StdRng::seed_from_u64(2);
        let request = RoutineRequest { selection: None, count: 4 };
        let routine = build_warmup(request, &mut rng);

        assert_eq!(routine.items.len(), 4);
        let secs: u32 = routine.items.iter().map(|w| w.duration).sum();
        let calories: u32 = routine.items.iter().map(|w| w.calories).sum();
        assert_eq!(routine.total_duration_secs, secs);
        assert_eq!(routine.total_calories, calories);
        assert_eq!(routine.total_duration, format_duration(secs));
        assert_eq!(routine.parameters.kind, Some("all"));
    }

    #[test]
    fn test_stretches_full_passes_through() {
        let mut rng = StdRng::seed_from_u64(3);
        let request = RoutineRequest { selection: None, count: 10 };
        let routine = build_stretches(request, &mut rng);
        assert_eq!(routine.count, 10);
        assert_eq!(routine.parameters.target_area, Some("full"));
        assert_eq!(routine.routine, "stretch");
    }

    #[test]
    fn test_stretches_by_area() {
        let mut rng = StdRng::seed_from_u64(4);
        let request = RoutineRequest {
            selection: Some(StretchArea::Lower),
            count: 2,
        };
        let routine = build_stretches(request, &mut rng);
        assert_eq!(routine.count, 2);
        assert!(routine.items.iter().all(|s| s.target_area == StretchArea::Lower));
    }

    #[test]
    fn test_cooldown_named_and_bounded() {
        let mut rng = StdRng::seed_from_u64(5);
        let routine = build_cooldown(3, &mut rng);
        assert_eq!(routine.routine, "cooldown");
        assert_eq!(routine.count, 3);
    }

    #[test]
    fn test_empty_pool_is_zero_length_routine() {
        let mut rng = StdRng::seed_from_u64(6);
        let parameters = RoutineParameters {
            kind: Some("cardio"),
            target_area: None,
            count: 5,
        };
        let routine = compose::<WarmupItem, _>("warmup", &[], parameters, &mut rng);
        assert_eq!(routine.count, 0);
        assert_eq!(routine.total_duration_secs, 0);
        assert_eq!(routine.total_duration, "0:00");
        assert_eq!(routine.total_calories, 0);
    }
}
