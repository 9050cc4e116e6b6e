//! Superset pairing - push/pull, upper/lower and same-muscle

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::catalog::CategoryIndex;
use crate::exercises::{CategoryTag, Exercise, Muscle, Variants};
use crate::params::CountRange;
use crate::sampler::shuffled;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SupersetType {
    PushPull,
    UpperLower,
    SameMuscle,
}

impl Variants for SupersetType {
    fn all() -> &'static [SupersetType] {
        &[SupersetType::PushPull, SupersetType::UpperLower, SupersetType::SameMuscle]
    }

    fn as_str(&self) -> &'static str {
        match self {
            SupersetType::PushPull => "push-pull",
            SupersetType::UpperLower => "upper-lower",
            SupersetType::SameMuscle => "same-muscle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupersetRequest {
    #[serde(rename = "type")]
    pub kind: SupersetType,
    pub sets: u32,
    /// Only used by same-muscle; picked at random when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle: Option<Muscle>,
}

impl SupersetRequest {
    pub const SETS: CountRange = CountRange::new(3, 1, 5);
}

#[derive(Debug, Clone, Serialize)]
pub struct SupersetPair {
    pub set: usize,
    pub first: Exercise,
    pub second: Exercise,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Superset {
    pub supersets: Vec<SupersetPair>,
    pub count: usize,
    /// Muscle actually used for same-muscle pairing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle: Option<Muscle>,
    pub parameters: SupersetRequest,
}

/// Pair index-by-index; stops when either side runs out, nothing is recycled
fn zip_pairs(left: Vec<Exercise>, right: Vec<Exercise>, limit: usize) -> Vec<SupersetPair> {
    left.into_iter()
        .zip(right)
        .take(limit)
        .enumerate()
        .map(|(i, (first, second))| SupersetPair {
            set: i + 1,
            first,
            second,
        })
        .collect()
}

/// Consecutive pairs (0,1), (2,3), … from the first `2 × limit` items;
/// an odd leftover is dropped
fn consecutive_pairs(items: Vec<Exercise>, limit: usize) -> Vec<SupersetPair> {
    let mut iter = items.into_iter().take(limit * 2);
    let mut pairs = Vec::new();
    while let (Some(first), Some(second)) = (iter.next(), iter.next()) {
        pairs.push(SupersetPair {
            set: pairs.len() + 1,
            first,
            second,
        });
    }
    pairs
}

pub fn build_superset<R: Rng + ?Sized>(
    exercises: &[Exercise],
    categories: &CategoryIndex,
    request: SupersetRequest,
    rng: &mut R,
) -> Superset {
    let limit = request.sets as usize;
    let mut muscle = None;

    let supersets = match request.kind {
        SupersetType::PushPull => {
            let (push, pull): (Vec<Exercise>, Vec<Exercise>) = (
                exercises.iter().filter(|e| categories.has(e.id, CategoryTag::Push)).cloned().collect(),
                exercises.iter().filter(|e| categories.has(e.id, CategoryTag::Pull)).cloned().collect(),
            );
            zip_pairs(shuffled(&push, rng), shuffled(&pull, rng), limit)
        }
        SupersetType::UpperLower => {
            let (upper, lower): (Vec<Exercise>, Vec<Exercise>) =
                exercises.iter().cloned().partition(|e| e.muscle.is_upper());
            zip_pairs(shuffled(&upper, rng), shuffled(&lower, rng), limit)
        }
        SupersetType::SameMuscle => {
            let target = request
                .muscle
                .or_else(|| Muscle::all().choose(rng).copied())
                .unwrap_or(Muscle::Chest);
            muscle = Some(target);
            let pool: Vec<Exercise> = exercises.iter().filter(|e| e.muscle == target).cloned().collect();
            consecutive_pairs(shuffled(&pool, rng), limit)
        }
    };

    Superset {
        count: supersets.len(),
        supersets,
        muscle,
        parameters: request,
    }
}
