//! Exercise filter - conjunction of optional criteria over a candidate list

use serde::Serialize;

use crate::catalog::CategoryIndex;
use crate::exercises::{CategoryTag, Difficulty, Exercise, Muscle};

/// Criteria are already validated; `None` means "don't care".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExerciseFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle: Option<Muscle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Case-insensitive substring of the equipment field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryTag>,
}

impl ExerciseFilter {
    pub fn muscle(muscle: Muscle) -> Self {
        Self {
            muscle: Some(muscle),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.muscle.is_none()
            && self.difficulty.is_none()
            && self.equipment.is_none()
            && self.category.is_none()
    }

    pub fn matches(&self, exercise: &Exercise, categories: &CategoryIndex) -> bool {
        if self.muscle.is_some_and(|m| exercise.muscle != m) {
            return false;
        }
        if self.difficulty.is_some_and(|d| exercise.difficulty != d) {
            return false;
        }
        if let Some(equipment) = &self.equipment {
            let needle = equipment.to_lowercase();
            if !exercise.equipment.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(tag) = self.category {
            if !categories.has(exercise.id, tag) {
                return false;
            }
        }
        true
    }

    /// Matching candidates in their original order
    pub fn apply(&self, candidates: &[Exercise], categories: &CategoryIndex) -> Vec<Exercise> {
        if self.is_empty() {
            return candidates.to_vec();
        }
        candidates
            .iter()
            .filter(|e| self.matches(e, categories))
            .cloned()
            .collect()
    }

    /// Human-readable criteria for not-found messages
    pub fn describe(&self) -> String {
        use crate::exercises::Variants;

        let mut parts = Vec::new();
        if let Some(m) = self.muscle {
            parts.push(format!("muscle={}", m.as_str()));
        }
        if let Some(d) = self.difficulty {
            parts.push(format!("difficulty={}", d.as_str()));
        }
        if let Some(e) = &self.equipment {
            parts.push(format!("equipment~{}", e));
        }
        if let Some(c) = self.category {
            parts.push(format!("category={}", c.as_str()));
        }
        if parts.is_empty() {
            "no filters".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Name or description contains `query`, case-insensitive
pub fn search(candidates: &[Exercise], query: &str) -> Vec<Exercise> {
    let needle = query.trim().to_lowercase();
    candidates
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&needle)
                || e.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
