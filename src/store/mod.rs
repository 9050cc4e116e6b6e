//! In-memory store - custom exercises, favorites and workout history
//!
//! Process-lifetime state only. Each collection has its own lock and no
//! operation holds more than one of them at a time.

pub mod history;

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::{ApiError, ApiResult};
use crate::exercises::{CUSTOM_ID_START, Difficulty, Exercise, Muscle};
use crate::params::required_choice;

pub use history::{HISTORY_CAPACITY, History, HistoryEntry, NewHistoryEntry};

/// Body of an add-exercise request; only name, muscle and difficulty are required
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewExercise {
    pub name: Option<String>,
    pub muscle: Option<String>,
    pub difficulty: Option<String>,
    pub description: Option<String>,
    pub equipment: Option<String>,
    pub sets: Option<u32>,
    /// String ("8-12") or number
    pub reps: Option<Value>,
    pub duration: Option<Value>,
    pub calories: Option<u32>,
}

fn text_or_number(value: Option<Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

impl NewExercise {
    /// Validates and fills defaults; the id is assigned by the store
    fn into_exercise(self, id: u32) -> ApiResult<Exercise> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ApiError::InvalidInput("name is required".to_string()))?
            .to_string();
        let muscle: Muscle = required_choice("muscle", self.muscle.as_deref())?;
        let difficulty: Difficulty = required_choice("difficulty", self.difficulty.as_deref())?;

        Ok(Exercise {
            id,
            name,
            muscle,
            difficulty,
            description: self.description.unwrap_or_default(),
            equipment: self
                .equipment
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| Exercise::DEFAULT_EQUIPMENT.to_string()),
            sets: self.sets.unwrap_or(Exercise::DEFAULT_SETS),
            reps: text_or_number(self.reps, Exercise::DEFAULT_REPS),
            duration: text_or_number(self.duration, Exercise::DEFAULT_DURATION),
            calories: self.calories.unwrap_or(Exercise::DEFAULT_CALORIES),
            custom: true,
        })
    }
}

#[derive(Debug)]
struct CustomExercises {
    items: Vec<Exercise>,
    next_id: u32,
}

impl Default for CustomExercises {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: CUSTOM_ID_START,
        }
    }
}

/// Collection sizes for the stats endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCounts {
    pub builtin_exercises: usize,
    pub custom_exercises: usize,
    pub favorites: usize,
    pub history_entries: usize,
}

pub struct Store {
    catalog: Arc<Catalog>,
    custom: Mutex<CustomExercises>,
    favorites: Mutex<BTreeSet<u32>>,
    history: Mutex<History>,
}

impl Store {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            custom: Mutex::new(CustomExercises::default()),
            favorites: Mutex::new(BTreeSet::new()),
            history: Mutex::new(History::default()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Snapshot of built-in followed by custom exercises
    pub async fn exercises(&self) -> Vec<Exercise> {
        let custom = self.custom.lock().await;
        self.catalog.combined(&custom.items)
    }

    pub async fn find_exercise(&self, id: u32) -> Option<Exercise> {
        if let Some(exercise) = self.catalog.find(id) {
            return Some(exercise.clone());
        }
        let custom = self.custom.lock().await;
        custom.items.iter().find(|e| e.id == id).cloned()
    }

    pub async fn add_exercise(&self, new: NewExercise) -> ApiResult<Exercise> {
        let mut custom = self.custom.lock().await;
        let exercise = new.into_exercise(custom.next_id)?;
        custom.next_id += 1;
        custom.items.push(exercise.clone());

        info!("Added custom exercise {} ({})", exercise.id, exercise.name);
        Ok(exercise)
    }

    /// Built-in ids are protected; only custom exercises can be removed
    pub async fn delete_exercise(&self, id: u32) -> ApiResult<Exercise> {
        if id < CUSTOM_ID_START {
            return Err(ApiError::Forbidden(format!(
                "Exercise {id} is built-in and cannot be deleted"
            )));
        }

        let mut custom = self.custom.lock().await;
        let index = custom
            .items
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Custom exercise {id} not found")))?;
        let removed = custom.items.remove(index);

        info!("Deleted custom exercise {} ({})", removed.id, removed.name);
        Ok(removed)
    }

    pub async fn favorite_ids(&self) -> Vec<u32> {
        self.favorites.lock().await.iter().copied().collect()
    }

    /// Favorited exercises; ids whose custom exercise was deleted are skipped
    pub async fn favorites(&self) -> Vec<Exercise> {
        let ids = self.favorite_ids().await;
        let exercises = self.exercises().await;
        ids.iter()
            .filter_map(|id| exercises.iter().find(|e| e.id == *id).cloned())
            .collect()
    }

    pub async fn add_favorite(&self, id: u32) -> ApiResult<Exercise> {
        let exercise = self
            .find_exercise(id)
            .await
            .ok_or_else(|| ApiError::NotFound(format!("Exercise {id} not found")))?;

        let mut favorites = self.favorites.lock().await;
        if !favorites.insert(id) {
            return Err(ApiError::Conflict(format!("Exercise {id} is already a favorite")));
        }

        info!("Exercise {} added to favorites", id);
        Ok(exercise)
    }

    pub async fn remove_favorite(&self, id: u32) -> ApiResult<()> {
        let mut favorites = self.favorites.lock().await;
        if !favorites.remove(&id) {
            return Err(ApiError::NotFound(format!("Exercise {id} is not a favorite")));
        }

        info!("Exercise {} removed from favorites", id);
        Ok(())
    }

    pub async fn append_history(&self, new: NewHistoryEntry) -> HistoryEntry {
        let mut history = self.history.lock().await;
        let entry = history.append(new, Utc::now());
        info!("Logged workout {} ({})", entry.id, entry.workout_type);
        entry
    }

    pub async fn history(&self, limit: usize) -> Vec<HistoryEntry> {
        self.history.lock().await.recent(limit)
    }

    pub async fn clear_history(&self) -> usize {
        let removed = self.history.lock().await.clear();
        info!("Cleared {} history entries", removed);
        removed
    }

    pub async fn counts(&self) -> StoreCounts {
        let custom_exercises = self.custom.lock().await.items.len();
        let favorites = self.favorites.lock().await.len();
        let history_entries = self.history.lock().await.len();
        StoreCounts {
            builtin_exercises: self.catalog.exercises().len(),
            custom_exercises,
            favorites,
            history_entries,
        }
    }
}
