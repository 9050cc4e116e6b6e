//! Workout history - bounded, append-only log

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entries kept; older ones are evicted first
pub const HISTORY_CAPACITY: usize = 100;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHistoryEntry {
    pub workout_type: Option<String>,
    #[serde(default)]
    pub exercises: Vec<Value>,
    /// Minutes
    pub duration: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub workout_type: String,
    pub exercises: Vec<Value>,
    pub duration: Option<u32>,
    pub notes: Option<String>,
    pub total_calories: f64,
}

/// `calories` of one submitted exercise: numbers and numeric strings count,
/// anything else is zero
fn calories_of(exercise: &Value) -> f64 {
    match exercise.get("calories") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub fn total_calories(exercises: &[Value]) -> f64 {
    exercises.iter().map(calories_of).sum()
}

#[derive(Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    next_id: u64,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            next_id: 1,
            capacity,
        }
    }

    pub fn append(&mut self, new: NewHistoryEntry, timestamp: DateTime<Utc>) -> HistoryEntry {
        let entry = HistoryEntry {
            id: self.next_id,
            timestamp,
            workout_type: new
                .workout_type
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "general".to_string()),
            total_calories: total_calories(&new.exercises),
            exercises: new.exercises,
            duration: new.duration,
            notes: new.notes,
        };
        self.next_id += 1;

        self.entries.push_back(entry.clone());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        entry
    }

    /// Newest first
    pub fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry and returns how many there were. Ids keep counting.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }
}
