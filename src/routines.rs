//! Warm-up and stretch side tables

use serde::{Deserialize, Serialize};

use crate::exercises::Variants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WarmupType {
    Cardio,   // Raise heart rate
    Dynamic,  // Movement prep
    Mobility, // Joint range of motion
}

impl Variants for WarmupType {
    fn all() -> &'static [WarmupType] {
        &[WarmupType::Cardio, WarmupType::Dynamic, WarmupType::Mobility]
    }

    fn as_str(&self) -> &'static str {
        match self {
            WarmupType::Cardio => "cardio",
            WarmupType::Dynamic => "dynamic",
            WarmupType::Mobility => "mobility",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StretchArea {
    Upper,
    Lower,
    Core,
}

impl Variants for StretchArea {
    fn all() -> &'static [StretchArea] {
        &[StretchArea::Upper, StretchArea::Lower, StretchArea::Core]
    }

    fn as_str(&self) -> &'static str {
        match self {
            StretchArea::Upper => "upper",
            StretchArea::Lower => "lower",
            StretchArea::Core => "core",
        }
    }
}

/// Query keyword selecting every warm-up type
pub const ALL_WARMUPS: &str = "all";

/// Query keyword selecting every stretch area
pub const FULL_BODY: &str = "full";

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WarmupItem {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: WarmupType,
    /// Seconds
    pub duration: u32,
    pub calories: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StretchItem {
    pub name: &'static str,
    pub target_area: StretchArea,
    /// Seconds
    pub duration: u32,
    pub calories: u32,
}

/// Items a routine can be built from
pub trait RoutineItem: Clone {
    fn duration_secs(&self) -> u32;
    fn calories(&self) -> u32;
}

impl RoutineItem for WarmupItem {
    fn duration_secs(&self) -> u32 {
        self.duration
    }

    fn calories(&self) -> u32 {
        self.calories
    }
}

impl RoutineItem for StretchItem {
    fn duration_secs(&self) -> u32 {
        self.duration
    }

    fn calories(&self) -> u32 {
        self.calories
    }
}

pub const WARMUPS: &[WarmupItem] = &[
    WarmupItem { name: "Jumping Jacks", kind: WarmupType::Cardio, duration: 60, calories: 8 },
    WarmupItem { name: "High Knees", kind: WarmupType::Cardio, duration: 45, calories: 7 },
    WarmupItem { name: "Jump Rope", kind: WarmupType::Cardio, duration: 90, calories: 12 },
    WarmupItem { name: "Butt Kicks", kind: WarmupType::Cardio, duration: 45, calories: 6 },
    WarmupItem { name: "Arm Circles", kind: WarmupType::Dynamic, duration: 30, calories: 2 },
    WarmupItem { name: "Leg Swings", kind: WarmupType::Dynamic, duration: 45, calories: 3 },
    WarmupItem { name: "Walking Lunges", kind: WarmupType::Dynamic, duration: 60, calories: 6 },
    WarmupItem { name: "Inchworms", kind: WarmupType::Dynamic, duration: 60, calories: 5 },
    WarmupItem { name: "Hip Circles", kind: WarmupType::Mobility, duration: 30, calories: 2 },
    WarmupItem { name: "Cat-Cow", kind: WarmupType::Mobility, duration: 45, calories: 2 },
    WarmupItem { name: "World's Greatest Stretch", kind: WarmupType::Mobility, duration: 60, calories: 4 },
    WarmupItem { name: "Thoracic Rotations", kind: WarmupType::Mobility, duration: 45, calories: 2 },
];

pub const STRETCHES: &[StretchItem] = &[
    StretchItem { name: "Doorway Chest Stretch", target_area: StretchArea::Upper, duration: 30, calories: 1 },
    StretchItem { name: "Cross-Body Shoulder Stretch", target_area: StretchArea::Upper, duration: 30, calories: 1 },
    StretchItem { name: "Overhead Triceps Stretch", target_area: StretchArea::Upper, duration: 30, calories: 1 },
    StretchItem { name: "Child's Pose", target_area: StretchArea::Upper, duration: 60, calories: 2 },
    StretchItem { name: "Standing Quad Stretch", target_area: StretchArea::Lower, duration: 30, calories: 1 },
    StretchItem { name: "Seated Hamstring Stretch", target_area: StretchArea::Lower, duration: 45, calories: 1 },
    StretchItem { name: "Pigeon Pose", target_area: StretchArea::Lower, duration: 60, calories: 2 },
    StretchItem { name: "Calf Stretch", target_area: StretchArea::Lower, duration: 30, calories: 1 },
    StretchItem { name: "Cobra Stretch", target_area: StretchArea::Core, duration: 30, calories: 1 },
    StretchItem { name: "Supine Spinal Twist", target_area: StretchArea::Core, duration: 45, calories: 1 },
    StretchItem { name: "Standing Side Bend", target_area: StretchArea::Core, duration: 30, calories: 1 },
];

/// Warm-ups of one type, or all of them for `None`
pub fn warmups_of(kind: Option<WarmupType>) -> Vec<WarmupItem> {
    WARMUPS
        .iter()
        .filter(|w| kind.is_none_or(|k| w.kind == k))
        .copied()
        .collect()
}

/// Stretches for one area, or full body for `None`
pub fn stretches_for(area: Option<StretchArea>) -> Vec<StretchItem> {
    STRETCHES
        .iter()
        .filter(|s| area.is_none_or(|a| s.target_area == a))
        .copied()
        .collect()
}
