//! Tips module - nutrition tips served alongside workouts

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::exercises::Variants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TipCategory {
    PreWorkout,
    PostWorkout,
    Hydration,
    General,
}

impl Variants for TipCategory {
    fn all() -> &'static [TipCategory] {
        &[
            TipCategory::PreWorkout,
            TipCategory::PostWorkout,
            TipCategory::Hydration,
            TipCategory::General,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            TipCategory::PreWorkout => "pre-workout",
            TipCategory::PostWorkout => "post-workout",
            TipCategory::Hydration => "hydration",
            TipCategory::General => "general",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Tip {
    pub category: TipCategory,
    pub text: &'static str,
}

pub const TIPS: &[Tip] = &[
    // === PRE-WORKOUT ===
    Tip {
        category: TipCategory::PreWorkout,
        text: "Eat a balanced meal of carbs and protein 2-3 hours before training.",
    },
    Tip {
        category: TipCategory::PreWorkout,
        text: "A banana or a slice of toast 30-60 minutes before a session is quick, easy fuel.",
    },
    Tip {
        category: TipCategory::PreWorkout,
        text: "Keep high-fat and high-fibre foods light right before training, they digest slowly.",
    },
    // === POST-WORKOUT ===
    Tip {
        category: TipCategory::PostWorkout,
        text: "Aim for 20-40 g of protein within two hours after training to support recovery.",
    },
    Tip {
        category: TipCategory::PostWorkout,
        text: "Pair protein with carbohydrates after long sessions to refill glycogen stores.",
    },
    Tip {
        category: TipCategory::PostWorkout,
        text: "Greek yoghurt with fruit is a simple post-workout snack with protein and carbs.",
    },
    // === HYDRATION ===
    Tip {
        category: TipCategory::Hydration,
        text: "Drink around 500 ml of water two hours before exercising.",
    },
    Tip {
        category: TipCategory::Hydration,
        text: "Sip water every 15-20 minutes during training, more in hot conditions.",
    },
    Tip {
        category: TipCategory::Hydration,
        text: "For sessions over an hour, add electrolytes to replace the sodium lost in sweat.",
    },
    // === GENERAL ===
    Tip {
        category: TipCategory::General,
        text: "Spread protein intake across meals instead of eating it all at once.",
    },
    Tip {
        category: TipCategory::General,
        text: "Whole foods first: vegetables, lean protein, whole grains and healthy fats.",
    },
    Tip {
        category: TipCategory::General,
        text: "Sleep is part of nutrition. Seven to nine hours helps appetite control and recovery.",
    },
];

/// All tips, or only those of one category
pub fn tips_of(category: Option<TipCategory>) -> Vec<Tip> {
    TIPS.iter()
        .filter(|t| category.is_none_or(|c| t.category == c))
        .copied()
        .collect()
}

/// Random tip, optionally limited to one category
pub fn random_tip<R: Rng + ?Sized>(category: Option<TipCategory>, rng: &mut R) -> Option<Tip> {
    tips_of(category).choose(rng).copied()
}
