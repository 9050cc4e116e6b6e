//! Exercise definitions - built-in exercise table and its enumerations

use serde::{Deserialize, Serialize};

/// Closed set of string-named values accepted as request parameters.
///
/// Matching is case-insensitive; the canonical spelling is [`Variants::as_str`].
pub trait Variants: Sized + Copy + PartialEq + 'static {
    fn all() -> &'static [Self];

    fn as_str(&self) -> &'static str;

    /// Canonical names, in declaration order
    fn names() -> Vec<&'static str> {
        Self::all().iter().map(|v| v.as_str()).collect()
    }

    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(raw))
    }
}

/// Muscle groups an exercise targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Muscle {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
}

impl Muscle {
    /// Upper-body half of the upper/lower superset split
    pub fn is_upper(&self) -> bool {
        matches!(self, Muscle::Chest | Muscle::Back | Muscle::Shoulders | Muscle::Arms)
    }
}

impl Variants for Muscle {
    fn all() -> &'static [Muscle] {
        &[
            Muscle::Chest,
            Muscle::Back,
            Muscle::Legs,
            Muscle::Shoulders,
            Muscle::Arms,
            Muscle::Core,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Muscle::Chest => "chest",
            Muscle::Back => "back",
            Muscle::Legs => "legs",
            Muscle::Shoulders => "shoulders",
            Muscle::Arms => "arms",
            Muscle::Core => "core",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Variants for Difficulty {
    fn all() -> &'static [Difficulty] {
        &[Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Movement categories, derived from exercise ids (see [`crate::catalog::CategoryIndex`])
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Compound,  // Multi-joint
    Isolation, // Single-joint
    Push,
    Pull,
}

impl Variants for CategoryTag {
    fn all() -> &'static [CategoryTag] {
        &[
            CategoryTag::Compound,
            CategoryTag::Isolation,
            CategoryTag::Push,
            CategoryTag::Pull,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            CategoryTag::Compound => "compound",
            CategoryTag::Isolation => "isolation",
            CategoryTag::Push => "push",
            CategoryTag::Pull => "pull",
        }
    }
}

/// First id handed out to user-added exercises; everything below is built-in
pub const CUSTOM_ID_START: u32 = 1000;

/// Catalog exercise, built-in or custom
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: u32,
    pub name: String,
    pub muscle: Muscle,
    pub difficulty: Difficulty,
    pub description: String,
    pub equipment: String,
    pub sets: u32,
    pub reps: String,
    pub duration: String,
    pub calories: u32,
    pub custom: bool,
}

impl Exercise {
    pub const DEFAULT_EQUIPMENT: &'static str = "none";
    pub const DEFAULT_SETS: u32 = 3;
    pub const DEFAULT_REPS: &'static str = "10-12";
    pub const DEFAULT_DURATION: &'static str = "5 min";
    pub const DEFAULT_CALORIES: u32 = 50;
}

/// Static row of the built-in table
#[derive(Debug, Clone, Copy)]
pub struct BuiltinExercise {
    pub id: u32,
    pub name: &'static str,
    pub muscle: Muscle,
    pub difficulty: Difficulty,
    pub equipment: &'static str,
    pub description: &'static str,
    pub sets: u32,
    pub reps: &'static str,
    pub duration: &'static str,
    pub calories: u32,
}

impl BuiltinExercise {
    pub fn to_exercise(&self) -> Exercise {
        Exercise {
            id: self.id,
            name: self.name.to_string(),
            muscle: self.muscle,
            difficulty: self.difficulty,
            description: self.description.to_string(),
            equipment: self.equipment.to_string(),
            sets: self.sets,
            reps: self.reps.to_string(),
            duration: self.duration.to_string(),
            calories: self.calories,
            custom: false,
        }
    }
}

/// Built-in exercises, six per muscle group, two per difficulty
pub const BUILTIN_EXERCISES: &[BuiltinExercise] = &[
    // Chest
    BuiltinExercise {
        id: 1,
        name: "Push-Up",
        muscle: Muscle::Chest,
        difficulty: Difficulty::Beginner,
        equipment: "none",
        description: "Hands shoulder-width apart, lower the chest to the floor and press back up",
        sets: 3,
        reps: "10-15",
        duration: "5 min",
        calories: 40,
    },
    BuiltinExercise {
        id: 2,
        name: "Incline Push-Up",
        muscle: Muscle::Chest,
        difficulty: Difficulty::Beginner,
        equipment: "bench",
        description: "Push-up with hands on a bench, easier on the shoulders",
        sets: 3,
        reps: "12-15",
        duration: "5 min",
        calories: 35,
    },
    BuiltinExercise {
        id: 3,
        name: "Dumbbell Bench Press",
        muscle: Muscle::Chest,
        difficulty: Difficulty::Intermediate,
        equipment: "dumbbells, bench",
        description: "Lying on a flat bench, press the dumbbells up until the arms are straight",
        sets: 4,
        reps: "8-12",
        duration: "8 min",
        calories: 60,
    },
    BuiltinExercise {
        id: 4,
        name: "Dumbbell Fly",
        muscle: Muscle::Chest,
        difficulty: Difficulty::Intermediate,
        equipment: "dumbbells, bench",
        description: "Open the arms wide with a soft elbow bend, squeeze the chest to bring them together",
        sets: 3,
        reps: "10-12",
        duration: "6 min",
        calories: 45,
    },
    BuiltinExercise {
        id: 5,
        name: "Barbell Bench Press",
        muscle: Muscle::Chest,
        difficulty: Difficulty::Advanced,
        equipment: "barbell, bench",
        description: "Lower the bar to mid-chest under control and drive it back up",
        sets: 5,
        reps: "5",
        duration: "12 min",
        calories: 80,
    },
    BuiltinExercise {
        id: 6,
        name: "Weighted Dip",
        muscle: Muscle::Chest,
        difficulty: Difficulty::Advanced,
        equipment: "dip station, weight belt",
        description: "Lean forward on the bars and dip until the shoulders pass the elbows",
        sets: 4,
        reps: "6-8",
        duration: "10 min",
        calories: 75,
    },
    // Back
    BuiltinExercise {
        id: 7,
        name: "Superman",
        muscle: Muscle::Back,
        difficulty: Difficulty::Beginner,
        equipment: "none",
        description: "Lying face down, lift arms and legs off the floor and hold",
        sets: 3,
        reps: "12",
        duration: "4 min",
        calories: 25,
    },
    BuiltinExercise {
        id: 8,
        name: "Resistance Band Row",
        muscle: Muscle::Back,
        difficulty: Difficulty::Beginner,
        equipment: "resistance band",
        description: "Anchor the band in front, pull the handles to the ribs squeezing the shoulder blades",
        sets: 3,
        reps: "12-15",
        duration: "5 min",
        calories: 35,
    },
    BuiltinExercise {
        id: 9,
        name: "Bent-Over Dumbbell Row",
        muscle: Muscle::Back,
        difficulty: Difficulty::Intermediate,
        equipment: "dumbbells",
        description: "Hinge at the hips with a flat back and row the dumbbells to the hips",
        sets: 4,
        reps: "8-12",
        duration: "8 min",
        calories: 55,
    },
    BuiltinExercise {
        id: 10,
        name: "Lat Pulldown",
        muscle: Muscle::Back,
        difficulty: Difficulty::Intermediate,
        equipment: "cable machine",
        description: "Pull the bar to the upper chest, leading with the elbows",
        sets: 3,
        reps: "10-12",
        duration: "7 min",
        calories: 50,
    },
    BuiltinExercise {
        id: 11,
        name: "Pull-Up",
        muscle: Muscle::Back,
        difficulty: Difficulty::Advanced,
        equipment: "pull-up bar",
        description: "From a dead hang, pull until the chin clears the bar",
        sets: 4,
        reps: "6-10",
        duration: "8 min",
        calories: 70,
    },
    BuiltinExercise {
        id: 12,
        name: "Barbell Deadlift",
        muscle: Muscle::Back,
        difficulty: Difficulty::Advanced,
        equipment: "barbell",
        description: "Drive through the floor and stand tall with the bar close to the legs",
        sets: 5,
        reps: "5",
        duration: "12 min",
        calories: 100,
    },
    // Legs
    BuiltinExercise {
        id: 13,
        name: "Bodyweight Squat",
        muscle: Muscle::Legs,
        difficulty: Difficulty::Beginner,
        equipment: "none",
        description: "Sit the hips back and down until the thighs are parallel to the floor",
        sets: 3,
        reps: "15-20",
        duration: "5 min",
        calories: 45,
    },
    BuiltinExercise {
        id: 14,
        name: "Glute Bridge",
        muscle: Muscle::Legs,
        difficulty: Difficulty::Beginner,
        equipment: "none",
        description: "Lying on the back, drive the hips up and squeeze the glutes at the top",
        sets: 3,
        reps: "15",
        duration: "4 min",
        calories: 30,
    },
    BuiltinExercise {
        id: 15,
        name: "Walking Lunge",
        muscle: Muscle::Legs,
        difficulty: Difficulty::Intermediate,
        equipment: "dumbbells",
        description: "Step forward into a lunge and bring the back foot through to the next step",
        sets: 3,
        reps: "12 per leg",
        duration: "8 min",
        calories: 65,
    },
    BuiltinExercise {
        id: 16,
        name: "Romanian Deadlift",
        muscle: Muscle::Legs,
        difficulty: Difficulty::Intermediate,
        equipment: "dumbbells",
        description: "Hinge forward with soft knees until the hamstrings stretch, then stand up",
        sets: 3,
        reps: "10-12",
        duration: "7 min",
        calories: 60,
    },
    BuiltinExercise {
        id: 17,
        name: "Barbell Back Squat",
        muscle: Muscle::Legs,
        difficulty: Difficulty::Advanced,
        equipment: "barbell, squat rack",
        description: "Bar on the upper back, squat below parallel and drive up",
        sets: 5,
        reps: "5",
        duration: "12 min",
        calories: 100,
    },
    BuiltinExercise {
        id: 18,
        name: "Pistol Squat",
        muscle: Muscle::Legs,
        difficulty: Difficulty::Advanced,
        equipment: "none",
        description: "Single-leg squat with the free leg held straight in front",
        sets: 3,
        reps: "5 per leg",
        duration: "8 min",
        calories: 60,
    },
    // Shoulders
    BuiltinExercise {
        id: 19,
        name: "Pike Push-Up",
        muscle: Muscle::Shoulders,
        difficulty: Difficulty::Beginner,
        equipment: "none",
        description: "Hips high in an inverted V, lower the head toward the floor",
        sets: 3,
        reps: "8-10",
        duration: "5 min",
        calories: 35,
    },
    BuiltinExercise {
        id: 20,
        name: "Lateral Raise",
        muscle: Muscle::Shoulders,
        difficulty: Difficulty::Beginner,
        equipment: "dumbbells",
        description: "Raise light dumbbells out to the sides up to shoulder height",
        sets: 3,
        reps: "12-15",
        duration: "5 min",
        calories: 30,
    },
    BuiltinExercise {
        id: 21,
        name: "Dumbbell Shoulder Press",
        muscle: Muscle::Shoulders,
        difficulty: Difficulty::Intermediate,
        equipment: "dumbbells",
        description: "Press the dumbbells overhead from shoulder height",
        sets: 4,
        reps: "8-12",
        duration: "8 min",
        calories: 55,
    },
    BuiltinExercise {
        id: 22,
        name: "Face Pull",
        muscle: Muscle::Shoulders,
        difficulty: Difficulty::Intermediate,
        equipment: "cable machine",
        description: "Pull the rope toward the face, elbows high, rotating the hands outward",
        sets: 3,
        reps: "12-15",
        duration: "6 min",
        calories: 35,
    },
    BuiltinExercise {
        id: 23,
        name: "Handstand Push-Up",
        muscle: Muscle::Shoulders,
        difficulty: Difficulty::Advanced,
        equipment: "none",
        description: "Against a wall, lower the head to the floor and press back to lockout",
        sets: 4,
        reps: "5-8",
        duration: "8 min",
        calories: 65,
    },
    BuiltinExercise {
        id: 24,
        name: "Barbell Overhead Press",
        muscle: Muscle::Shoulders,
        difficulty: Difficulty::Advanced,
        equipment: "barbell",
        description: "Standing, press the bar from the collarbone to overhead lockout",
        sets: 5,
        reps: "5",
        duration: "10 min",
        calories: 75,
    },
    // Arms
    BuiltinExercise {
        id: 25,
        name: "Bench Dip",
        muscle: Muscle::Arms,
        difficulty: Difficulty::Beginner,
        equipment: "bench",
        description: "Hands on a bench behind you, bend the elbows to lower the hips",
        sets: 3,
        reps: "10-12",
        duration: "4 min",
        calories: 30,
    },
    BuiltinExercise {
        id: 26,
        name: "Dumbbell Bicep Curl",
        muscle: Muscle::Arms,
        difficulty: Difficulty::Beginner,
        equipment: "dumbbells",
        description: "Curl the dumbbells up keeping the elbows pinned to the sides",
        sets: 3,
        reps: "10-12",
        duration: "5 min",
        calories: 30,
    },
    BuiltinExercise {
        id: 27,
        name: "Hammer Curl",
        muscle: Muscle::Arms,
        difficulty: Difficulty::Intermediate,
        equipment: "dumbbells",
        description: "Curl with a neutral grip, thumbs pointing up",
        sets: 3,
        reps: "10-12",
        duration: "5 min",
        calories: 35,
    },
    BuiltinExercise {
        id: 28,
        name: "Skull Crusher",
        muscle: Muscle::Arms,
        difficulty: Difficulty::Intermediate,
        equipment: "barbell, bench",
        description: "Lying on a bench, lower the bar to the forehead by bending only the elbows",
        sets: 3,
        reps: "8-12",
        duration: "6 min",
        calories: 40,
    },
    BuiltinExercise {
        id: 29,
        name: "Chin-Up",
        muscle: Muscle::Arms,
        difficulty: Difficulty::Advanced,
        equipment: "pull-up bar",
        description: "Underhand grip pull-up, focusing on the biceps",
        sets: 4,
        reps: "6-10",
        duration: "8 min",
        calories: 65,
    },
    BuiltinExercise {
        id: 30,
        name: "Close-Grip Bench Press",
        muscle: Muscle::Arms,
        difficulty: Difficulty::Advanced,
        equipment: "barbell, bench",
        description: "Bench press with hands inside shoulder width to load the triceps",
        sets: 4,
        reps: "6-8",
        duration: "10 min",
        calories: 70,
    },
    // Core
    BuiltinExercise {
        id: 31,
        name: "Plank",
        muscle: Muscle::Core,
        difficulty: Difficulty::Beginner,
        equipment: "none",
        description: "Hold a straight line from head to heels on the forearms",
        sets: 3,
        reps: "30-60 sec",
        duration: "4 min",
        calories: 20,
    },
    BuiltinExercise {
        id: 32,
        name: "Dead Bug",
        muscle: Muscle::Core,
        difficulty: Difficulty::Beginner,
        equipment: "none",
        description: "On the back, extend opposite arm and leg while keeping the lower back down",
        sets: 3,
        reps: "10 per side",
        duration: "4 min",
        calories: 20,
    },
    BuiltinExercise {
        id: 33,
        name: "Russian Twist",
        muscle: Muscle::Core,
        difficulty: Difficulty::Intermediate,
        equipment: "medicine ball",
        description: "Seated with feet raised, rotate the ball from side to side",
        sets: 3,
        reps: "20",
        duration: "5 min",
        calories: 35,
    },
    BuiltinExercise {
        id: 34,
        name: "Hanging Knee Raise",
        muscle: Muscle::Core,
        difficulty: Difficulty::Intermediate,
        equipment: "pull-up bar",
        description: "Hang from the bar and draw the knees toward the chest without swinging",
        sets: 3,
        reps: "10-15",
        duration: "5 min",
        calories: 40,
    },
    BuiltinExercise {
        id: 35,
        name: "Ab Wheel Rollout",
        muscle: Muscle::Core,
        difficulty: Difficulty::Advanced,
        equipment: "ab wheel",
        description: "From the knees, roll out as far as possible with a braced core and return",
        sets: 4,
        reps: "8-12",
        duration: "6 min",
        calories: 50,
    },
    BuiltinExercise {
        id: 36,
        name: "Dragon Flag",
        muscle: Muscle::Core,
        difficulty: Difficulty::Advanced,
        equipment: "bench",
        description: "Gripping the bench behind the head, lower the rigid body slowly",
        sets: 3,
        reps: "5-8",
        duration: "6 min",
        calories: 55,
    },
];

/// Ids tagged as multi-joint movements
pub const COMPOUND_IDS: &[u32] = &[
    1, 2, 3, 5, 6, 8, 9, 10, 11, 12, 13, 15, 16, 17, 18, 19, 21, 23, 24, 29, 30, 35, 36,
];

/// Ids tagged as single-joint movements
pub const ISOLATION_IDS: &[u32] = &[4, 7, 14, 20, 22, 25, 26, 27, 28, 31, 32, 33, 34];

pub const PUSH_IDS: &[u32] = &[1, 2, 3, 4, 5, 6, 19, 21, 23, 24, 25, 28, 30];

pub const PULL_IDS: &[u32] = &[8, 9, 10, 11, 12, 22, 26, 27, 29];

pub fn get_builtin_exercises() -> Vec<Exercise> {
    BUILTIN_EXERCISES.iter().map(BuiltinExercise::to_exercise).collect()
}
