//! Exercise catalog - static exercise table and the canonical training vocabularies

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::theme;

/// Muscle groups a training day can focus on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    FullBody, // pseudo-group, expands to every primary group
}

/// Primary groups in the order a full-body day walks them
pub const PRIMARY_GROUPS: &[MuscleGroup] = &[
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Shoulders,
    MuscleGroup::Legs,
    MuscleGroup::Arms,
    MuscleGroup::Core,
];

impl MuscleGroup {
    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Core => "core",
            MuscleGroup::FullBody => "full body",
        }
    }

    /// All muscle groups for iteration
    pub fn all() -> &'static [MuscleGroup] {
        &[
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Legs,
            MuscleGroup::Core,
            MuscleGroup::FullBody,
        ]
    }

    /// Strict lookup by plain label, snake_case name or themed alias
    pub fn parse(label: &str) -> Option<Self> {
        let wanted = normalize(label);
        Self::all()
            .iter()
            .copied()
            .find(|g| normalize(g.label()) == wanted)
            .or_else(|| theme::muscle_group_alias(&wanted))
    }
}

/// Training goal picked in the questionnaire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    MuscleGain,
    Strength,
    FatLoss,
    Conditioning,
    #[default]
    GeneralFitness,
    Athleticism,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::MuscleGain => "muscle gain",
            Goal::Strength => "strength",
            Goal::FatLoss => "fat loss",
            Goal::Conditioning => "conditioning",
            Goal::GeneralFitness => "general fitness",
            Goal::Athleticism => "athleticism",
        }
    }

    pub fn all() -> &'static [Goal] {
        &[
            Goal::MuscleGain,
            Goal::Strength,
            Goal::FatLoss,
            Goal::Conditioning,
            Goal::GeneralFitness,
            Goal::Athleticism,
        ]
    }

    /// Lenient lookup, unknown labels fall back to the default goal
    pub fn from_label(label: &str) -> Self {
        let wanted = normalize(label);
        Self::all()
            .iter()
            .copied()
            .find(|g| normalize(g.label()) == wanted)
            .or_else(|| theme::goal_alias(&wanted))
            .unwrap_or_else(|| {
                warn!(label, "unknown goal, using default");
                Self::default()
            })
    }
}

/// Experience tiers, lowest first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Novice,
    Intermediate,
    Advanced,
    Elite,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Novice => "novice",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
            ExperienceLevel::Elite => "elite",
        }
    }

    pub fn all() -> &'static [ExperienceLevel] {
        &[
            ExperienceLevel::Beginner,
            ExperienceLevel::Novice,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
            ExperienceLevel::Elite,
        ]
    }

    /// Lenient lookup, unknown labels fall back to beginner
    pub fn from_label(label: &str) -> Self {
        let wanted = normalize(label);
        Self::all()
            .iter()
            .copied()
            .find(|l| normalize(l.label()) == wanted)
            .or_else(|| theme::level_alias(&wanted))
            .unwrap_or_else(|| {
                warn!(label, "unknown experience level, using default");
                Self::default()
            })
    }
}

/// Lowercase, trim and treat `_`/`-` as spaces so "full_body" matches "full body"
pub(crate) fn normalize(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
}

/// Catalog record. Never mutated; plans get a [`PlannedExercise`] copy.
#[derive(Debug, Clone)]
pub struct Exercise {
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub levels: &'static [ExperienceLevel],
    pub goals: &'static [Goal],
    pub description: Option<&'static str>,
}

impl Exercise {
    pub fn suits(&self, level: ExperienceLevel, goal: Goal) -> bool {
        self.levels.contains(&level) && self.goals.contains(&goal)
    }
}

/// Owned copy of a catalog exercise as placed into a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedExercise {
    pub name: String,
    pub muscle_group: MuscleGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_priority: bool,
}

impl PlannedExercise {
    pub fn from_catalog(exercise: &Exercise, is_priority: bool) -> Self {
        Self {
            name: exercise.name.to_string(),
            muscle_group: exercise.muscle_group,
            description: exercise.description.map(|s| s.to_string()),
            is_priority,
        }
    }
}

const ALL_LEVELS: &[ExperienceLevel] = &[
    ExperienceLevel::Beginner,
    ExperienceLevel::Novice,
    ExperienceLevel::Intermediate,
    ExperienceLevel::Advanced,
    ExperienceLevel::Elite,
];

/// Everyone past the first tier
const TRAINED: &[ExperienceLevel] = &[
    ExperienceLevel::Novice,
    ExperienceLevel::Intermediate,
    ExperienceLevel::Advanced,
    ExperienceLevel::Elite,
];

pub const CATALOG: &[Exercise] = &[
    // Chest
    Exercise {
        name: "Bench Press",
        muscle_group: MuscleGroup::Chest,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain, Goal::Strength],
        description: Some("The classic chest-building exercise that targets the pectoral muscles and triceps."),
    },
    Exercise {
        name: "Push-Ups",
        muscle_group: MuscleGroup::Chest,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain, Goal::FatLoss, Goal::Conditioning],
        description: Some("A bodyweight exercise that works the chest, shoulders, and triceps."),
    },
    Exercise {
        name: "Incline Dumbbell Press",
        muscle_group: MuscleGroup::Chest,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain, Goal::Strength],
        description: Some("Targets the upper chest muscles for balanced development."),
    },
    Exercise {
        name: "Cable Fly",
        muscle_group: MuscleGroup::Chest,
        levels: TRAINED,
        goals: &[Goal::MuscleGain],
        description: Some("Isolates the chest muscles through a full range of motion."),
    },
    Exercise {
        name: "Weighted Dips",
        muscle_group: MuscleGroup::Chest,
        levels: TRAINED,
        goals: &[Goal::MuscleGain, Goal::Strength],
        description: Some("Loads the lower chest and triceps through a deep stretch."),
    },
    // Back
    Exercise {
        name: "Pull-Ups",
        muscle_group: MuscleGroup::Back,
        levels: TRAINED,
        goals: &[Goal::MuscleGain, Goal::Strength],
        description: Some("One of the best exercises for building a strong back and biceps."),
    },
    Exercise {
        name: "Lat Pulldown",
        muscle_group: MuscleGroup::Back,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain],
        description: Some("Targets the latissimus dorsi muscles of the back."),
    },
    Exercise {
        name: "Bent-Over Rows",
        muscle_group: MuscleGroup::Back,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain, Goal::Strength],
        description: Some("Builds thickness in the middle back and lats."),
    },
    Exercise {
        name: "Deadlift",
        muscle_group: MuscleGroup::Back,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain, Goal::Strength],
        description: Some("A compound exercise that builds overall strength and muscle mass."),
    },
    Exercise {
        name: "Renegade Rows",
        muscle_group: MuscleGroup::Back,
        levels: ALL_LEVELS,
        goals: &[Goal::FatLoss, Goal::Conditioning],
        description: Some("A plank-position row that trains the lats and the trunk together."),
    },
    // Shoulders
    Exercise {
        name: "Overhead Press",
        muscle_group: MuscleGroup::Shoulders,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain, Goal::Strength],
        description: Some("Builds strong, well-developed shoulders and upper body strength."),
    },
    Exercise {
        name: "Lateral Raises",
        muscle_group: MuscleGroup::Shoulders,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain],
        description: Some("Isolates the side deltoids for broader shoulders."),
    },
    Exercise {
        name: "Face Pulls",
        muscle_group: MuscleGroup::Shoulders,
        levels: TRAINED,
        goals: &[Goal::MuscleGain, Goal::Strength],
        description: Some("Targets the rear deltoids and upper back for balanced development."),
    },
    Exercise {
        name: "Shrugs",
        muscle_group: MuscleGroup::Shoulders,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain],
        description: Some("Builds the trapezius muscles for a strong-looking upper body."),
    },
    // Legs
    Exercise {
        name: "Squats",
        muscle_group: MuscleGroup::Legs,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain, Goal::Strength, Goal::FatLoss],
        description: Some("The king of leg exercises that builds overall lower body strength and size."),
    },
    Exercise {
        name: "Leg Press",
        muscle_group: MuscleGroup::Legs,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain],
        description: Some("Allows for heavy loading of the quadriceps, hamstrings and glutes."),
    },
    Exercise {
        name: "Romanian Deadlift",
        muscle_group: MuscleGroup::Legs,
        levels: TRAINED,
        goals: &[Goal::MuscleGain, Goal::Strength],
        description: Some("Targets the hamstrings and glutes while strengthening the lower back."),
    },
    Exercise {
        name: "Lunges",
        muscle_group: MuscleGroup::Legs,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain, Goal::FatLoss, Goal::Conditioning],
        description: Some("Builds unilateral leg strength, balance, and coordination."),
    },
    Exercise {
        name: "Box Jumps",
        muscle_group: MuscleGroup::Legs,
        levels: TRAINED,
        goals: &[Goal::Conditioning, Goal::Athleticism],
        description: Some("Explosive jumps that build power in the hips and legs."),
    },
    // Arms
    Exercise {
        name: "Bicep Curls",
        muscle_group: MuscleGroup::Arms,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain],
        description: Some("Directly targets the biceps for arm development."),
    },
    Exercise {
        name: "Tricep Pushdowns",
        muscle_group: MuscleGroup::Arms,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain],
        description: Some("Isolates the triceps for arm definition and size."),
    },
    Exercise {
        name: "Skull Crushers",
        muscle_group: MuscleGroup::Arms,
        levels: TRAINED,
        goals: &[Goal::MuscleGain],
        description: Some("Effectively targets the triceps for growth."),
    },
    Exercise {
        name: "Hammer Curls",
        muscle_group: MuscleGroup::Arms,
        levels: ALL_LEVELS,
        goals: &[Goal::MuscleGain],
        description: Some("Targets the biceps and forearms for balanced arm development."),
    },
    // Core
    Exercise {
        name: "Plank",
        muscle_group: MuscleGroup::Core,
        levels: ALL_LEVELS,
        goals: &[Goal::Strength, Goal::FatLoss],
        description: Some("Builds core stability and endurance."),
    },
    Exercise {
        name: "Russian Twists",
        muscle_group: MuscleGroup::Core,
        levels: ALL_LEVELS,
        goals: &[Goal::Strength, Goal::FatLoss],
        description: Some("Works the obliques and rotational strength."),
    },
    Exercise {
        name: "Hanging Leg Raises",
        muscle_group: MuscleGroup::Core,
        levels: TRAINED,
        goals: &[Goal::Strength, Goal::FatLoss],
        description: Some("Challenges the lower abs and hip flexors."),
    },
    Exercise {
        name: "Ab Wheel Rollout",
        muscle_group: MuscleGroup::Core,
        levels: TRAINED,
        goals: &[Goal::Strength],
        description: Some("One of the most challenging and effective core exercises."),
    },
    // Full body
    Exercise {
        name: "Burpees",
        muscle_group: MuscleGroup::FullBody,
        levels: ALL_LEVELS,
        goals: &[Goal::FatLoss, Goal::Conditioning],
        description: Some("A high-intensity exercise that works the entire body and elevates heart rate."),
    },
    Exercise {
        name: "Kettlebell Swings",
        muscle_group: MuscleGroup::FullBody,
        levels: ALL_LEVELS,
        goals: &[Goal::FatLoss, Goal::Strength, Goal::Athleticism],
        description: Some("Builds power, conditions the body, and burns calories."),
    },
    Exercise {
        name: "Turkish Get-Up",
        muscle_group: MuscleGroup::FullBody,
        levels: TRAINED,
        goals: &[Goal::Strength],
        description: Some("A complex movement that builds total-body coordination and strength."),
    },
    Exercise {
        name: "Mountain Climbers",
        muscle_group: MuscleGroup::FullBody,
        levels: ALL_LEVELS,
        goals: &[Goal::FatLoss, Goal::Conditioning],
        description: Some("A dynamic exercise that builds core strength and cardiovascular fitness."),
    },
];

pub fn get_all_exercises() -> &'static [Exercise] {
    CATALOG
}

pub fn exercises_for_group(group: MuscleGroup) -> Vec<&'static Exercise> {
    CATALOG.iter().filter(|e| e.muscle_group == group).collect()
}

pub fn find_exercise(name: &str) -> Option<&'static Exercise> {
    CATALOG.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}
