//! Sets/reps/rest lookup by goal and experience

use serde::{Deserialize, Serialize};

use crate::exercises::{ExperienceLevel, Goal};

/// Baseline volume shared by every slot of a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub sets: u32,
    pub reps: &'static str,
    pub rest_secs: u32,
}

const fn rx(sets: u32, reps: &'static str, rest_secs: u32) -> Prescription {
    Prescription { sets, reps, rest_secs }
}

pub fn prescribe(goal: Goal, level: ExperienceLevel) -> Prescription {
    use ExperienceLevel::{Beginner, Novice};

    match goal {
        Goal::MuscleGain => match level {
            Beginner => rx(3, "8-12", 60),
            Novice => rx(4, "8-12", 90),
            _ => rx(5, "8-12", 90),
        },
        Goal::Strength => match level {
            Beginner => rx(3, "5-8", 120),
            Novice => rx(4, "3-6", 180),
            _ => rx(5, "2-5", 240),
        },
        Goal::FatLoss | Goal::Conditioning => match level {
            Beginner => rx(3, "12-15", 30),
            Novice => rx(3, "15-20", 45),
            _ => rx(4, "15-20", 30),
        },
        Goal::GeneralFitness | Goal::Athleticism => rx(3, "8-12", 60),
    }
}
