//! Intensity techniques and the per-level picker

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::exercises::{normalize, ExperienceLevel};
use crate::theme;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntensityTechnique {
    DropSet,
    Superset,
    RestPause,
    ForcedReps,
    Negatives,
    PartialReps,
    IsometricHold,
}

impl IntensityTechnique {
    pub fn label(&self) -> &'static str {
        match self {
            IntensityTechnique::DropSet => "drop set",
            IntensityTechnique::Superset => "superset",
            IntensityTechnique::RestPause => "rest-pause",
            IntensityTechnique::ForcedReps => "forced reps",
            IntensityTechnique::Negatives => "negatives",
            IntensityTechnique::PartialReps => "partial reps",
            IntensityTechnique::IsometricHold => "isometric hold",
        }
    }

    pub fn all() -> &'static [IntensityTechnique] {
        ALL_TECHNIQUES
    }

    pub fn parse(label: &str) -> Option<Self> {
        let wanted = normalize(label);
        ALL_TECHNIQUES
            .iter()
            .copied()
            .find(|t| normalize(t.label()) == wanted)
            .or_else(|| theme::technique_alias(&wanted))
    }
}

/// The one technique a beginner may see
pub const ENTRY_TECHNIQUE: IntensityTechnique = IntensityTechnique::DropSet;

const ENTRY_ONLY: &[IntensityTechnique] = &[ENTRY_TECHNIQUE];

const BASIC_TECHNIQUES: &[IntensityTechnique] = &[
    IntensityTechnique::DropSet,
    IntensityTechnique::Superset,
    IntensityTechnique::RestPause,
];

const ALL_TECHNIQUES: &[IntensityTechnique] = &[
    IntensityTechnique::DropSet,
    IntensityTechnique::Superset,
    IntensityTechnique::RestPause,
    IntensityTechnique::ForcedReps,
    IntensityTechnique::Negatives,
    IntensityTechnique::PartialReps,
    IntensityTechnique::IsometricHold,
];

const BEGINNER_CHANCE: f64 = 0.3;

/// Techniques a level may draw from
pub fn techniques_for(level: ExperienceLevel) -> &'static [IntensityTechnique] {
    match level {
        ExperienceLevel::Beginner => ENTRY_ONLY,
        ExperienceLevel::Novice | ExperienceLevel::Intermediate => BASIC_TECHNIQUES,
        ExperienceLevel::Advanced | ExperienceLevel::Elite => ALL_TECHNIQUES,
    }
}

/// Beginners get the entry technique 30% of the time, everyone else always gets one
pub fn pick_technique<R: Rng + ?Sized>(level: ExperienceLevel, rng: &mut R) -> Option<IntensityTechnique> {
    if level == ExperienceLevel::Beginner {
        return rng.gen_bool(BEGINNER_CHANCE).then_some(ENTRY_TECHNIQUE);
    }
    techniques_for(level).choose(rng).copied()
}

/// Like [`pick_technique`] but never empty-handed
pub fn pick_guaranteed<R: Rng + ?Sized>(level: ExperienceLevel, rng: &mut R) -> IntensityTechnique {
    pick_technique(level, rng).unwrap_or(ENTRY_TECHNIQUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_beginner_hit() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(pick_technique(ExperienceLevel::Beginner, &mut rng), Some(ENTRY_TECHNIQUE));
    }

    #[test]
    fn test_beginner_miss() {
        let mut rng = StepRng::new(u64::MAX, 0);
        assert_eq!(pick_technique(ExperienceLevel::Beginner, &mut rng), None);
    }

    #[test]
    fn test_beginner_rate_roughly_thirty_percent() {
        let mut rng = StdRng::seed_from_u64(42);
        let hits = (0..2000)
            .filter(|_| pick_technique(ExperienceLevel::Beginner, &mut rng).is_some())
            .count();
        assert!((450..=750).contains(&hits), "got {} hits", hits);
    }

    #[test]
    fn test_middle_tiers_always_basic() {
        let mut rng = StdRng::seed_from_u64(5);
        for level in [ExperienceLevel::Novice, ExperienceLevel::Intermediate] {
            for _ in 0..200 {
                let t = pick_technique(level, &mut rng).unwrap();
                assert!(BASIC_TECHNIQUES.contains(&t));
            }
        }
    }

    #[test]
    fn test_top_tiers_reach_advanced_techniques() {
        let mut rng = StdRng::seed_from_u64(11);
        let seen: HashSet<_> = (0..500)
            .map(|_| pick_technique(ExperienceLevel::Elite, &mut rng).unwrap())
            .collect();
        assert_eq!(seen.len(), ALL_TECHNIQUES.len());
    }

    #[test]
    fn test_guaranteed_never_none() {
        let mut rng = StepRng::new(u64::MAX, 0);
        assert_eq!(pick_guaranteed(ExperienceLevel::Beginner, &mut rng), ENTRY_TECHNIQUE);
    }

    #[test]
    fn test_candidate_set_sizes() {
        assert_eq!(techniques_for(ExperienceLevel::Beginner).len(), 1);
        assert_eq!(techniques_for(ExperienceLevel::Novice).len(), 3);
        assert_eq!(techniques_for(ExperienceLevel::Advanced).len(), 7);
    }

    #[test]
    fn test_parse() {
        assert_eq!(IntensityTechnique::parse("Rest Pause"), Some(IntensityTechnique::RestPause));
        assert_eq!(IntensityTechnique::parse("drop_set"), Some(IntensityTechnique::DropSet));
        assert_eq!(IntensityTechnique::parse("yelling"), None);
    }
}
