//! Exercise selection - catalog filtering plus uniform sampling

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::exercises::{Exercise, ExperienceLevel, Goal, MuscleGroup};

/// Pick up to `count` distinct exercises for a muscle group.
///
/// Candidates must match the group, level and goal. When nothing matches, any
/// exercise of the group qualifies so a day never ends up empty just because
/// the level/goal tagging is sparse. Returns fewer than `count` (possibly none)
/// when the catalog is that thin.
pub fn select_exercises<'a, R: Rng + ?Sized>(
    catalog: &'a [Exercise],
    group: MuscleGroup,
    level: ExperienceLevel,
    goal: Goal,
    count: usize,
    rng: &mut R,
) -> Vec<&'a Exercise> {
    let mut candidates: Vec<&Exercise> = catalog
        .iter()
        .filter(|e| e.muscle_group == group && e.suits(level, goal))
        .collect();

    if candidates.is_empty() {
        debug!(group = group.label(), level = level.label(), goal = goal.label(), "no tagged match, widening to group");
        candidates = catalog.iter().filter(|e| e.muscle_group == group).collect();
    }

    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}

/// Exercises per group when the day has a single focus
pub fn single_focus_count(level: ExperienceLevel, group: MuscleGroup) -> usize {
    if group == MuscleGroup::FullBody {
        return 1;
    }
    match level {
        ExperienceLevel::Beginner => 2,
        ExperienceLevel::Novice => 3,
        _ => 4,
    }
}

/// Exercises per group when several groups share a day
pub fn combined_focus_count(level: ExperienceLevel) -> usize {
    match level {
        ExperienceLevel::Beginner => 1,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::CATALOG;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const CHEST_ONLY: &[Exercise] = &[
        Exercise {
            name: "Cable Fly",
            muscle_group: MuscleGroup::Chest,
            levels: &[ExperienceLevel::Elite],
            goals: &[Goal::MuscleGain],
            description: None,
        },
        Exercise {
            name: "Pec Deck",
            muscle_group: MuscleGroup::Chest,
            levels: &[ExperienceLevel::Elite],
            goals: &[Goal::MuscleGain],
            description: None,
        },
    ];

    #[test]
    fn test_matches_group_level_goal() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = select_exercises(CATALOG, MuscleGroup::Arms, ExperienceLevel::Beginner, Goal::MuscleGain, 10, &mut rng);
        assert!(!picked.is_empty());
        for e in &picked {
            assert_eq!(e.muscle_group, MuscleGroup::Arms);
            assert!(e.suits(ExperienceLevel::Beginner, Goal::MuscleGain));
        }
        // Skull Crushers is not tagged for beginners
        assert!(picked.iter().all(|e| e.name != "Skull Crushers"));
    }

    #[test]
    fn test_respects_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = select_exercises(CATALOG, MuscleGroup::Back, ExperienceLevel::Elite, Goal::MuscleGain, 2, &mut rng);
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_no_duplicates() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_exercises(CATALOG, MuscleGroup::Chest, ExperienceLevel::Elite, Goal::MuscleGain, 4, &mut rng);
            let names: HashSet<_> = picked.iter().map(|e| e.name).collect();
            assert_eq!(names.len(), picked.len(), "seed {}", seed);
        }
    }

    #[test]
    fn test_falls_back_to_group_when_untagged() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = select_exercises(CHEST_ONLY, MuscleGroup::Chest, ExperienceLevel::Beginner, Goal::Strength, 3, &mut rng);
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_empty_group_returns_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = select_exercises(CHEST_ONLY, MuscleGroup::Legs, ExperienceLevel::Elite, Goal::MuscleGain, 3, &mut rng);
        assert!(picked.is_empty());
    }

    #[test]
    fn test_same_seed_same_pick() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let first: Vec<_> = select_exercises(CATALOG, MuscleGroup::Legs, ExperienceLevel::Advanced, Goal::MuscleGain, 3, &mut a)
            .iter()
            .map(|e| e.name)
            .collect();
        let second: Vec<_> = select_exercises(CATALOG, MuscleGroup::Legs, ExperienceLevel::Advanced, Goal::MuscleGain, 3, &mut b)
            .iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_counts_by_level() {
        assert_eq!(single_focus_count(ExperienceLevel::Beginner, MuscleGroup::Chest), 2);
        assert_eq!(single_focus_count(ExperienceLevel::Novice, MuscleGroup::Chest), 3);
        assert_eq!(single_focus_count(ExperienceLevel::Elite, MuscleGroup::Chest), 4);
        assert_eq!(single_focus_count(ExperienceLevel::Elite, MuscleGroup::FullBody), 1);
        assert_eq!(combined_focus_count(ExperienceLevel::Beginner), 1);
        assert_eq!(combined_focus_count(ExperienceLevel::Intermediate), 2);
    }
}
