//! Presentation labels - cosmetic vocabularies layered over the canonical enums
//!
//! The generator only ever sees canonical values. Themes rename them for
//! display, and their aliases are accepted when parsing user input.

use serde::{Deserialize, Serialize};

use crate::exercises::{normalize, ExperienceLevel, Goal, MuscleGroup};
use crate::generator::split::SplitStyle;
use crate::generator::technique::IntensityTechnique;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Plain,
    Cursed,
}

impl Theme {
    pub fn from_label(label: &str) -> Self {
        match normalize(label).as_str() {
            "cursed" | "jjk" => Theme::Cursed,
            _ => Theme::Plain,
        }
    }

    pub fn muscle_group(self, group: MuscleGroup) -> &'static str {
        match self {
            Theme::Plain => group.label(),
            Theme::Cursed => lookup(CURSED_MUSCLES, &group).unwrap_or(group.label()),
        }
    }

    pub fn goal(self, goal: Goal) -> &'static str {
        match self {
            Theme::Plain => goal.label(),
            Theme::Cursed => lookup(CURSED_GOALS, &goal).unwrap_or(goal.label()),
        }
    }

    pub fn level(self, level: ExperienceLevel) -> &'static str {
        match self {
            Theme::Plain => level.label(),
            Theme::Cursed => lookup(CURSED_LEVELS, &level).unwrap_or(level.label()),
        }
    }

    pub fn split(self, style: SplitStyle) -> &'static str {
        match self {
            Theme::Plain => style.label(),
            Theme::Cursed => lookup(CURSED_SPLITS, &style).unwrap_or(style.label()),
        }
    }

    pub fn technique(self, technique: IntensityTechnique) -> &'static str {
        match self {
            Theme::Plain => technique.label(),
            Theme::Cursed => lookup(CURSED_TECHNIQUES, &technique).unwrap_or(technique.label()),
        }
    }
}

// First entry per value is its display label; later entries are extra aliases.

const CURSED_MUSCLES: &[(&str, MuscleGroup)] = &[
    ("demonic chest", MuscleGroup::Chest),
    ("titanic back", MuscleGroup::Back),
    ("v taper lats", MuscleGroup::Back),
    ("shoulder domination", MuscleGroup::Shoulders),
    ("mountain traps", MuscleGroup::Shoulders),
    ("arm control", MuscleGroup::Arms),
    ("grip of a curse user", MuscleGroup::Arms),
    ("legs of steel", MuscleGroup::Legs),
    ("explosive glutes", MuscleGroup::Legs),
    ("unshakeable calves", MuscleGroup::Legs),
    ("core seal", MuscleGroup::Core),
    ("posture stabilizers", MuscleGroup::Core),
    ("cursed full body", MuscleGroup::FullBody),
];

const CURSED_GOALS: &[(&str, Goal)] = &[
    ("cursed mass gain", Goal::MuscleGain),
    ("heavenly pact strength", Goal::Strength),
    ("domain expansion shred", Goal::FatLoss),
    ("speed type fighter", Goal::Conditioning),
    ("balanced sorcerer", Goal::GeneralFitness),
    ("jujutsu athlete", Goal::Athleticism),
];

const CURSED_LEVELS: &[(&str, ExperienceLevel)] = &[
    ("grade 4", ExperienceLevel::Beginner),
    ("grade 3", ExperienceLevel::Novice),
    ("grade 2", ExperienceLevel::Intermediate),
    ("semi grade 2", ExperienceLevel::Intermediate),
    ("grade 1", ExperienceLevel::Advanced),
    ("special grade", ExperienceLevel::Elite),
];

const CURSED_SPLITS: &[(&str, SplitStyle)] = &[
    ("zenin style", SplitStyle::PushPullLegs),
    ("inverted spear protocol", SplitStyle::UpperLower),
    ("domain split", SplitStyle::BodyPart),
    ("full body curse mastery", SplitStyle::FullBody),
    ("black flash rotation", SplitStyle::Classic),
];

const CURSED_TECHNIQUES: &[(&str, IntensityTechnique)] = &[
    ("black flash", IntensityTechnique::DropSet),
    ("domain expansion", IntensityTechnique::Superset),
    ("simple domain", IntensityTechnique::RestPause),
    ("maximum curse", IntensityTechnique::ForcedReps),
    ("reversed curse", IntensityTechnique::Negatives),
    ("hollow technique", IntensityTechnique::PartialReps),
    ("binding vow", IntensityTechnique::IsometricHold),
];

fn lookup<T: PartialEq>(table: &[(&'static str, T)], value: &T) -> Option<&'static str> {
    table.iter().find(|(_, v)| v == value).map(|(label, _)| *label)
}

fn alias<T: Copy>(table: &[(&str, T)], normalized: &str) -> Option<T> {
    table
        .iter()
        .find(|(label, _)| normalize(label) == normalized)
        .map(|(_, v)| *v)
}

// Lookups take an already-normalized label.

pub fn muscle_group_alias(normalized: &str) -> Option<MuscleGroup> {
    alias(CURSED_MUSCLES, normalized)
}

pub fn goal_alias(normalized: &str) -> Option<Goal> {
    alias(CURSED_GOALS, normalized)
}

pub fn level_alias(normalized: &str) -> Option<ExperienceLevel> {
    alias(CURSED_LEVELS, normalized)
}

pub fn split_alias(normalized: &str) -> Option<SplitStyle> {
    alias(CURSED_SPLITS, normalized)
}

pub fn technique_alias(normalized: &str) -> Option<IntensityTechnique> {
    alias(CURSED_TECHNIQUES, normalized)
}
