//! Weekly split policies - which muscle groups get trained on which day

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::exercises::{normalize, MuscleGroup};
use crate::theme;

/// What a day trains: one group, or several groups sharing the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Focus {
    Single(MuscleGroup),
    Combined(Vec<MuscleGroup>),
}

impl Focus {
    /// Groups this focus names, in order
    pub fn groups(&self) -> &[MuscleGroup] {
        match self {
            Focus::Single(group) => std::slice::from_ref(group),
            Focus::Combined(groups) => groups,
        }
    }

    pub fn contains(&self, group: MuscleGroup) -> bool {
        self.groups().contains(&group)
    }

    pub fn label(&self) -> String {
        self.groups()
            .iter()
            .map(|g| g.label())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SplitStyle {
    #[default]
    PushPullLegs,
    UpperLower,
    BodyPart,
    FullBody,
    /// Fixed layout per training frequency
    Classic,
}

impl SplitStyle {
    pub fn label(&self) -> &'static str {
        match self {
            SplitStyle::PushPullLegs => "push pull legs",
            SplitStyle::UpperLower => "upper lower",
            SplitStyle::BodyPart => "body part",
            SplitStyle::FullBody => "full body",
            SplitStyle::Classic => "classic",
        }
    }

    pub fn all() -> &'static [SplitStyle] {
        &[
            SplitStyle::PushPullLegs,
            SplitStyle::UpperLower,
            SplitStyle::BodyPart,
            SplitStyle::FullBody,
            SplitStyle::Classic,
        ]
    }

    /// Lenient lookup, unknown styles fall back to push/pull/legs
    pub fn from_label(label: &str) -> Self {
        let wanted = normalize(label);
        Self::all()
            .iter()
            .copied()
            .find(|s| normalize(s.label()) == wanted)
            .or_else(|| theme::split_alias(&wanted))
            .unwrap_or_else(|| {
                warn!(label, "unknown split style, using default");
                Self::default()
            })
    }
}

/// One entry of a weekly split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDay {
    pub day: u32,
    pub focus: Focus,
}

use MuscleGroup::{Arms, Back, Chest, Core, FullBody, Legs, Shoulders};

const PUSH: &[MuscleGroup] = &[Chest, Shoulders, Arms];
const PULL: &[MuscleGroup] = &[Back, Arms];
const LEGS: &[MuscleGroup] = &[Legs, Core];
const UPPER: &[MuscleGroup] = &[Chest, Back, Shoulders, Arms];
const LOWER: &[MuscleGroup] = &[Legs, Core];
const BODY_PART: &[MuscleGroup] = &[Chest, Back, Shoulders, Arms, Legs];

/// Build the day/focus sequence for a week. Deterministic.
pub fn select_split(days_per_week: u32, style: SplitStyle) -> Vec<SplitDay> {
    if days_per_week == 1 {
        return vec![SplitDay {
            day: 1,
            focus: Focus::Single(FullBody),
        }];
    }

    let foci: Vec<Focus> = match style {
        SplitStyle::FullBody => vec![Focus::Single(FullBody)],
        SplitStyle::PushPullLegs => [PUSH, PULL, LEGS]
            .iter()
            .map(|groups| Focus::Combined(groups.to_vec()))
            .collect(),
        SplitStyle::UpperLower => [UPPER, LOWER]
            .iter()
            .map(|groups| Focus::Combined(groups.to_vec()))
            .collect(),
        SplitStyle::BodyPart => {
            let mut groups = BODY_PART.to_vec();
            if days_per_week >= 6 {
                groups.push(Core);
            }
            groups.into_iter().map(Focus::Single).collect()
        }
        SplitStyle::Classic => classic_week(days_per_week),
    };

    (0..days_per_week)
        .map(|i| SplitDay {
            day: i + 1,
            focus: foci[i as usize % foci.len()].clone(),
        })
        .collect()
}

/// Layouts tuned per frequency; anything above seven days cycles the seven-day week
fn classic_week(days_per_week: u32) -> Vec<Focus> {
    let single = Focus::Single;
    let combined = |groups: &[MuscleGroup]| Focus::Combined(groups.to_vec());

    match days_per_week {
        2 => vec![combined(&[Chest, Back, Shoulders]), combined(&[Legs, Arms, Core])],
        3 => vec![combined(&[Chest, Shoulders, Arms]), combined(&[Back, Arms]), combined(&[Legs, Core])],
        4 => vec![single(Chest), single(Back), combined(&[Shoulders, Arms]), combined(&[Legs, Core])],
        5 => vec![single(Chest), single(Back), single(Shoulders), combined(&[Arms, Core]), single(Legs)],
        6 => vec![single(Chest), single(Back), single(Shoulders), single(Arms), single(Legs), single(Core)],
        _ => vec![
            single(Chest),
            single(Back),
            single(Shoulders),
            single(Arms),
            single(Legs),
            single(Core),
            single(FullBody),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foci(days: &[SplitDay]) -> Vec<Focus> {
        days.iter().map(|d| d.focus.clone()).collect()
    }

    #[test]
    fn test_one_day_is_full_body_for_every_style() {
        for style in SplitStyle::all() {
            let split = select_split(1, *style);
            assert_eq!(split.len(), 1);
            assert_eq!(split[0].day, 1);
            assert_eq!(split[0].focus, Focus::Single(FullBody), "style {:?}", style);
        }
    }

    #[test]
    fn test_zero_days_is_empty() {
        assert!(select_split(0, SplitStyle::PushPullLegs).is_empty());
    }

    #[test]
    fn test_push_pull_legs_order() {
        let split = select_split(3, SplitStyle::PushPullLegs);
        assert_eq!(
            foci(&split),
            vec![
                Focus::Combined(vec![Chest, Shoulders, Arms]),
                Focus::Combined(vec![Back, Arms]),
                Focus::Combined(vec![Legs, Core]),
            ]
        );
    }

    #[test]
    fn test_push_pull_legs_cycles() {
        let split = select_split(5, SplitStyle::PushPullLegs);
        assert_eq!(split[3].focus, split[0].focus);
        assert_eq!(split[4].focus, split[1].focus);
    }

    #[test]
    fn test_upper_lower_alternates() {
        let split = select_split(4, SplitStyle::UpperLower);
        assert_eq!(split[0].focus, Focus::Combined(vec![Chest, Back, Shoulders, Arms]));
        assert_eq!(split[1].focus, Focus::Combined(vec![Legs, Core]));
        assert_eq!(split[2].focus, split[0].focus);
        assert_eq!(split[3].focus, split[1].focus);
    }

    #[test]
    fn test_body_part_without_core_below_six_days() {
        let split = select_split(5, SplitStyle::BodyPart);
        assert!(split.iter().all(|d| !d.focus.contains(Core)));
        assert_eq!(split[4].focus, Focus::Single(Legs));
    }

    #[test]
    fn test_body_part_adds_core_from_six_days() {
        let split = select_split(7, SplitStyle::BodyPart);
        assert_eq!(split[5].focus, Focus::Single(Core));
        // seventh day wraps back to chest
        assert_eq!(split[6].focus, Focus::Single(Chest));
    }

    #[test]
    fn test_full_body_repeats() {
        let split = select_split(3, SplitStyle::FullBody);
        assert!(split.iter().all(|d| d.focus == Focus::Single(FullBody)));
    }

    #[test]
    fn test_classic_four_days() {
        let split = select_split(4, SplitStyle::Classic);
        assert_eq!(split[0].focus, Focus::Single(Chest));
        assert_eq!(split[2].focus, Focus::Combined(vec![Shoulders, Arms]));
    }

    #[test]
    fn test_classic_seven_days_ends_full_body() {
        let split = select_split(7, SplitStyle::Classic);
        assert_eq!(split[6].focus, Focus::Single(FullBody));
    }

    #[test]
    fn test_day_numbers_contiguous_for_large_week() {
        for style in SplitStyle::all() {
            let split = select_split(10, *style);
            let days: Vec<u32> = split.iter().map(|d| d.day).collect();
            assert_eq!(days, (1..=10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_unknown_style_falls_back() {
        assert_eq!(SplitStyle::from_label("shikigami flow"), SplitStyle::PushPullLegs);
        assert_eq!(SplitStyle::from_label("Upper-Lower"), SplitStyle::UpperLower);
    }

    #[test]
    fn test_focus_serializes_like_source_data() {
        let single = serde_json::to_string(&Focus::Single(FullBody)).unwrap();
        assert_eq!(single, "\"full_body\"");
        let combined: Focus = serde_json::from_str("[\"legs\",\"core\"]").unwrap();
        assert_eq!(combined, Focus::Combined(vec![Legs, Core]));
    }
}
