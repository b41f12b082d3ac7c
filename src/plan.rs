//! Plan model - the questionnaire input and the generated weekly plan

use serde::{Deserialize, Serialize};

use crate::exercises::{ExperienceLevel, Goal, MuscleGroup, PlannedExercise};
use crate::generator::split::{Focus, SplitStyle};
use crate::generator::technique::IntensityTechnique;
use crate::theme::Theme;

/// Questionnaire answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub goal: Goal,
    pub experience_level: ExperienceLevel,
    pub days_per_week: u32,
    #[serde(default)]
    pub body_split: Option<SplitStyle>,
    #[serde(default)]
    pub priority_muscles: Vec<MuscleGroup>,
    #[serde(default)]
    pub limitations: Option<String>,
}

impl FormData {
    pub fn new(goal: Goal, experience_level: ExperienceLevel, days_per_week: u32) -> Self {
        Self {
            goal,
            experience_level,
            days_per_week,
            body_split: None,
            priority_muscles: Vec::new(),
            limitations: None,
        }
    }

    pub fn with_split(mut self, split: SplitStyle) -> Self {
        self.body_split = Some(split);
        self
    }

    pub fn with_priority(mut self, muscles: &[MuscleGroup]) -> Self {
        self.priority_muscles = muscles.to_vec();
        self
    }

    pub fn with_limitations(mut self, limitations: impl Into<String>) -> Self {
        self.limitations = Some(limitations.into());
        self
    }
}

/// One exercise entry of a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSlot {
    pub exercise: PlannedExercise,
    pub sets: u32,
    pub reps: String,
    pub rest_secs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_technique: Option<IntensityTechnique>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub focus: Focus,
    pub slots: Vec<WorkoutSlot>,
    pub notes: String,
    pub quote: String,
}

impl DayPlan {
    pub fn title(&self) -> String {
        format!("Day {}", self.day)
    }

    /// Slots whose exercise belongs to `group`
    pub fn slots_for(&self, group: MuscleGroup) -> impl Iterator<Item = &WorkoutSlot> {
        self.slots.iter().filter(move |s| s.exercise.muscle_group == group)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub goal: Goal,
    pub experience_level: ExperienceLevel,
    pub days_per_week: u32,
    pub body_split: SplitStyle,
    pub priority_muscles: Vec<MuscleGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limitations: Option<String>,
    pub days: Vec<DayPlan>,
}

impl WorkoutPlan {
    pub fn total_slots(&self) -> usize {
        self.days.iter().map(|d| d.slots.len()).sum()
    }

    pub fn total_sets(&self) -> u32 {
        self.days
            .iter()
            .flat_map(|d| d.slots.iter())
            .map(|s| s.sets)
            .sum()
    }

    /// Human-readable plan for the terminal
    pub fn format(&self, theme: Theme) -> String {
        let mut lines = vec![format!(
            "{} | {} | {} days | {}",
            theme.goal(self.goal),
            theme.level(self.experience_level),
            self.days_per_week,
            theme.split(self.body_split),
        )];

        if !self.priority_muscles.is_empty() {
            let names: Vec<_> = self.priority_muscles.iter().map(|m| theme.muscle_group(*m)).collect();
            lines.push(format!("Priority: {}", names.join(", ")));
        }
        if let Some(limitations) = &self.limitations {
            lines.push(format!("Limitations: {}", limitations));
        }

        for day in &self.days {
            let focus: Vec<_> = day.focus.groups().iter().map(|g| theme.muscle_group(*g)).collect();
            lines.push(String::new());
            lines.push(format!("{} - {}", day.title(), focus.join(" + ")));
            lines.push(format!("{:-<60}", ""));

            if day.slots.is_empty() {
                lines.push("  (no exercises available)".to_string());
            }
            for slot in &day.slots {
                let star = if slot.exercise.is_priority { "*" } else { " " };
                let technique = slot
                    .intensity_technique
                    .map(|t| format!(" [{}]", theme.technique(t)))
                    .unwrap_or_default();
                lines.push(format!(
                    " {}{:28} {}x{:6} rest {}s{}",
                    star, slot.exercise.name, slot.sets, slot.reps, slot.rest_secs, technique
                ));
            }

            if !day.notes.is_empty() {
                lines.push(format!("  {}", day.notes));
            }
            lines.push(format!("  \"{}\"", day.quote));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_slot(name: &str, group: MuscleGroup, sets: u32, is_priority: bool) -> WorkoutSlot {
        WorkoutSlot {
            exercise: PlannedExercise {
                name: name.to_string(),
                muscle_group: group,
                description: None,
                is_priority,
            },
            sets,
            reps: "8-12".to_string(),
            rest_secs: 60,
            intensity_technique: None,
        }
    }

    fn create_plan() -> WorkoutPlan {
        WorkoutPlan {
            goal: Goal::MuscleGain,
            experience_level: ExperienceLevel::Novice,
            days_per_week: 1,
            body_split: SplitStyle::FullBody,
            priority_muscles: vec![MuscleGroup::Chest],
            limitations: Some("bad left knee".to_string()),
            days: vec![DayPlan {
                day: 1,
                focus: Focus::Single(MuscleGroup::FullBody),
                slots: vec![
                    create_slot("Bench Press", MuscleGroup::Chest, 6, true),
                    create_slot("Squats", MuscleGroup::Legs, 4, false),
                ],
                notes: "Train hard.".to_string(),
                quote: "Lightweight!".to_string(),
            }],
        }
    }

    #[test]
    fn test_form_builder() {
        let form = FormData::new(Goal::Strength, ExperienceLevel::Elite, 4)
            .with_split(SplitStyle::UpperLower)
            .with_priority(&[MuscleGroup::Back])
            .with_limitations("none");
        assert_eq!(form.body_split, Some(SplitStyle::UpperLower));
        assert_eq!(form.priority_muscles, vec![MuscleGroup::Back]);
        assert_eq!(form.limitations.as_deref(), Some("none"));
    }

    #[test]
    fn test_form_defaults_from_json() {
        let form: FormData = serde_json::from_str(
            r#"{"goal":"strength","experience_level":"beginner","days_per_week":3}"#,
        )
        .unwrap();
        assert_eq!(form.body_split, None);
        assert!(form.priority_muscles.is_empty());
    }

    #[test]
    fn test_totals() {
        let plan = create_plan();
        assert_eq!(plan.total_slots(), 2);
        assert_eq!(plan.total_sets(), 10);
    }

    #[test]
    fn test_day_title() {
        assert_eq!(create_plan().days[0].title(), "Day 1");
    }

    #[test]
    fn test_slots_for_group() {
        let plan = create_plan();
        assert_eq!(plan.days[0].slots_for(MuscleGroup::Legs).count(), 1);
        assert_eq!(plan.days[0].slots_for(MuscleGroup::Arms).count(), 0);
    }

    #[test]
    fn test_format_contains_details() {
        let text = create_plan().format(Theme::Plain);
        assert!(text.contains("Day 1 - full body"));
        assert!(text.contains("*Bench Press"));
        assert!(text.contains("Priority: chest"));
        assert!(text.contains("Limitations: bad left knee"));
        assert!(text.contains("\"Lightweight!\""));
    }

    #[test]
    fn test_plan_json_round_trip() {
        let plan = create_plan();
        let json = serde_json::to_string(&plan).unwrap();
        let back: WorkoutPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
