//! Plan assembly - turns questionnaire answers into a weekly plan

use rand::Rng;
use tracing::{debug, info};

use crate::coaching::{goal_notes, random_quote};
use crate::exercises::{Exercise, ExperienceLevel, MuscleGroup, PlannedExercise, CATALOG, PRIMARY_GROUPS};
use crate::plan::{DayPlan, FormData, WorkoutPlan, WorkoutSlot};

use super::prescription::{prescribe, Prescription};
use super::selector::{combined_focus_count, select_exercises, single_focus_count};
use super::split::{select_split, Focus};
use super::technique::{pick_technique, IntensityTechnique};

/// Chance a secondary slot gets a technique
const SECONDARY_TECHNIQUE_CHANCE: f64 = 0.4;

/// Builds plans against a read-only exercise catalog
pub struct PlanGenerator<'a> {
    catalog: &'a [Exercise],
}

impl Default for PlanGenerator<'static> {
    fn default() -> Self {
        Self::new(CATALOG)
    }
}

impl<'a> PlanGenerator<'a> {
    pub fn new(catalog: &'a [Exercise]) -> Self {
        Self { catalog }
    }

    /// Generate a full plan. Randomness only affects which exercises and techniques land in each slot.
    pub fn generate<R: Rng + ?Sized>(&self, form: &FormData, rng: &mut R) -> WorkoutPlan {
        let style = form.body_split.unwrap_or_default();
        let split = select_split(form.days_per_week, style);

        let days: Vec<DayPlan> = split
            .into_iter()
            .map(|split_day| {
                let baseline = prescribe(form.goal, form.experience_level);
                let mut builder = DayBuilder {
                    catalog: self.catalog,
                    form,
                    baseline,
                    slots: Vec::new(),
                };

                match &split_day.focus {
                    Focus::Single(group) => {
                        builder.add_primary_focus(*group, rng);
                        if *group == MuscleGroup::FullBody {
                            for g in PRIMARY_GROUPS {
                                builder.add_secondary_group(*g, 1, rng);
                            }
                        }
                    }
                    Focus::Combined(groups) => {
                        let count = combined_focus_count(form.experience_level);
                        for g in groups {
                            builder.add_secondary_group(*g, count, rng);
                        }
                    }
                }

                debug!(day = split_day.day, focus = %split_day.focus.label(), slots = builder.slots.len(), "day assembled");

                DayPlan {
                    day: split_day.day,
                    focus: split_day.focus,
                    slots: builder.slots,
                    notes: goal_notes(form.goal).to_string(),
                    quote: random_quote(rng).to_string(),
                }
            })
            .collect();

        let plan = WorkoutPlan {
            goal: form.goal,
            experience_level: form.experience_level,
            days_per_week: form.days_per_week,
            body_split: style,
            priority_muscles: form.priority_muscles.clone(),
            limitations: form.limitations.clone(),
            days,
        };

        info!(
            goal = form.goal.label(),
            level = form.experience_level.label(),
            split = style.label(),
            days = plan.days.len(),
            slots = plan.total_slots(),
            "workout plan generated"
        );
        plan
    }
}

/// Slot accumulator for a single day
struct DayBuilder<'c, 'f> {
    catalog: &'c [Exercise],
    form: &'f FormData,
    baseline: Prescription,
    slots: Vec<WorkoutSlot>,
}

impl DayBuilder<'_, '_> {
    fn is_priority(&self, group: MuscleGroup) -> bool {
        self.form.priority_muscles.contains(&group)
    }

    fn level(&self) -> ExperienceLevel {
        self.form.experience_level
    }

    fn push(&mut self, exercise: &Exercise, is_priority: bool, extra_sets: u32, technique: Option<IntensityTechnique>) {
        self.slots.push(WorkoutSlot {
            exercise: PlannedExercise::from_catalog(exercise, is_priority),
            sets: self.baseline.sets + extra_sets,
            reps: self.baseline.reps.to_string(),
            rest_secs: self.baseline.rest_secs,
            intensity_technique: technique,
        });
    }

    /// Single-focus day: first exercise carries a bonus set and the technique
    fn add_primary_focus<R: Rng + ?Sized>(&mut self, group: MuscleGroup, rng: &mut R) {
        let level = self.level();
        let count = single_focus_count(level, group);
        let picked = select_exercises(self.catalog, group, level, self.form.goal, count, rng);
        if picked.is_empty() {
            debug!(group = group.label(), "catalog has no exercises for group");
        }
        let is_priority = self.is_priority(group);

        for (i, exercise) in picked.into_iter().enumerate() {
            let primary = i == 0;
            let extra = u32::from(is_priority) + u32::from(primary);
            let technique = if primary && level != ExperienceLevel::Beginner {
                pick_technique(level, rng)
            } else {
                None
            };
            self.push(exercise, is_priority, extra, technique);
        }
    }

    /// Group sharing the day: priority bonus only, techniques by coin flip
    fn add_secondary_group<R: Rng + ?Sized>(&mut self, group: MuscleGroup, count: usize, rng: &mut R) {
        let level = self.level();
        let picked = select_exercises(self.catalog, group, level, self.form.goal, count, rng);
        if picked.is_empty() {
            debug!(group = group.label(), "catalog has no exercises for group");
        }
        let is_priority = self.is_priority(group);

        for exercise in picked {
            let technique = if level != ExperienceLevel::Beginner && rng.gen_bool(SECONDARY_TECHNIQUE_CHANCE) {
                pick_technique(level, rng)
            } else {
                None
            };
            self.push(exercise, is_priority, u32::from(is_priority), technique);
        }
    }
}
