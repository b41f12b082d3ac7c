//! Generator module - workout plan generation pipeline
//!
//! Pipeline:
//! - Split selection per split style and frequency
//! - Sets/reps/rest prescription per goal and level
//! - Exercise sampling from the catalog
//! - Intensity technique injection
//! - Intensify transform for "make it harder" requests

pub mod assembler;
pub mod intensify;
pub mod prescription;
pub mod selector;
pub mod split;
pub mod technique;

pub use assembler::PlanGenerator;
pub use intensify::intensify;
pub use prescription::{prescribe, Prescription};
pub use selector::select_exercises;
pub use split::{select_split, Focus, SplitDay, SplitStyle};
pub use technique::{pick_technique, IntensityTechnique};

use crate::plan::{FormData, WorkoutPlan};

/// Generate a plan with the built-in catalog and thread-local randomness
pub fn generate_workout_plan(form: &FormData) -> WorkoutPlan {
    PlanGenerator::default().generate(form, &mut rand::thread_rng())
}

/// Harder copy of `plan` using thread-local randomness
pub fn make_workout_more_intense(plan: &WorkoutPlan) -> WorkoutPlan {
    intensify(plan, &mut rand::thread_rng())
}
