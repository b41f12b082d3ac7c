//! ironplan - Workout plan generator
//!
//! Builds a weekly training plan from a short questionnaire and can make an
//! existing plan harder on request.

pub mod coaching;
pub mod db;
pub mod exercises;
pub mod generator;
pub mod plan;
pub mod theme;

pub use db::Database;
pub use generator::{generate_workout_plan, make_workout_more_intense, PlanGenerator};
pub use plan::{DayPlan, FormData, WorkoutPlan, WorkoutSlot};
