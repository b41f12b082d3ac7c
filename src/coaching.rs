//! Coaching text - per-goal notes and motivational quotes attached to each day

use rand::seq::SliceRandom;
use rand::Rng;

use crate::exercises::Goal;

/// Quote every day gets after the plan is intensified
pub const INTENSIFY_QUOTE: &str = "GO HARDER! NO PAIN, NO GAIN! LIGHTWEIGHT BABY!";

pub const QUOTES: &[&str] = &[
    "Light weight, baby!",
    "Everybody wants to be a bodybuilder, but nobody wants to lift no heavy-ass weights.",
    "The last three or four reps is what makes the muscle grow.",
    "Strength does not come from winning. Your struggles develop your strengths.",
    "The pain you feel today will be the strength you feel tomorrow.",
    "Don't count the reps. Make the reps count.",
    "Discipline is doing it when you don't feel like doing it.",
    "You don't have to be great to start, but you have to start to be great.",
    "If it doesn't challenge you, it doesn't change you.",
    "Sweat is just fat crying.",
    "The body achieves what the mind believes.",
    "One more rep. Always one more rep.",
];

/// Coaching note matching the goal's prescription
pub fn goal_notes(goal: Goal) -> &'static str {
    match goal {
        Goal::MuscleGain => {
            "Focus on progressive overload by increasing weight or reps over time. Control the eccentric portion of each rep."
        }
        Goal::Strength => {
            "Lift heavy with perfect form. Rest 2-5 minutes between sets for full recovery and keep full-body tension."
        }
        Goal::FatLoss | Goal::Conditioning => {
            "Keep rest periods short (30-60 seconds) to keep your heart rate up. Superset exercises when possible."
        }
        Goal::GeneralFitness | Goal::Athleticism => {
            "Move with intent and quality. Leave a rep or two in the tank and build consistency week to week."
        }
    }
}

pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(INTENSIFY_QUOTE)
}
