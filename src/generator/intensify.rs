//! "Make it harder" transform over an existing plan

use rand::Rng;
use tracing::info;

use crate::coaching::INTENSIFY_QUOTE;
use crate::plan::WorkoutPlan;

use super::technique::pick_guaranteed;

/// Return a harder copy of `plan`: one more set everywhere and a technique on every slot.
///
/// Not idempotent: each call adds another set.
pub fn intensify<R: Rng + ?Sized>(plan: &WorkoutPlan, rng: &mut R) -> WorkoutPlan {
    let level = plan.experience_level;
    let mut harder = plan.clone();

    for day in &mut harder.days {
        for slot in &mut day.slots {
            slot.sets += 1;
            if slot.intensity_technique.is_none() {
                slot.intensity_technique = Some(pick_guaranteed(level, rng));
            }
        }
        day.quote = INTENSIFY_QUOTE.to_string();
    }

    info!(days = harder.days.len(), total_sets = harder.total_sets(), "workout plan intensified");
    harder
}
