//! Personal-record detection over exercise history.

use tracing::debug;

use crate::model::{ExercisePerformance, WorkoutSet};

/// Whether `other` matches or beats `target` on weight and repetitions at
/// once.
fn better_or_equal(other: &WorkoutSet, target: &WorkoutSet) -> bool {
    other.weight >= target.weight && other.repetitions >= target.repetitions
}

/// Determines whether the set at `set_index` of `session` is a personal
/// record for the exercise.
///
/// `prior_history` holds the exercise's performances from sessions before
/// this one, in either chronological direction. Only completed sets are ever
/// compared. The checks run in a fixed order:
///
/// 1. No completed set in any earlier session: `Some(false)`; absence of
///    history is not a win.
/// 2. Some completed set of an earlier session matches or beats the target
///    on both weight and repetitions: `Some(false)`.
/// 3. Some completed set earlier in the same session does: `Some(false)`.
/// 4. Otherwise `Some(true)`.
///
/// Returns `None` when `set_index` does not address a set of `session`, so
/// the question has no answer.
pub fn is_personal_record(
    session: &ExercisePerformance,
    set_index: usize,
    prior_history: &[ExercisePerformance],
) -> Option<bool> {
    let target = session.sets.get(set_index)?;

    let mut prior_sets = prior_history
        .iter()
        .flat_map(ExercisePerformance::completed_sets)
        .peekable();
    if prior_sets.peek().is_none() {
        return Some(false);
    }
    if prior_sets.any(|set| better_or_equal(set, target)) {
        return Some(false);
    }

    if session.sets[..set_index]
        .iter()
        .filter(|set| set.is_completed)
        .any(|set| better_or_equal(set, target))
    {
        return Some(false);
    }

    debug!(exercise = %session.exercise_id, set_index, "record.new");
    Some(true)
}
