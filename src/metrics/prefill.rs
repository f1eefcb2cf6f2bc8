//! Suggested repetitions and weight for a set about to be edited.

use crate::model::ExercisePerformance;

/// Repetitions suggested when there is nothing to repeat.
const DEFAULT_REPETITIONS: u32 = 5;

/// Suggests `(repetitions, weight)` for the set at `set_index` of `session`.
///
/// Repeats the previous set of the session; for the first set, repeats the
/// first set of the most recent performance in `prior_history` (either
/// chronological direction). With no precedent anywhere the suggestion is
/// 5 repetitions at zero weight.
pub fn suggested_set(
    session: &ExercisePerformance,
    set_index: usize,
    prior_history: &[ExercisePerformance],
) -> (u32, f64) {
    let precedent = if set_index > 0 {
        session.sets.get(set_index - 1)
    } else {
        prior_history
            .iter()
            .max_by_key(|performance| performance.session_start)
            .and_then(|performance| performance.sets.first())
    };
    match precedent {
        Some(set) => (set.repetitions, set.weight),
        // TODO: default to the barbell weight for barbell exercises
        None => (DEFAULT_REPETITIONS, 0.0),
    }
}
