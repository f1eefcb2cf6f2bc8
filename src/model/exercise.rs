//! One exercise's performance within a workout session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::WorkoutSet;

/// All sets of one exercise within one workout session.
///
/// `sets` keeps insertion order, which is the order the sets were performed
/// in. An exercise's history is a sequence of these ordered by
/// `session_start`; functions taking history document whether they rely on
/// the direction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExercisePerformance {
    pub exercise_id: String,
    pub session_start: DateTime<Utc>,
    pub sets: Vec<WorkoutSet>,
}

impl ExercisePerformance {
    pub fn new(
        exercise_id: impl Into<String>,
        session_start: DateTime<Utc>,
        sets: Vec<WorkoutSet>,
    ) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            session_start,
            sets,
        }
    }

    /// Completed sets in performance order.
    pub fn completed_sets(&self) -> impl Iterator<Item = &WorkoutSet> {
        self.sets.iter().filter(|set| set.is_completed)
    }

    /// First set that is not completed yet, in performance order.
    pub fn first_uncompleted_set(&self) -> Option<&WorkoutSet> {
        self.sets.iter().find(|set| !set.is_completed)
    }

    /// Sum of weights over completed sets; `None` when no set is completed.
    pub fn total_completed_weight(&self) -> Option<f64> {
        let weights: Vec<f64> = self.completed_sets().map(|set| set.weight).collect();
        if weights.is_empty() {
            None
        } else {
            Some(weights.iter().sum())
        }
    }

    /// Number of completed sets; `None` when the performance has no sets at
    /// all. A session with only uncompleted sets counts as zero performed,
    /// which is different from having no data.
    pub fn completed_set_count(&self) -> Option<usize> {
        if self.sets.is_empty() {
            None
        } else {
            Some(self.completed_sets().count())
        }
    }

    /// Total repetitions over completed sets; `None` when the performance
    /// has no sets at all.
    pub fn completed_repetitions(&self) -> Option<u32> {
        if self.sets.is_empty() {
            None
        } else {
            Some(self.completed_sets().map(|set| set.repetitions).sum())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_performance(sets: Vec<WorkoutSet>) -> ExercisePerformance {
        ExercisePerformance::new(
            "bench-press",
            Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
            sets,
        )
    }

    fn uncompleted(repetitions: u32, weight: f64) -> WorkoutSet {
        let mut set = WorkoutSet::new(repetitions, weight);
        set.is_completed = false;
        set
    }

    #[test]
    fn test_summaries_no_sets_at_all() {
        let performance = create_performance(vec![]);
        assert_eq!(performance.total_completed_weight(), None);
        assert_eq!(performance.completed_set_count(), None);
        assert_eq!(performance.completed_repetitions(), None);
    }

    #[test]
    fn test_summaries_only_uncompleted_sets() {
        let performance = create_performance(vec![uncompleted(5, 100.0)]);
        // Zero performed is data; only an empty set list is "no data".
        assert_eq!(performance.total_completed_weight(), None);
        assert_eq!(performance.completed_set_count(), Some(0));
        assert_eq!(performance.completed_repetitions(), Some(0));
    }

    #[test]
    fn test_summaries_mixed_completion() {
        let performance = create_performance(vec![
            WorkoutSet::new(5, 100.0),
            WorkoutSet::new(3, 110.0),
            uncompleted(5, 120.0),
        ]);
        assert_eq!(performance.total_completed_weight(), Some(210.0));
        assert_eq!(performance.completed_set_count(), Some(2));
        assert_eq!(performance.completed_repetitions(), Some(8));
    }

    #[test]
    fn test_completed_sets_keep_performance_order() {
        let performance = create_performance(vec![
            WorkoutSet::new(8, 80.0),
            uncompleted(5, 100.0),
            WorkoutSet::new(5, 90.0),
        ]);
        let reps: Vec<u32> = performance.completed_sets().map(|s| s.repetitions).collect();
        assert_eq!(reps, vec![8, 5]);
    }

    #[test]
    fn test_first_uncompleted_set() {
        let performance = create_performance(vec![
            WorkoutSet::new(8, 80.0),
            uncompleted(5, 100.0),
            uncompleted(5, 110.0),
        ]);
        assert_eq!(performance.first_uncompleted_set().map(|s| s.weight), Some(100.0));

        let done = create_performance(vec![WorkoutSet::new(8, 80.0)]);
        assert!(done.first_uncompleted_set().is_none());
    }
}
