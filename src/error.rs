//! Error types for the liftlog crate.

use thiserror::Error;

/// Errors from derived-metric computations.
#[derive(Debug, Error, PartialEq)]
pub enum MetricsError {
    /// The Brzycki denominator `37 - repetitions` reaches zero at 37 reps, so
    /// a rep ceiling of 37 or more would admit sets whose estimate is
    /// infinite or negative.
    #[error("1RM rep ceiling must be below 37: {0}")]
    RepCeilingOutOfRange(u32),
}

/// Violations of the set consistency rules.
#[derive(Debug, Error, PartialEq)]
pub enum SetValidationError {
    #[error("repetitions out of range: {0}")]
    RepetitionsOutOfRange(u32),

    #[error("weight out of range: {0}")]
    WeightOutOfRange(f64),

    #[error("uncompleted set in workout that is not the current workout")]
    UncompletedSetNotCurrent,
}
