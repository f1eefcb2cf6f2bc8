//! Domain model: sets and per-session exercise performances.
//!
//! These are read-only snapshots handed in by the application; nothing here
//! is persisted or mutated by the metrics layer.

pub mod exercise;
pub mod set;

pub use exercise::ExercisePerformance;
pub use set::{MAX_REPETITIONS, MAX_WEIGHT, SetTag, WorkoutSet};
