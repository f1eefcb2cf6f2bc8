//! Workout set model: one (repetitions, weight) unit of work.

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, SetValidationError};
use crate::metrics::one_rep_max;
use crate::units::WeightUnit;

/// Upper bound for repetitions in a single set.
pub const MAX_REPETITIONS: u32 = 9999;

/// Upper bound for the weight of a single set, in kilograms.
pub const MAX_WEIGHT: f64 = 99999.0;

/// Rating of perceived exertion.
pub mod rpe {
    /// Values the RPE picker offers; stored values outside this set read
    /// back as absent.
    pub const ALLOWED_VALUES: [f64; 7] = [7.0, 7.5, 8.0, 8.5, 9.0, 9.5, 10.0];

    pub fn is_allowed(value: f64) -> bool {
        ALLOWED_VALUES.contains(&value)
    }
}

/// Marker a user can put on a set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SetTag {
    WarmUp,
    Dropset,
    Failure,
}

impl SetTag {
    /// All tags for iteration.
    pub fn all() -> &'static [SetTag] {
        &[SetTag::WarmUp, SetTag::Dropset, SetTag::Failure]
    }

    /// Display name for the tag.
    pub fn title(&self) -> &'static str {
        match self {
            SetTag::WarmUp => "Warm-Up",
            SetTag::Dropset => "Dropset",
            SetTag::Failure => "Failure",
        }
    }
}

fn completed_default() -> bool {
    true
}

/// A single set of an exercise.
///
/// Weights are stored in kilograms. Exported sets omit the completion flag
/// and deserialize as completed: only completed sets leave the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSet {
    pub repetitions: u32,
    pub weight: f64,
    #[serde(skip_serializing, default = "completed_default")]
    pub is_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tag: Option<SetTag>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rpe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,
}

impl WorkoutSet {
    /// Creates a completed set with no tag, RPE or comment.
    pub fn new(repetitions: u32, weight: f64) -> Self {
        Self {
            repetitions,
            weight,
            is_completed: true,
            tag: None,
            rpe: None,
            comment: None,
        }
    }

    /// RPE as shown to the user: the stored value if it is one of the
    /// allowed ones.
    pub fn display_rpe(&self) -> Option<f64> {
        self.rpe.filter(|value| rpe::is_allowed(*value))
    }

    /// Estimated one-rep max for this set. See
    /// [`one_rep_max::estimate_one_rep_max`].
    pub fn estimated_one_rep_max(&self, max_reps: u32) -> Result<Option<f64>, MetricsError> {
        one_rep_max::estimate_one_rep_max(self.repetitions, self.weight, max_reps)
    }

    /// `"82.5 kg × 5"` in the given display unit.
    pub fn display_title(&self, unit: WeightUnit) -> String {
        let weight = WeightUnit::convert(self.weight, WeightUnit::Metric, unit);
        format!("{} × {}", unit.format(weight), self.repetitions)
    }

    /// Display title with the tag appended, e.g. `"82.5 kg × 5 (Dropset)"`.
    pub fn log_title(&self, unit: WeightUnit) -> String {
        let title = self.display_title(unit);
        match self.tag {
            Some(tag) => format!("{} ({})", title, tag.title()),
            None => title,
        }
    }

    /// Checks the set against the model bounds and the rule that only the
    /// current workout may contain uncompleted sets.
    pub fn validate(&self, in_current_workout: bool) -> Result<(), SetValidationError> {
        if self.repetitions > MAX_REPETITIONS {
            return Err(SetValidationError::RepetitionsOutOfRange(self.repetitions));
        }
        if !self.weight.is_finite() || self.weight < 0.0 || self.weight > MAX_WEIGHT {
            return Err(SetValidationError::WeightOutOfRange(self.weight));
        }
        if !self.is_completed && !in_current_workout {
            return Err(SetValidationError::UncompletedSetNotCurrent);
        }
        Ok(())
    }
}

/// Clamps an edited weight into the allowed range.
pub fn clamp_weight(weight: f64) -> f64 {
    weight.min(MAX_WEIGHT).max(0.0)
}
