//! User preference values consumed by the metrics layer.
//!
//! Only the value type and its defaults live here; storing and loading these
//! preferences is the application's job.

use serde::{Deserialize, Serialize};

use crate::units::WeightUnit;

/// Default rest timer in seconds.
const DEFAULT_REST_TIME: u32 = 90;

/// Default rest timer for barbell exercises in seconds.
const DEFAULT_REST_TIME_BARBELL: u32 = 180;

/// Sets with more repetitions than this are ignored for 1RM estimation by
/// default. Must stay below 37, where the Brzycki formula breaks down.
const DEFAULT_MAX_REPETITIONS_ONE_REP_MAX: u32 = 10;

/// User preferences that affect derived metrics and display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub weight_unit: WeightUnit,
    pub max_repetitions_one_rep_max: u32,
    pub default_rest_time_secs: u32,
    pub default_rest_time_barbell_secs: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::default(),
            max_repetitions_one_rep_max: DEFAULT_MAX_REPETITIONS_ONE_REP_MAX,
            default_rest_time_secs: DEFAULT_REST_TIME,
            default_rest_time_barbell_secs: DEFAULT_REST_TIME_BARBELL,
        }
    }
}
