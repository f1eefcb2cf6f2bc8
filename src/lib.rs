//! liftlog - derived workout metrics
//!
//! Personal-record detection, one-rep-max estimation and chart series over
//! read-only workout history. The surrounding application owns storage,
//! querying and UI; everything here is a deterministic function of the
//! snapshots passed in.

pub mod error;
pub mod metrics;
pub mod model;
pub mod settings;
pub mod units;

pub use error::{MetricsError, SetValidationError};
pub use metrics::{
    MeasurementPoint, MeasurementType, TimeFrame, chart_series, estimate_one_rep_max,
    is_personal_record, suggested_set,
};
pub use model::{ExercisePerformance, SetTag, WorkoutSet};
pub use settings::Settings;
pub use units::WeightUnit;
