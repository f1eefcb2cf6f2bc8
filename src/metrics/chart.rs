//! Chart series generation over exercise history.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MetricsError;
use crate::model::ExercisePerformance;
use crate::units::WeightUnit;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Derived quantity charted per session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MeasurementType {
    OneRepMax,
    TotalWeight,
    TotalSets,
    TotalRepetitions,
}

impl MeasurementType {
    /// All measurements for iteration.
    pub fn all() -> &'static [MeasurementType] {
        &[
            MeasurementType::OneRepMax,
            MeasurementType::TotalWeight,
            MeasurementType::TotalSets,
            MeasurementType::TotalRepetitions,
        ]
    }

    /// Display name for the measurement.
    pub fn title(&self) -> &'static str {
        match self {
            MeasurementType::OneRepMax => "1RM",
            MeasurementType::TotalWeight => "Total Weight",
            MeasurementType::TotalSets => "Total Sets",
            MeasurementType::TotalRepetitions => "Total Repetitions",
        }
    }
}

/// Trailing window used to filter history before charting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimeFrame {
    Month,
    ThreeMonths,
    Year,
    All,
}

impl TimeFrame {
    /// All time frames for iteration.
    pub fn all() -> &'static [TimeFrame] {
        &[
            TimeFrame::Month,
            TimeFrame::ThreeMonths,
            TimeFrame::Year,
            TimeFrame::All,
        ]
    }

    /// Display name for the time frame.
    pub fn title(&self) -> &'static str {
        match self {
            TimeFrame::Month => "Month",
            TimeFrame::ThreeMonths => "3 Months",
            TimeFrame::Year => "Year",
            TimeFrame::All => "All",
        }
    }

    /// Lower bound of the window ending at `now`; `None` for [`TimeFrame::All`].
    fn lower_bound(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let months = match self {
            TimeFrame::Month => 1,
            TimeFrame::ThreeMonths => 3,
            TimeFrame::Year => 12,
            TimeFrame::All => return None,
        };
        now.checked_sub_months(Months::new(months))
    }

    /// Whether a session started at `start` falls inside the window ending
    /// at `now`.
    fn contains(self, start: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        if matches!(self, TimeFrame::All) {
            return true;
        }
        match self.lower_bound(now) {
            Some(bound) => start >= bound && start <= now,
            // Calendar arithmetic underflowed; nothing can predate that.
            None => start <= now,
        }
    }
}

/// One charted point: a session timestamp and the measured value.
///
/// The timestamp is fractional hours since the Unix epoch: a plain real
/// with enough resolution for day-granularity charting, kept numeric for
/// chart-library compatibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MeasurementPoint {
    pub timestamp: f64,
    pub value: f64,
}

/// Chart x-axis value for a session start.
pub fn date_to_value(date: DateTime<Utc>) -> f64 {
    date.timestamp() as f64 / SECONDS_PER_HOUR
}

/// Inverse of [`date_to_value`], at whole-second resolution. `None` when the
/// value is outside the representable date range.
pub fn value_to_date(value: f64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp((value * SECONDS_PER_HOUR) as i64, 0)
}

/// Whether an axis value addresses exactly this session start.
pub fn date_equals_value(date: DateTime<Utc>, value: f64) -> bool {
    date_to_value(date) == value
}

/// Produces the chart series for one exercise's `history`: one point per
/// performance inside the time frame that yields a defined value for
/// `measurement`.
///
/// `history` may arrive in either chronological direction; the returned
/// points are sorted by timestamp ascending regardless, which the chart
/// contract requires. `now` anchors the time window and is passed in so the
/// computation stays deterministic.
///
/// Weight-valued measurements are converted to `unit`; `max_reps` bounds the
/// sets considered for 1RM estimation and must be below 37.
pub fn chart_series(
    history: &[ExercisePerformance],
    measurement: MeasurementType,
    time_frame: TimeFrame,
    unit: WeightUnit,
    max_reps: u32,
    now: DateTime<Utc>,
) -> Result<Vec<MeasurementPoint>, MetricsError> {
    let mut points = Vec::new();
    for performance in history {
        if !time_frame.contains(performance.session_start, now) {
            continue;
        }
        if let Some(value) = performance_value(performance, measurement, unit, max_reps)? {
            points.push(MeasurementPoint {
                timestamp: date_to_value(performance.session_start),
                value,
            });
        }
    }
    points.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
    debug!(
        points = points.len(),
        measurement = measurement.title(),
        time_frame = time_frame.title(),
        "chart.series"
    );
    Ok(points)
}

/// Value charted for one performance under the selected measurement; `None`
/// drops the performance from the series.
fn performance_value(
    performance: &ExercisePerformance,
    measurement: MeasurementType,
    unit: WeightUnit,
    max_reps: u32,
) -> Result<Option<f64>, MetricsError> {
    let value = match measurement {
        MeasurementType::OneRepMax => {
            let mut best: Option<f64> = None;
            for set in performance.completed_sets() {
                if let Some(estimate) = set.estimated_one_rep_max(max_reps)? {
                    best = Some(best.map_or(estimate, |b| b.max(estimate)));
                }
            }
            best.map(|b| WeightUnit::convert(b, WeightUnit::Metric, unit))
        }
        MeasurementType::TotalWeight => performance
            .total_completed_weight()
            .map(|w| WeightUnit::convert(w, WeightUnit::Metric, unit)),
        MeasurementType::TotalSets => performance.completed_set_count().map(|c| c as f64),
        MeasurementType::TotalRepetitions => performance.completed_repetitions().map(f64::from),
    };
    Ok(value)
}
