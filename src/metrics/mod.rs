//! Derived metrics over workout history.
//!
//! Features:
//! - One-rep-max estimation (Brzycki formula)
//! - Personal-record detection
//! - Chart series with time-window filtering
//! - Next-set suggestions
//!
//! Everything here is a pure function of caller-supplied snapshots; the
//! clock, where needed, is an explicit parameter.

pub mod chart;
pub mod one_rep_max;
pub mod prefill;
pub mod records;

pub use chart::{MeasurementPoint, MeasurementType, TimeFrame, chart_series};
pub use one_rep_max::estimate_one_rep_max;
pub use prefill::suggested_set;
pub use records::is_personal_record;
