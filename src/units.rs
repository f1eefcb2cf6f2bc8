//! Weight units and conversion between them.

use serde::{Deserialize, Serialize};

/// One pound in kilograms (exact by definition).
const KILOGRAMS_PER_POUND: f64 = 0.453_592_37;

/// Display unit for weights.
///
/// Stored weights are always metric kilograms; converting to the display
/// unit is an explicit step, never implicit in a stored value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Metric,
    Imperial,
}

impl WeightUnit {
    /// All units for iteration.
    pub fn all() -> &'static [WeightUnit] {
        &[WeightUnit::Metric, WeightUnit::Imperial]
    }

    /// Unit abbreviation for display.
    pub fn abbrev(&self) -> &'static str {
        match self {
            WeightUnit::Metric => "kg",
            WeightUnit::Imperial => "lb",
        }
    }

    /// Fraction digits used when formatting a weight in this unit.
    /// Metric keeps one decimal for fractional plates, imperial rounds to
    /// whole pounds.
    pub fn max_fraction_digits(&self) -> u32 {
        match self {
            WeightUnit::Metric => 1,
            WeightUnit::Imperial => 0,
        }
    }

    /// Converts `weight` between units. Identity when `from == to`.
    ///
    /// No rounding happens here; display rounding is layered on top by
    /// [`WeightUnit::format`] or the caller.
    pub fn convert(weight: f64, from: WeightUnit, to: WeightUnit) -> f64 {
        match (from, to) {
            (WeightUnit::Metric, WeightUnit::Imperial) => weight / KILOGRAMS_PER_POUND,
            (WeightUnit::Imperial, WeightUnit::Metric) => weight * KILOGRAMS_PER_POUND,
            _ => weight,
        }
    }

    /// Formats a weight already expressed in this unit, with the unit's
    /// display rounding and abbreviation, e.g. `"82.5 kg"` or `"185 lb"`.
    pub fn format(&self, weight: f64) -> String {
        let digits = self.max_fraction_digits() as usize;
        let factor = 10f64.powi(digits as i32);
        let rounded = (weight * factor).round() / factor;
        if rounded.fract() == 0.0 {
            format!("{rounded:.0} {}", self.abbrev())
        } else {
            format!("{rounded:.digits$} {}", self.abbrev())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_convert_identity() {
        assert_eq!(
            WeightUnit::convert(80.0, WeightUnit::Metric, WeightUnit::Metric),
            80.0
        );
        assert_eq!(
            WeightUnit::convert(80.0, WeightUnit::Imperial, WeightUnit::Imperial),
            80.0
        );
    }

    #[test]
    fn test_convert_metric_to_imperial() {
        let lbs = WeightUnit::convert(100.0, WeightUnit::Metric, WeightUnit::Imperial);
        assert!(approx_eq(lbs, 220.46226218487757), "got {}", lbs);
    }

    #[test]
    fn test_convert_round_trip() {
        for weight in [0.0, 2.5, 47.5, 100.0, 99999.0] {
            let there = WeightUnit::convert(weight, WeightUnit::Metric, WeightUnit::Imperial);
            let back = WeightUnit::convert(there, WeightUnit::Imperial, WeightUnit::Metric);
            assert!(approx_eq(back, weight), "round trip of {}: {}", weight, back);
        }
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(WeightUnit::Metric.format(82.5), "82.5 kg");
        assert_eq!(WeightUnit::Metric.format(100.0), "100 kg");
        assert_eq!(WeightUnit::Metric.format(100.04), "100 kg");
    }

    #[test]
    fn test_format_imperial() {
        assert_eq!(WeightUnit::Imperial.format(185.2), "185 lb");
        assert_eq!(WeightUnit::Imperial.format(224.9), "225 lb");
    }

    #[test]
    fn test_default_is_metric() {
        assert_eq!(WeightUnit::default(), WeightUnit::Metric);
    }
}
