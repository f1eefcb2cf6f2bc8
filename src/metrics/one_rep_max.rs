//! One-rep-max estimation from a completed set.

use crate::error::MetricsError;

/// The Brzycki denominator `37 - reps` must stay positive; rep ceilings at
/// or above this break the formula's domain.
pub const FORMULA_REP_LIMIT: u32 = 37;

/// Estimates the maximal single-repetition weight for a set of
/// `repetitions` at `weight`, using the Brzycki formula
/// `weight * 36 / (37 - reps)`.
///
/// Returns `None` when the set has no repetitions or more than `max_reps`:
/// the estimate is only trusted up to the configured ceiling. `max_reps`
/// must be below 37; higher ceilings are rejected instead of silently
/// producing negative or infinite estimates.
pub fn estimate_one_rep_max(
    repetitions: u32,
    weight: f64,
    max_reps: u32,
) -> Result<Option<f64>, MetricsError> {
    if max_reps >= FORMULA_REP_LIMIT {
        return Err(MetricsError::RepCeilingOutOfRange(max_reps));
    }
    if repetitions == 0 || repetitions > max_reps {
        return Ok(None);
    }
    Ok(Some(weight * 36.0 / (37.0 - f64::from(repetitions))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_rep_is_the_weight_itself() {
        // 36 / (37 - 1) = 1
        let estimate = estimate_one_rep_max(1, 100.0, 10).unwrap().unwrap();
        assert!(approx_eq(estimate, 100.0), "got {}", estimate);
    }

    #[test]
    fn test_five_reps() {
        // 100 * 36 / 32 = 112.5
        let estimate = estimate_one_rep_max(5, 100.0, 10).unwrap().unwrap();
        assert!(approx_eq(estimate, 112.5), "got {}", estimate);
    }

    #[test]
    fn test_zero_reps_has_no_estimate() {
        assert_eq!(estimate_one_rep_max(0, 100.0, 10).unwrap(), None);
    }

    #[test]
    fn test_reps_above_ceiling_have_no_estimate() {
        assert_eq!(estimate_one_rep_max(11, 100.0, 10).unwrap(), None);
        assert_eq!(estimate_one_rep_max(15, 100.0, 10).unwrap(), None);
    }

    #[test]
    fn test_reps_at_ceiling_still_estimate() {
        assert!(estimate_one_rep_max(10, 100.0, 10).unwrap().is_some());
    }

    #[test]
    fn test_ceiling_at_formula_limit_is_rejected() {
        assert_eq!(
            estimate_one_rep_max(5, 100.0, 37),
            Err(MetricsError::RepCeilingOutOfRange(37))
        );
        assert_eq!(
            estimate_one_rep_max(5, 100.0, 50),
            Err(MetricsError::RepCeilingOutOfRange(50))
        );
        // 36 is the highest usable ceiling
        assert!(estimate_one_rep_max(36, 100.0, 36).unwrap().is_some());
    }
}
