//! Relative-error comparison between a reference and a computed value.

use wc_core::WcResult;
use wc_core::numeric::{Real, checked_relative_error, relative_error};

pub const DEFAULT_ACCURACY_TOLERANCE: Real = 0.01;

/// True when `|expected - actual| / |expected| <= tolerance`.
///
/// `expected` must be non-zero. Release builds do not check this and the
/// comparison against `NaN`/`inf` is simply `false`; use
/// [`try_monitor_calculation_accuracy`] when the reference can be zero.
pub fn monitor_calculation_accuracy(expected: Real, actual: Real, tolerance: Real) -> bool {
    debug_assert!(expected != 0.0, "accuracy reference must be non-zero");
    let within = relative_error(expected, actual) <= tolerance;
    if !within {
        tracing::debug!(expected, actual, tolerance, "calculation outside tolerance");
    }
    within
}

pub fn try_monitor_calculation_accuracy(
    expected: Real,
    actual: Real,
    tolerance: Real,
) -> WcResult<bool> {
    Ok(checked_relative_error(expected, actual, "accuracy reference")? <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_percent_is_within_default() {
        assert!(monitor_calculation_accuracy(
            100.0,
            100.5,
            DEFAULT_ACCURACY_TOLERANCE
        ));
        assert!(!monitor_calculation_accuracy(
            100.0,
            102.0,
            DEFAULT_ACCURACY_TOLERANCE
        ));
    }

    #[test]
    fn negative_reference_uses_magnitude() {
        assert!(monitor_calculation_accuracy(-50.0, -50.25, 0.01));
    }

    #[test]
    fn zero_reference_is_reported() {
        assert!(try_monitor_calculation_accuracy(0.0, 1.0, 0.01).is_err());
        assert_eq!(try_monitor_calculation_accuracy(10.0, 10.05, 0.01), Ok(true));
    }
}
