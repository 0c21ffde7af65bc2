use crate::WcError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute and relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WcError::NonFinite { what, value: v })
    }
}

/// `|actual - expected| / |expected|`.
///
/// Not guarded: an `expected` of zero yields `inf` or `NaN`.
/// Use [`checked_relative_error`] when the reference may be zero.
#[inline]
pub fn relative_error(expected: Real, actual: Real) -> Real {
    (actual - expected).abs() / expected.abs()
}

pub fn checked_relative_error(
    expected: Real,
    actual: Real,
    what: &'static str,
) -> Result<Real, WcError> {
    if expected == 0.0 {
        return Err(WcError::DivisionByZero { what });
    }
    ensure_finite(relative_error(expected, actual), what)
}

/// `part` as a percentage of `whole`.
#[inline]
pub fn percent_of(part: Real, whole: Real) -> Real {
    part / whole * 100.0
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn relative_error_is_symmetric_in_sign(expected in 0.1_f64..1e6, delta in -1e3_f64..1e3) {
            let up = relative_error(expected, expected + delta);
            let down = relative_error(expected, expected - delta);
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            prop_assert!(nearly_equal(up, down, tol));
        }
    }
}
