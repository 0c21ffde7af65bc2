//! Maximum earth fault loop impedance for Type B MCBs (0.4 s disconnection, 230 V).

use crate::error::{TableError, TableResult};

/// Device rating (A) to maximum Zs (Ω).
pub const MAX_ZS_TYPE_B: [(u32, f64); 7] = [
    (6, 7.67),
    (10, 4.6),
    (16, 2.87),
    (20, 2.3),
    (32, 1.44),
    (40, 1.15),
    (50, 0.92),
];

pub fn max_zs_type_b(rating_a: u32) -> TableResult<f64> {
    MAX_ZS_TYPE_B
        .iter()
        .find(|(rating, _)| *rating == rating_a)
        .map(|(_, zs)| *zs)
        .ok_or_else(|| TableError::unknown("Type B device rating", rating_a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_ratings() {
        assert_eq!(max_zs_type_b(6), Ok(7.67));
        assert_eq!(max_zs_type_b(32), Ok(1.44));
        assert_eq!(max_zs_type_b(50), Ok(0.92));
    }

    #[test]
    fn unlisted_rating_is_an_error() {
        assert!(max_zs_type_b(63).is_err());
        assert!(max_zs_type_b(0).is_err());
    }

    #[test]
    fn zs_falls_as_rating_rises() {
        for pair in MAX_ZS_TYPE_B.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 > pair[1].1);
        }
    }
}
