//! Ambient temperature correction factors (70 °C thermoplastic, 30 °C reference).

use crate::error::{TableError, TableResult};

/// Ambient temperature (°C) to derating multiplier.
pub const TEMPERATURE_CORRECTION: [(i32, f64); 7] = [
    (30, 1.0),
    (35, 0.94),
    (40, 0.87),
    (45, 0.79),
    (50, 0.71),
    (55, 0.61),
    (60, 0.50),
];

pub fn temperature_correction(ambient_c: i32) -> TableResult<f64> {
    TEMPERATURE_CORRECTION
        .iter()
        .find(|(t, _)| *t == ambient_c)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| TableError::unknown("ambient temperature", ambient_c))
}
