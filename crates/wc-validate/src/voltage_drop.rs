//! Voltage drop against the limit for a given circuit category.

use wc_core::numeric::{Real, percent_of};
use wc_core::units::{Voltage, as_volts};
use wc_tables::CircuitCategory;

use crate::result::{Findings, StandardsCompliance, ValidationResult};

const WARNING_FRACTION: Real = 0.8;

/// `category` is `lighting`, `power` or `motor`.
pub fn validate_voltage_drop(
    voltage_drop: Voltage,
    nominal_voltage: Voltage,
    category: &str,
) -> ValidationResult {
    let mut findings = Findings::new("voltage_drop");

    let Ok(category) = category.parse::<CircuitCategory>() else {
        findings.error(format!("Unknown circuit category: {category}"));
        return findings.finish(StandardsCompliance::all(false));
    };

    let limit = category.max_voltage_drop_percent();
    let drop_percent = percent_of(as_volts(voltage_drop), as_volts(nominal_voltage));

    if drop_percent > limit {
        findings.error(format!(
            "Voltage drop {drop_percent:.2}% exceeds {limit}% limit for {category} circuits"
        ));
    } else if drop_percent > limit * WARNING_FRACTION {
        findings.warn(format!(
            "Voltage drop {drop_percent:.2}% is approaching the {limit}% limit for {category} circuits"
        ));
    }

    let clean = !findings.has_errors();
    findings.finish(StandardsCompliance {
        bs7671: clean,
        iet: clean,
        safety: clean && drop_percent <= limit * WARNING_FRACTION,
    })
}
