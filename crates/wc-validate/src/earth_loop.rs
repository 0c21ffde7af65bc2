//! Measured earth fault loop impedance against the Type B maximum.

use wc_core::numeric::Real;
use wc_core::units::{Resistance, as_ohms};
use wc_tables::max_zs_type_b;

use crate::result::{Findings, StandardsCompliance, ValidationResult};

/// Measured values are taken at ambient; the tabulated maxima are at
/// conductor operating temperature. 0.8 is the usual correction.
pub const ZS_MEASURED_FRACTION: Real = 0.8;

pub fn validate_earth_fault_loop(device_rating_a: u32, measured_zs: Resistance) -> ValidationResult {
    let mut findings = Findings::new("earth_fault_loop");
    let z = as_ohms(measured_zs);

    let Ok(max) = max_zs_type_b(device_rating_a) else {
        findings.error(format!(
            "No maximum Zs tabulated for a {device_rating_a}A Type B device"
        ));
        return findings.finish(StandardsCompliance::all(false));
    };

    if z > max {
        findings.error(format!(
            "Measured Zs {z}Ω exceeds maximum {max}Ω for a {device_rating_a}A Type B device"
        ));
    } else if z > max * ZS_MEASURED_FRACTION {
        findings.warn(format!(
            "Measured Zs {z}Ω exceeds 80% of maximum ({max}Ω) - allow for conductor temperature rise"
        ));
    }

    let clean = !findings.has_errors();
    findings.finish(StandardsCompliance {
        bs7671: clean,
        iet: clean,
        safety: clean && z <= max * ZS_MEASURED_FRACTION,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wc_core::units::ohms;

    #[test]
    fn comfortably_below_maximum() {
        let result = validate_earth_fault_loop(32, ohms(0.8));
        assert!(result.is_valid());
        assert!(result.warnings().is_empty());
        assert_eq!(result.standards_compliance(), StandardsCompliance::all(true));
    }

    #[test]
    fn inside_temperature_margin_warns() {
        // 80 % of 1.44 Ω is 1.152 Ω
        let result = validate_earth_fault_loop(32, ohms(1.3));
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
        assert!(!result.standards_compliance().safety);
        assert!(result.standards_compliance().bs7671);
    }

    #[test]
    fn above_maximum_is_an_error() {
        let result = validate_earth_fault_loop(6, ohms(8.0));
        assert!(!result.is_valid());
        assert!(result.errors()[0].contains("7.67"));
    }

    #[test]
    fn unlisted_rating_is_an_error() {
        let result = validate_earth_fault_loop(63, ohms(0.2));
        assert_eq!(
            result.errors(),
            ["No maximum Zs tabulated for a 63A Type B device"]
        );
    }
}
