//! Power factor plausibility and the three PF thresholds.

use wc_core::numeric::Real;
use wc_core::units::{Power, as_watts};

use crate::result::{Findings, StandardsCompliance, ValidationResult};

/// Below this a warning recommends correction; also the BS 7671 profile threshold.
pub const PF_WARNING: Real = 0.85;
/// IET profile threshold.
pub const PF_IET: Real = 0.80;
/// Below this the PF is an error; also the safety profile threshold.
pub const PF_MINIMUM: Real = 0.70;

/// `apparent_power` is in VA, carried as a `Power` quantity.
pub fn validate_power_factor(
    active_power: Power,
    apparent_power: Power,
    calculated_pf: Real,
) -> ValidationResult {
    let mut findings = Findings::new("power_factor");
    let p = as_watts(active_power);
    let s = as_watts(apparent_power);

    if !(0.0..=1.0).contains(&calculated_pf) {
        findings.error(format!(
            "Invalid power factor: {calculated_pf}. Must be between 0 and 1"
        ));
    }

    if p > s {
        findings.error(format!(
            "Active power ({p}W) cannot exceed apparent power ({s}VA)"
        ));
    }

    // Warning and error thresholds are independent; a very low PF gets both.
    if calculated_pf < PF_WARNING {
        findings.warn(format!(
            "Low power factor ({calculated_pf}) - consider power factor correction"
        ));
    }
    if calculated_pf < PF_MINIMUM {
        findings.error(format!(
            "Power factor {calculated_pf} is too low - correction required"
        ));
    }

    findings.finish(StandardsCompliance {
        bs7671: calculated_pf >= PF_WARNING,
        iet: calculated_pf >= PF_IET,
        safety: calculated_pf >= PF_MINIMUM,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wc_core::units::watts;

    #[test]
    fn good_power_factor() {
        let result = validate_power_factor(watts(900.0), watts(1000.0), 0.9);
        assert!(result.is_valid());
        assert!(result.warnings().is_empty());
        assert_eq!(result.standards_compliance(), StandardsCompliance::all(true));
    }

    #[test]
    fn profiles_split_between_thresholds() {
        let result = validate_power_factor(watts(820.0), watts(1000.0), 0.82);
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
        let flags = result.standards_compliance();
        assert!(!flags.bs7671);
        assert!(flags.iet);
        assert!(flags.safety);
    }

    #[test]
    fn out_of_range_pf_is_invalid() {
        let result = validate_power_factor(watts(500.0), watts(1000.0), 1.2);
        assert!(!result.is_valid());
        assert!(result.errors()[0].contains("Invalid power factor"));
    }
}
