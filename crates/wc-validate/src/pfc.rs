//! Prospective fault current against V/Z and device breaking capacity.

use wc_core::numeric::{Real, relative_error};
use wc_core::units::{Current, Resistance, Voltage, as_amps, as_ohms, as_volts};

use crate::result::{Findings, StandardsCompliance, ValidationResult};

/// Maximum relative disagreement between the supplied PFC and V/Z.
pub const PFC_TOLERANCE: Real = 0.05;
/// Fraction of breaking capacity above which a warning is raised.
pub const BREAKING_MARGIN: Real = 0.8;
pub const LOW_IMPEDANCE_OHM: Real = 0.01;
pub const HIGH_IMPEDANCE_OHM: Real = 5.0;

/// `calculated_pfc` is in amperes. `breaking_capacity` is the device's
/// rated short-circuit capacity (Icn), when known.
pub fn validate_pfc(
    voltage: Voltage,
    impedance: Resistance,
    calculated_pfc: Real,
    breaking_capacity: Option<Current>,
) -> ValidationResult {
    let mut findings = Findings::new("pfc");
    let z = as_ohms(impedance);
    let expected = as_volts(voltage) / z;
    let icn = breaking_capacity.map(as_amps);

    if relative_error(expected, calculated_pfc) > PFC_TOLERANCE {
        findings.error(format!(
            "PFC calculation error: expected {expected:.0}A, got {calculated_pfc:.0}A"
        ));
    }

    if let Some(icn) = icn {
        if calculated_pfc > icn {
            findings.error(format!(
                "PFC {calculated_pfc:.0}A exceeds device breaking capacity {icn:.0}A"
            ));
        } else if calculated_pfc > icn * BREAKING_MARGIN {
            findings.warn(format!(
                "PFC {calculated_pfc:.0}A is close to device breaking capacity {icn:.0}A"
            ));
        }
    }

    if z < LOW_IMPEDANCE_OHM {
        findings.warn(format!("Very low impedance ({z}Ω) - check measurement"));
    } else if z > HIGH_IMPEDANCE_OHM {
        findings.warn(format!(
            "High impedance ({z}Ω) - may affect protective device operation"
        ));
    }

    let clean = !findings.has_errors();
    findings.finish(StandardsCompliance {
        bs7671: clean && icn.is_none_or(|icn| calculated_pfc <= icn),
        iet: clean,
        safety: icn.is_none_or(|icn| calculated_pfc <= icn * BREAKING_MARGIN),
    })
}
