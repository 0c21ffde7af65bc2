//! Ohm's law sanity checks.

use core::fmt;
use core::str::FromStr;

use wc_core::numeric::Real;
use wc_core::units::{Current, Resistance, Voltage, as_amps, as_ohms, as_volts};

use crate::result::{Findings, StandardsCompliance, ValidationResult};

pub const HIGH_VOLTAGE_V: Real = 1_000.0;
pub const HIGH_CURRENT_A: Real = 1_000.0;
pub const HIGH_RESISTANCE_OHM: Real = 1_000_000.0;
pub const HIGH_POWER_W: Real = 10_000.0;

/// The quantity being solved for; the other two are the givens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OhmsLawTarget {
    Voltage,
    Current,
    Resistance,
}

impl OhmsLawTarget {
    pub const ALL: [OhmsLawTarget; 3] = [
        OhmsLawTarget::Voltage,
        OhmsLawTarget::Current,
        OhmsLawTarget::Resistance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OhmsLawTarget::Voltage => "voltage",
            OhmsLawTarget::Current => "current",
            OhmsLawTarget::Resistance => "resistance",
        }
    }
}

impl fmt::Display for OhmsLawTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OhmsLawTarget {
    type Err = wc_tables::TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| wc_tables::TableError::UnknownKey {
                table: "calculation type",
                key: s.to_string(),
            })
    }
}

/// String-keyed entry point; `calculation_type` is `voltage`, `current` or
/// `resistance`.
pub fn validate_ohms_law(
    voltage: Voltage,
    current: Current,
    resistance: Resistance,
    calculation_type: &str,
) -> ValidationResult {
    match calculation_type.parse::<OhmsLawTarget>() {
        Ok(target) => validate_ohms_law_for(voltage, current, resistance, target),
        Err(_) => {
            let mut findings = Findings::new("ohms_law");
            findings.error(format!("Invalid calculation type: {calculation_type}"));
            findings.finish(StandardsCompliance::all(false))
        }
    }
}

/// The solved-for value passed in is ignored; it is re-derived from the
/// givens. Warnings and compliance use the derived value.
pub fn validate_ohms_law_for(
    voltage: Voltage,
    current: Current,
    resistance: Resistance,
    target: OhmsLawTarget,
) -> ValidationResult {
    let mut findings = Findings::new("ohms_law");
    let (mut v, mut i, mut r) = (as_volts(voltage), as_amps(current), as_ohms(resistance));

    let require_positive = |findings: &mut Findings, value: Real, name: &str| {
        let ok = value > 0.0;
        if !ok {
            findings.error(format!("{name} must be greater than 0"));
        }
        ok
    };

    match target {
        OhmsLawTarget::Voltage => {
            let ok_i = require_positive(&mut findings, i, "Current");
            let ok_r = require_positive(&mut findings, r, "Resistance");
            if ok_i && ok_r {
                v = i * r;
            }
        }
        OhmsLawTarget::Current => {
            let ok_v = require_positive(&mut findings, v, "Voltage");
            let ok_r = require_positive(&mut findings, r, "Resistance");
            if ok_v && ok_r {
                i = v / r;
            }
        }
        OhmsLawTarget::Resistance => {
            let ok_v = require_positive(&mut findings, v, "Voltage");
            let ok_i = require_positive(&mut findings, i, "Current");
            if ok_v && ok_i {
                r = v / i;
            }
        }
    }

    let power = v * i;

    if v > HIGH_VOLTAGE_V {
        findings.warn(format!(
            "High voltage ({v}V) - ensure appropriate safety measures"
        ));
    }
    if i > HIGH_CURRENT_A {
        findings.warn(format!("High current ({i}A) - check cable ratings"));
    }
    if r > HIGH_RESISTANCE_OHM {
        findings.warn(format!(
            "Very high resistance ({r}Ω) - check for open circuit"
        ));
    }
    if power > HIGH_POWER_W {
        findings.warn(format!(
            "High power dissipation ({power}W) - check thermal ratings"
        ));
    }

    let within_lv = !findings.has_errors() && v <= HIGH_VOLTAGE_V && i <= HIGH_CURRENT_A;
    findings.finish(StandardsCompliance::all(within_lv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wc_core::units::{amps, ohms, volts};

    #[test]
    fn solves_for_current() {
        let result = validate_ohms_law(volts(230.0), amps(0.0), ohms(23.0), "current");
        assert!(result.is_valid());
        assert!(result.warnings().is_empty());
        assert_eq!(result.standards_compliance(), StandardsCompliance::all(true));
    }

    #[test]
    fn non_positive_givens_are_errors_in_order() {
        let result = validate_ohms_law(volts(0.0), amps(-1.0), ohms(5.0), "resistance");
        assert_eq!(
            result.errors(),
            ["Voltage must be greater than 0", "Current must be greater than 0"]
        );
        assert_eq!(result.standards_compliance(), StandardsCompliance::all(false));
    }

    #[test]
    fn solved_quantity_may_be_zero() {
        let result = validate_ohms_law(volts(0.0), amps(2.0), ohms(10.0), "voltage");
        assert!(result.is_valid());
    }

    #[test]
    fn high_values_warn_and_fail_profiles() {
        // 2000 A through 1 Ω: 2000 V and 4 MW
        let result = validate_ohms_law(volts(0.0), amps(2_000.0), ohms(1.0), "voltage");
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 3);
        assert!(result.warnings()[0].starts_with("High voltage"));
        assert!(result.warnings()[1].starts_with("High current"));
        assert!(result.warnings()[2].starts_with("High power dissipation"));
        assert_eq!(result.standards_compliance(), StandardsCompliance::all(false));
    }

    #[test]
    fn open_circuit_resistance_warns() {
        let result = validate_ohms_law(volts(230.0), amps(0.0001), ohms(0.0), "resistance");
        assert!(result.warnings()[0].contains("Very high resistance"));
    }

    #[test]
    fn unknown_calculation_type() {
        let result = validate_ohms_law(volts(1.0), amps(1.0), ohms(1.0), "power");
        assert_eq!(result.errors(), ["Invalid calculation type: power"]);
    }
}
