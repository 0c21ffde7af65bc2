//! Generic plausibility check for a single calculator field.

use wc_core::numeric::Real;
use wc_tables::InputKind;

use crate::result::{Findings, StandardsCompliance, ValidationResult};

/// Check `value` against the range for `input_type` (`current`, `voltage`,
/// `length`, `powerFactor`, `resistance` or `frequency`).
pub fn validate_input_range(value: Real, input_type: &str) -> ValidationResult {
    match input_type.parse::<InputKind>() {
        Ok(kind) => validate_input_kind(value, kind),
        Err(_) => {
            let mut findings = Findings::new("input_range");
            findings.error(format!("Unknown input type: {input_type}"));
            findings.finish(StandardsCompliance::all(false))
        }
    }
}

pub fn validate_input_kind(value: Real, kind: InputKind) -> ValidationResult {
    let mut findings = Findings::new("input_range");
    let range = kind.range();

    if !range.contains(value) {
        findings.error(format!(
            "{kind} value {value} is outside valid range ({} - {})",
            range.min, range.max
        ));
    }

    if range.is_extreme(value) {
        findings.warn(format!("{kind} value {value} is at the extreme end of range"));
    }

    let clean = !findings.has_errors();
    findings.finish(StandardsCompliance::all(clean))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_range_value_is_clean() {
        let result = validate_input_kind(230.0, InputKind::Voltage);
        assert!(result.is_valid());
        assert!(result.warnings().is_empty());
        assert_eq!(result.standards_compliance(), StandardsCompliance::all(true));
    }

    #[test]
    fn out_of_range_also_reports_extreme() {
        let result = validate_input_kind(2_000.0, InputKind::Length);
        assert!(!result.is_valid());
        assert_eq!(
            result.errors(),
            ["length value 2000 is outside valid range (0.1 - 1000)"]
        );
        assert_eq!(result.warnings().len(), 1);
        assert_eq!(result.standards_compliance(), StandardsCompliance::all(false));
    }

    #[test]
    fn unknown_type_short_circuits() {
        let result = validate_input_range(25.0, "temperature");
        assert!(!result.is_valid());
        assert_eq!(result.errors(), ["Unknown input type: temperature"]);
        assert!(result.warnings().is_empty());
    }
}
