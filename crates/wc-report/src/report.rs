//! Fixed-layout text report for one calculation and its validation.
//!
//! ```text
//! CALCULATION REPORT
//! ==================
//! Type: cable_sizing
//! Generated: 2025-01-01T12:00:00+00:00
//!
//! INPUTS:
//!   current: 20
//! RESULTS:
//!   cable_size: 2.5
//!
//! STANDARDS COMPLIANCE:
//!   BS 7671: ✓
//!   IET: ✓
//!   Safety: ✗
//! ```
//!
//! `ERRORS:` and `WARNINGS:` sections follow only when non-empty. Caller text
//! is always rendered on one indented line, so section headers never come
//! from inputs.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use wc_validate::{StandardsCompliance, ValidationResult};

use crate::error::{ReportError, ReportResult};

pub const PASS_GLYPH: &str = "✓";
pub const FAIL_GLYPH: &str = "✗";

const COMPLIANCE_HEADER: &str = "STANDARDS COMPLIANCE:";
const BS7671_LABEL: &str = "BS 7671";
const IET_LABEL: &str = "IET";
const SAFETY_LABEL: &str = "Safety";

/// Render a report stamped with the current UTC time.
pub fn generate_calculation_report<K, V, RK, RV>(
    calculation_type: &str,
    inputs: &IndexMap<K, V>,
    results: &IndexMap<RK, RV>,
    validation: &ValidationResult,
) -> String
where
    K: Display,
    V: Display,
    RK: Display,
    RV: Display,
{
    generate_calculation_report_at(calculation_type, inputs, results, validation, Utc::now())
}

/// Render a report with an explicit timestamp. Map entries appear in
/// insertion order.
pub fn generate_calculation_report_at<K, V, RK, RV>(
    calculation_type: &str,
    inputs: &IndexMap<K, V>,
    results: &IndexMap<RK, RV>,
    validation: &ValidationResult,
    timestamp: DateTime<Utc>,
) -> String
where
    K: Display,
    V: Display,
    RK: Display,
    RV: Display,
{
    let flags = validation.standards_compliance();
    let mut lines = vec![
        "CALCULATION REPORT".to_string(),
        "==================".to_string(),
        format!("Type: {}", one_line(calculation_type)),
        format!("Generated: {}", timestamp.to_rfc3339()),
        String::new(),
        "INPUTS:".to_string(),
    ];
    lines.extend(inputs.iter().map(entry));
    lines.push("RESULTS:".to_string());
    lines.extend(results.iter().map(entry));
    lines.push(String::new());
    lines.push(COMPLIANCE_HEADER.to_string());
    lines.push(format!("  {BS7671_LABEL}: {}", glyph(flags.bs7671)));
    lines.push(format!("  {IET_LABEL}: {}", glyph(flags.iet)));
    lines.push(format!("  {SAFETY_LABEL}: {}", glyph(flags.safety)));

    if !validation.errors().is_empty() {
        lines.push(String::new());
        lines.push("ERRORS:".to_string());
        lines.extend(validation.errors().iter().map(|e| format!("  - {}", one_line(e))));
    }
    if !validation.warnings().is_empty() {
        lines.push(String::new());
        lines.push("WARNINGS:".to_string());
        lines.extend(validation.warnings().iter().map(|w| format!("  - {}", one_line(w))));
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Read the compliance marks back out of a rendered report.
pub fn parse_compliance(report: &str) -> ReportResult<StandardsCompliance> {
    let section: Vec<&str> = report
        .lines()
        .skip_while(|line| *line != COMPLIANCE_HEADER)
        .skip(1)
        .take(3)
        .collect();

    Ok(StandardsCompliance {
        bs7671: read_flag(&section, BS7671_LABEL)?,
        iet: read_flag(&section, IET_LABEL)?,
        safety: read_flag(&section, SAFETY_LABEL)?,
    })
}

fn entry<K: Display, V: Display>((key, value): (&K, &V)) -> String {
    format!("  {}: {}", one_line(key), one_line(value))
}

fn one_line(text: impl Display) -> String {
    text.to_string().replace(['\r', '\n'], " ")
}

fn glyph(ok: bool) -> &'static str {
    if ok { PASS_GLYPH } else { FAIL_GLYPH }
}

fn read_flag(section: &[&str], label: &'static str) -> ReportResult<bool> {
    let mark = section
        .iter()
        .find_map(|line| {
            line.trim()
                .strip_prefix(label)
                .and_then(|rest| rest.strip_prefix(':'))
        })
        .ok_or(ReportError::MissingLine { label })?
        .trim();

    match mark {
        PASS_GLYPH => Ok(true),
        FAIL_GLYPH => Ok(false),
        other => Err(ReportError::BadGlyph {
            label,
            found: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_mapping() {
        assert_eq!(glyph(true), "✓");
        assert_eq!(glyph(false), "✗");
    }

    #[test]
    fn missing_section_is_reported() {
        let err = parse_compliance("CALCULATION REPORT\n").unwrap_err();
        assert_eq!(err, ReportError::MissingLine { label: "BS 7671" });
    }

    #[test]
    fn header_must_be_unindented() {
        let text = "  STANDARDS COMPLIANCE:\n  BS 7671: ✓\n  IET: ✓\n  Safety: ✓\n";
        assert!(parse_compliance(text).is_err());
    }

    #[test]
    fn line_breaks_are_flattened() {
        assert_eq!(one_line("a\nb\r\nc"), "a b  c");
    }

    #[test]
    fn unknown_mark_is_reported() {
        let text = "STANDARDS COMPLIANCE:\n  BS 7671: yes\n  IET: ✓\n  Safety: ✓\n";
        let err = parse_compliance(text).unwrap_err();
        assert!(matches!(err, ReportError::BadGlyph { label: "BS 7671", .. }));
    }
}
