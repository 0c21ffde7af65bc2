//! Uniform result shape shared by every validator.

use serde::Serialize;

/// Pass/fail against the three standards profiles.
///
/// Each flag is computed from the validator's inputs directly; the flags may
/// disagree with each other and with [`ValidationResult::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StandardsCompliance {
    pub bs7671: bool,
    pub iet: bool,
    pub safety: bool,
}

impl StandardsCompliance {
    pub fn all(ok: bool) -> Self {
        Self {
            bs7671: ok,
            iet: ok,
            safety: ok,
        }
    }
}

/// Outcome of one validation call.
///
/// Only produced through [`Findings::finish`], so `is_valid` always equals
/// `errors.is_empty()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
    standards_compliance: StandardsCompliance,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Hard failures, in the order the checks ran.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Advisories, in the order the checks ran.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn standards_compliance(&self) -> StandardsCompliance {
        self.standards_compliance
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Append-only accumulator used while a validator runs its checks.
#[derive(Debug)]
pub(crate) struct Findings {
    check: &'static str,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Findings {
    pub(crate) fn new(check: &'static str) -> Self {
        Self {
            check,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub(crate) fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn finish(self, standards_compliance: StandardsCompliance) -> ValidationResult {
        tracing::debug!(
            check = self.check,
            errors = self.errors.len(),
            warnings = self.warnings.len(),
            bs7671 = standards_compliance.bs7671,
            iet = standards_compliance.iet,
            safety = standards_compliance.safety,
            "validation complete"
        );
        ValidationResult {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
            standards_compliance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_follows_errors() {
        let mut findings = Findings::new("test");
        findings.warn("advisory");
        let result = findings.finish(StandardsCompliance::all(true));
        assert!(result.is_valid());
        assert!(result.has_warnings());

        let mut findings = Findings::new("test");
        findings.error("first");
        findings.error("second");
        let result = findings.finish(StandardsCompliance::all(true));
        assert!(!result.is_valid());
        assert_eq!(result.errors(), ["first", "second"]);
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let mut findings = Findings::new("test");
        findings.error("bad");
        let result = findings.finish(StandardsCompliance {
            bs7671: false,
            iet: true,
            safety: false,
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"][0], "bad");
        assert_eq!(json["standardsCompliance"]["bs7671"], false);
        assert_eq!(json["standardsCompliance"]["iet"], true);
        assert_eq!(json["standardsCompliance"]["safety"], false);
    }
}
