//! Batch execution.

use rayon::prelude::*;
use serde::Serialize;
use wc_report::generate_calculation_report;
use wc_validate::ValidationResult;

use crate::schema::{BatchFile, CheckDef};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Render a text report per check.
    pub with_reports: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub id: String,
    pub kind: &'static str,
    pub result: ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub with_warnings: usize,
}

/// Run every check. Output order matches `batch.checks`.
pub fn run_batch(batch: &BatchFile, options: RunOptions) -> Vec<CheckOutcome> {
    let outcomes: Vec<CheckOutcome> = batch
        .checks
        .par_iter()
        .map(|check| run_check(check, options))
        .collect();

    let summary = summarize(&outcomes);
    tracing::info!(
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid,
        with_warnings = summary.with_warnings,
        "batch complete"
    );
    outcomes
}

fn run_check(check: &CheckDef, options: RunOptions) -> CheckOutcome {
    let result = check.kind.run();
    if !result.is_valid() {
        tracing::warn!(id = %check.id, errors = ?result.errors(), "check failed");
    }

    let report = options.with_reports.then(|| {
        let mut results = indexmap::IndexMap::new();
        results.insert("valid", result.is_valid().to_string());
        results.insert("errors", result.errors().len().to_string());
        results.insert("warnings", result.warnings().len().to_string());
        generate_calculation_report(check.kind.name(), &check.kind.report_inputs(), &results, &result)
    });

    CheckOutcome {
        id: check.id.clone(),
        kind: check.kind.name(),
        result,
        report,
    }
}

pub fn summarize(outcomes: &[CheckOutcome]) -> BatchSummary {
    let valid = outcomes.iter().filter(|o| o.result.is_valid()).count();
    BatchSummary {
        total: outcomes.len(),
        valid,
        invalid: outcomes.len() - valid,
        with_warnings: outcomes.iter().filter(|o| o.result.has_warnings()).count(),
    }
}
