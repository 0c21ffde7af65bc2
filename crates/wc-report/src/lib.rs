//! wc-report: plain-text calculation reports.

pub mod error;
pub mod report;

pub use error::{ReportError, ReportResult};
pub use report::{
    FAIL_GLYPH, PASS_GLYPH, generate_calculation_report, generate_calculation_report_at,
    parse_compliance,
};
