use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error("Report has no '{label}' compliance line")]
    MissingLine { label: &'static str },

    #[error("Unrecognised compliance mark for {label}: {found:?}")]
    BadGlyph { label: &'static str, found: String },
}
