use thiserror::Error;

pub type WcResult<T> = Result<T, WcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },
}
