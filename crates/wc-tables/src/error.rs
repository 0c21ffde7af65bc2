//! Error types for table lookups.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Unknown {table} key: {key}")]
    UnknownKey { table: &'static str, key: String },
}

pub type TableResult<T> = Result<T, TableError>;

impl TableError {
    pub(crate) fn unknown(table: &'static str, key: impl ToString) -> Self {
        TableError::UnknownKey {
            table,
            key: key.to_string(),
        }
    }
}
