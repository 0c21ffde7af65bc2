//! Structural validation of a batch file, before any check runs.

use std::collections::HashSet;

use wc_core::numeric::ensure_finite;

use crate::schema::BatchFile;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StructureError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Batch contains no checks")]
    NoChecks,

    #[error("Check #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("Duplicate check id: {id}")]
    DuplicateId { id: String },

    #[error("Check '{id}': {field} is not a finite number ({value})")]
    NonFinite {
        id: String,
        field: &'static str,
        value: f64,
    },
}

pub fn validate_batch(batch: &BatchFile) -> Result<(), StructureError> {
    if batch.version == 0 || batch.version > LATEST_VERSION {
        return Err(StructureError::UnsupportedVersion {
            version: batch.version,
        });
    }

    if batch.checks.is_empty() {
        return Err(StructureError::NoChecks);
    }

    let mut ids = HashSet::new();
    for (index, check) in batch.checks.iter().enumerate() {
        if check.id.trim().is_empty() {
            return Err(StructureError::EmptyId { index });
        }
        if !ids.insert(check.id.as_str()) {
            return Err(StructureError::DuplicateId {
                id: check.id.clone(),
            });
        }
        for (field, value) in check.kind.numbers() {
            if ensure_finite(value, field).is_err() {
                return Err(StructureError::NonFinite {
                    id: check.id.clone(),
                    field,
                    value,
                });
            }
        }
    }

    Ok(())
}
