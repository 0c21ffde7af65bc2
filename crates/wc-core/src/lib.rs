//! wc-core: foundation types for wirecheck.
//!
//! Contains:
//! - units (uom SI electrical types + constructors)
//! - numeric (Real + tolerances + relative error helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{WcError, WcResult};
pub use numeric::*;
pub use units::*;
