//! wc-validate: BS 7671 calculator input validation.
//!
//! Each `validate_*` function is pure and always returns a fully formed
//! [`ValidationResult`]. Domain problems are reported as `errors` (block the
//! calculation) or `warnings` (advisory); nothing here panics or returns `Err`
//! for an out-of-limit value.
//!
//! Physical quantities are `uom` types built with the `wc_core::units`
//! constructors:
//!
//! ```
//! use wc_core::units::{ohms, volts};
//! use wc_validate::validate_pfc;
//!
//! let result = validate_pfc(volts(230.0), ohms(0.1), 2300.0, None);
//! assert!(result.is_valid());
//! ```

pub mod accuracy;
pub mod cable;
pub mod earth_loop;
pub mod ohms;
pub mod pfc;
pub mod power_factor;
pub mod range;
pub mod result;
pub mod voltage_drop;

pub use accuracy::{
    DEFAULT_ACCURACY_TOLERANCE, monitor_calculation_accuracy, try_monitor_calculation_accuracy,
};
pub use cable::{CableSizingInput, derated_capacity, validate_cable_sizing};
pub use earth_loop::validate_earth_fault_loop;
pub use ohms::{OhmsLawTarget, validate_ohms_law, validate_ohms_law_for};
pub use pfc::validate_pfc;
pub use power_factor::validate_power_factor;
pub use range::{validate_input_kind, validate_input_range};
pub use result::{StandardsCompliance, ValidationResult};
pub use voltage_drop::validate_voltage_drop;
pub use wc_tables::ReferenceMethod;
