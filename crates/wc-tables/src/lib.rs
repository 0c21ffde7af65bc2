//! wc-tables: BS 7671 reference tables used by the validators.
//!
//! Every table is `const` data. Keys are closed enums or checked lookups;
//! an unlisted key is an explicit [`TableError`], never a default.

pub mod cables;
pub mod error;
pub mod ranges;
pub mod temperature;
pub mod voltage_drop;
pub mod zs;

pub use cables::{InstallationType, ReferenceMethod, optimal_cable_size, tabulated_capacity};
pub use error::{TableError, TableResult};
pub use ranges::{INPUT_RANGES, InputKind, InputRange};
pub use temperature::{TEMPERATURE_CORRECTION, temperature_correction};
pub use voltage_drop::{CircuitCategory, MAX_VOLTAGE_DROP};
pub use zs::{MAX_ZS_TYPE_B, max_zs_type_b};

/// Multiplier applied to design current to get the required capacity.
pub const CURRENT_SAFETY_MARGIN: f64 = 1.25;
