//! Maximum permitted voltage drop by circuit category (BS 7671 Appendix 4).

use core::fmt;
use core::str::FromStr;

use crate::error::TableError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CircuitCategory {
    Lighting,
    Power,
    Motor,
}

/// Category to maximum voltage drop, percent of nominal.
pub const MAX_VOLTAGE_DROP: [(CircuitCategory, f64); 3] = [
    (CircuitCategory::Lighting, 3.0),
    (CircuitCategory::Power, 5.0),
    (CircuitCategory::Motor, 10.0),
];

impl CircuitCategory {
    pub const ALL: [CircuitCategory; 3] = [
        CircuitCategory::Lighting,
        CircuitCategory::Power,
        CircuitCategory::Motor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CircuitCategory::Lighting => "lighting",
            CircuitCategory::Power => "power",
            CircuitCategory::Motor => "motor",
        }
    }

    /// Maximum voltage drop for this category, in percent.
    pub fn max_voltage_drop_percent(self) -> f64 {
        match self {
            CircuitCategory::Lighting => MAX_VOLTAGE_DROP[0].1,
            CircuitCategory::Power => MAX_VOLTAGE_DROP[1].1,
            CircuitCategory::Motor => MAX_VOLTAGE_DROP[2].1,
        }
    }
}

impl fmt::Display for CircuitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CircuitCategory {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TableError::unknown("circuit category", s))
    }
}
