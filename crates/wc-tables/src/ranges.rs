//! Plausible input ranges for calculator fields.

use core::fmt;
use core::str::FromStr;

use crate::error::TableError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    Current,
    Voltage,
    Length,
    PowerFactor,
    Resistance,
    Frequency,
}

/// Inclusive bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Below twice the minimum or above 80% of the maximum.
    pub fn is_extreme(&self, value: f64) -> bool {
        value < self.min * 2.0 || value > self.max * 0.8
    }
}

pub const INPUT_RANGES: [(InputKind, InputRange); 6] = [
    (InputKind::Current, InputRange::new(0.1, 1000.0)),
    (InputKind::Voltage, InputRange::new(12.0, 1000.0)),
    (InputKind::Length, InputRange::new(0.1, 1000.0)),
    (InputKind::PowerFactor, InputRange::new(0.1, 1.0)),
    (InputKind::Resistance, InputRange::new(0.001, 100.0)),
    (InputKind::Frequency, InputRange::new(50.0, 60.0)),
];

impl InputKind {
    pub const ALL: [InputKind; 6] = [
        InputKind::Current,
        InputKind::Voltage,
        InputKind::Length,
        InputKind::PowerFactor,
        InputKind::Resistance,
        InputKind::Frequency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Current => "current",
            InputKind::Voltage => "voltage",
            InputKind::Length => "length",
            InputKind::PowerFactor => "powerFactor",
            InputKind::Resistance => "resistance",
            InputKind::Frequency => "frequency",
        }
    }

    pub fn range(self) -> InputRange {
        // INPUT_RANGES holds every variant exactly once, in ALL order.
        INPUT_RANGES[self as usize].1
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| TableError::unknown("input type", s))
    }
}
