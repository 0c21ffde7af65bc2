//! Cable sizing: voltage drop, run length, installation type, ampacity.

use wc_core::numeric::{Real, percent_of};
use wc_core::units::{Current, Length, Voltage, amps, as_amps, as_metres, as_volts, constants};
use wc_tables::{
    CURRENT_SAFETY_MARGIN, CircuitCategory, InstallationType, ReferenceMethod, TableResult,
    optimal_cable_size, tabulated_capacity, temperature_correction,
};

use crate::result::{Findings, StandardsCompliance, ValidationResult};

/// Runs longer than this draw a warning (m).
pub const LONG_RUN_M: Real = 100.0;

/// Fraction of the drop limit above which a warning is raised.
const DROP_WARNING_FRACTION: Real = 0.8;

#[derive(Debug, Clone, Copy)]
pub struct CableSizingInput<'a> {
    /// Design current of the circuit.
    pub current: Current,
    /// Conductor cross-section, mm².
    pub cable_size_mm2: Real,
    /// One of `pvc`, `xlpe`, `swa`, `lsf`.
    pub installation_type: &'a str,
    /// Calculated voltage drop along the run.
    pub voltage_drop: Voltage,
    pub length: Length,
    /// Reference for the percentage drop.
    pub nominal_voltage: Voltage,
    /// Installation method the ampacity is read for.
    pub reference_method: ReferenceMethod,
}

impl<'a> CableSizingInput<'a> {
    /// Input referenced to the 230 V single-phase nominal, clipped direct.
    pub fn new(
        current: Current,
        cable_size_mm2: Real,
        installation_type: &'a str,
        voltage_drop: Voltage,
        length: Length,
    ) -> Self {
        Self {
            current,
            cable_size_mm2,
            installation_type,
            voltage_drop,
            length,
            nominal_voltage: constants::nominal_single_phase(),
            reference_method: ReferenceMethod::default(),
        }
    }

    pub fn with_nominal_voltage(mut self, nominal_voltage: Voltage) -> Self {
        self.nominal_voltage = nominal_voltage;
        self
    }

    pub fn with_reference_method(mut self, reference_method: ReferenceMethod) -> Self {
        self.reference_method = reference_method;
        self
    }
}

pub fn validate_cable_sizing(input: &CableSizingInput<'_>) -> ValidationResult {
    let mut findings = Findings::new("cable_sizing");

    let required_capacity = as_amps(input.current) * CURRENT_SAFETY_MARGIN;
    let drop_percent = percent_of(as_volts(input.voltage_drop), as_volts(input.nominal_voltage));
    let limit = CircuitCategory::Power.max_voltage_drop_percent();

    if drop_percent > limit {
        findings.error(format!(
            "Voltage drop {drop_percent:.2}% exceeds BS 7671 limit of {limit}%"
        ));
    } else if drop_percent > limit * DROP_WARNING_FRACTION {
        findings.warn(format!(
            "Voltage drop {drop_percent:.2}% is approaching the BS 7671 limit"
        ));
    }

    let length_m = as_metres(input.length);
    if length_m > LONG_RUN_M {
        findings.warn(format!(
            "Cable length {length_m}m is very long - consider voltage drop and fault levels"
        ));
    }

    let method = input.reference_method;
    let mut capacity = None;
    match input.installation_type.parse::<InstallationType>() {
        Err(_) => findings.error(format!(
            "Invalid installation type: {}",
            input.installation_type
        )),
        Ok(installation) => match tabulated_capacity(installation, method, input.cable_size_mm2) {
            None => findings.warn(format!(
                "Cable size {}mm² is not tabulated for {installation} (method {method}) - current capacity not verified",
                input.cable_size_mm2
            )),
            Some(iz) => {
                if iz < required_capacity {
                    let advice = match optimal_cable_size(installation, method, required_capacity) {
                        Some((size, _)) => format!("use {size}mm² or larger"),
                        None => "no tabulated size is sufficient".to_string(),
                    };
                    findings.warn(format!(
                        "Cable {}mm² {installation} rated {iz}A is below required capacity {required_capacity:.2}A - {advice}",
                        input.cable_size_mm2
                    ));
                }
                capacity = Some(iz);
            }
        },
    }

    let clean = !findings.has_errors();
    let compliance = StandardsCompliance {
        bs7671: clean && drop_percent <= limit,
        iet: clean,
        safety: clean && capacity.is_some_and(|iz| required_capacity <= iz),
    };
    findings.finish(compliance)
}

/// Tabulated capacity corrected for ambient temperature.
pub fn derated_capacity(tabulated: Current, ambient_c: i32) -> TableResult<Current> {
    let factor = temperature_correction(ambient_c)?;
    Ok(amps(as_amps(tabulated) * factor))
}
