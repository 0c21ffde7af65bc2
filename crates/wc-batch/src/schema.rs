//! Batch file schema.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use wc_core::units::{amps, constants, metres, ohms, volts, watts};
use wc_validate::{
    CableSizingInput, ReferenceMethod, ValidationResult, validate_cable_sizing, validate_earth_fault_loop,
    validate_input_range, validate_ohms_law, validate_pfc, validate_power_factor,
    validate_voltage_drop,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchFile {
    #[serde(default = "default_version")]
    pub version: u32,
    pub checks: Vec<CheckDef>,
}

fn default_version() -> u32 {
    crate::validate::LATEST_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckDef {
    pub id: String,
    #[serde(flatten)]
    pub kind: CheckKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckKind {
    CableSizing {
        current_a: f64,
        cable_size_mm2: f64,
        installation_type: String,
        voltage_drop_v: f64,
        length_m: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nominal_voltage_v: Option<f64>,
        /// `A1` through `G`; clipped direct (`C`) when absent.
        #[serde(default, with = "method_code", skip_serializing_if = "Option::is_none")]
        reference_method: Option<ReferenceMethod>,
    },
    PowerFactor {
        active_power_w: f64,
        apparent_power_va: f64,
        power_factor: f64,
    },
    Pfc {
        voltage_v: f64,
        impedance_ohm: f64,
        pfc_a: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        breaking_capacity_a: Option<f64>,
    },
    InputRange {
        value: f64,
        input_type: String,
    },
    /// The solved-for quantity may be omitted.
    OhmsLaw {
        #[serde(default)]
        voltage_v: f64,
        #[serde(default)]
        current_a: f64,
        #[serde(default)]
        resistance_ohm: f64,
        calculation_type: String,
    },
    EarthFaultLoop {
        device_rating_a: u32,
        measured_zs_ohm: f64,
    },
    VoltageDrop {
        voltage_drop_v: f64,
        #[serde(default = "default_nominal_v")]
        nominal_voltage_v: f64,
        category: String,
    },
}

fn default_nominal_v() -> f64 {
    constants::NOMINAL_SINGLE_PHASE_V
}

/// Reference methods travel as their BS 7671 codes.
mod method_code {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use wc_validate::ReferenceMethod;

    pub fn serialize<S: Serializer>(
        method: &Option<ReferenceMethod>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match method {
            Some(m) => serializer.serialize_str(m.as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ReferenceMethod>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|code| code.parse().map_err(D::Error::custom))
            .transpose()
    }
}

impl CheckKind {
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::CableSizing { .. } => "cable_sizing",
            CheckKind::PowerFactor { .. } => "power_factor",
            CheckKind::Pfc { .. } => "pfc",
            CheckKind::InputRange { .. } => "input_range",
            CheckKind::OhmsLaw { .. } => "ohms_law",
            CheckKind::EarthFaultLoop { .. } => "earth_fault_loop",
            CheckKind::VoltageDrop { .. } => "voltage_drop",
        }
    }

    /// Every numeric field with its schema name, in declaration order.
    pub fn numbers(&self) -> Vec<(&'static str, f64)> {
        let mut out = Vec::new();
        match self {
            CheckKind::CableSizing {
                current_a,
                cable_size_mm2,
                voltage_drop_v,
                length_m,
                nominal_voltage_v,
                ..
            } => {
                out.push(("current_a", *current_a));
                out.push(("cable_size_mm2", *cable_size_mm2));
                out.push(("voltage_drop_v", *voltage_drop_v));
                out.push(("length_m", *length_m));
                if let Some(v) = nominal_voltage_v {
                    out.push(("nominal_voltage_v", *v));
                }
            }
            CheckKind::PowerFactor {
                active_power_w,
                apparent_power_va,
                power_factor,
            } => {
                out.push(("active_power_w", *active_power_w));
                out.push(("apparent_power_va", *apparent_power_va));
                out.push(("power_factor", *power_factor));
            }
            CheckKind::Pfc {
                voltage_v,
                impedance_ohm,
                pfc_a,
                breaking_capacity_a,
            } => {
                out.push(("voltage_v", *voltage_v));
                out.push(("impedance_ohm", *impedance_ohm));
                out.push(("pfc_a", *pfc_a));
                if let Some(icn) = breaking_capacity_a {
                    out.push(("breaking_capacity_a", *icn));
                }
            }
            CheckKind::InputRange { value, .. } => out.push(("value", *value)),
            CheckKind::OhmsLaw {
                voltage_v,
                current_a,
                resistance_ohm,
                ..
            } => {
                out.push(("voltage_v", *voltage_v));
                out.push(("current_a", *current_a));
                out.push(("resistance_ohm", *resistance_ohm));
            }
            CheckKind::EarthFaultLoop {
                device_rating_a,
                measured_zs_ohm,
            } => {
                out.push(("device_rating_a", f64::from(*device_rating_a)));
                out.push(("measured_zs_ohm", *measured_zs_ohm));
            }
            CheckKind::VoltageDrop {
                voltage_drop_v,
                nominal_voltage_v,
                ..
            } => {
                out.push(("voltage_drop_v", *voltage_drop_v));
                out.push(("nominal_voltage_v", *nominal_voltage_v));
            }
        }
        out
    }

    /// Input fields as report lines, numbers and labels alike.
    pub fn report_inputs(&self) -> IndexMap<&'static str, String> {
        let mut inputs: IndexMap<&'static str, String> = self
            .numbers()
            .into_iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect();
        match self {
            CheckKind::CableSizing {
                installation_type,
                reference_method,
                ..
            } => {
                inputs.insert("installation_type", installation_type.clone());
                if let Some(method) = reference_method {
                    inputs.insert("reference_method", method.to_string());
                }
            }
            CheckKind::InputRange { input_type, .. } => {
                inputs.insert("input_type", input_type.clone());
            }
            CheckKind::OhmsLaw {
                calculation_type, ..
            } => {
                inputs.insert("calculation_type", calculation_type.clone());
            }
            CheckKind::VoltageDrop { category, .. } => {
                inputs.insert("category", category.clone());
            }
            CheckKind::PowerFactor { .. }
            | CheckKind::Pfc { .. }
            | CheckKind::EarthFaultLoop { .. } => {}
        }
        inputs
    }

    pub fn run(&self) -> ValidationResult {
        match self {
            CheckKind::CableSizing {
                current_a,
                cable_size_mm2,
                installation_type,
                voltage_drop_v,
                length_m,
                nominal_voltage_v,
                reference_method,
            } => {
                let mut input = CableSizingInput::new(
                    amps(*current_a),
                    *cable_size_mm2,
                    installation_type,
                    volts(*voltage_drop_v),
                    metres(*length_m),
                );
                if let Some(v) = nominal_voltage_v {
                    input = input.with_nominal_voltage(volts(*v));
                }
                if let Some(method) = reference_method {
                    input = input.with_reference_method(*method);
                }
                validate_cable_sizing(&input)
            }
            CheckKind::PowerFactor {
                active_power_w,
                apparent_power_va,
                power_factor,
            } => validate_power_factor(
                watts(*active_power_w),
                watts(*apparent_power_va),
                *power_factor,
            ),
            CheckKind::Pfc {
                voltage_v,
                impedance_ohm,
                pfc_a,
                breaking_capacity_a,
            } => validate_pfc(
                volts(*voltage_v),
                ohms(*impedance_ohm),
                *pfc_a,
                breaking_capacity_a.map(amps),
            ),
            CheckKind::InputRange { value, input_type } => validate_input_range(*value, input_type),
            CheckKind::OhmsLaw {
                voltage_v,
                current_a,
                resistance_ohm,
                calculation_type,
            } => validate_ohms_law(
                volts(*voltage_v),
                amps(*current_a),
                ohms(*resistance_ohm),
                calculation_type,
            ),
            CheckKind::EarthFaultLoop {
                device_rating_a,
                measured_zs_ohm,
            } => validate_earth_fault_loop(*device_rating_a, ohms(*measured_zs_ohm)),
            CheckKind::VoltageDrop {
                voltage_drop_v,
                nominal_voltage_v,
                category,
            } => validate_voltage_drop(volts(*voltage_drop_v), volts(*nominal_voltage_v), category),
        }
    }
}
