// wc-core/src/units.rs

use uom::si::f64::{
    ElectricCurrent as UomElectricCurrent, ElectricPotential as UomElectricPotential,
    ElectricalResistance as UomElectricalResistance, Length as UomLength, Power as UomPower,
};

// Public canonical unit types (SI, f64)
pub type Voltage = UomElectricPotential;
pub type Current = UomElectricCurrent;
pub type Resistance = UomElectricalResistance;
pub type Length = UomLength;
pub type Power = UomPower;

#[inline]
pub fn volts(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn amps(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn ohms(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

#[inline]
pub fn metres(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

/// Plain-number accessors in the units the regulations tabulate.
#[inline]
pub fn as_volts(v: Voltage) -> f64 {
    use uom::si::electric_potential::volt;
    v.get::<volt>()
}

#[inline]
pub fn as_amps(i: Current) -> f64 {
    use uom::si::electric_current::ampere;
    i.get::<ampere>()
}

#[inline]
pub fn as_ohms(r: Resistance) -> f64 {
    use uom::si::electrical_resistance::ohm;
    r.get::<ohm>()
}

#[inline]
pub fn as_metres(l: Length) -> f64 {
    use uom::si::length::meter;
    l.get::<meter>()
}

#[inline]
pub fn as_watts(p: Power) -> f64 {
    use uom::si::power::watt;
    p.get::<watt>()
}

pub mod constants {
    use super::*;

    /// UK single-phase LV nominal supply.
    pub const NOMINAL_SINGLE_PHASE_V: f64 = 230.0;

    #[inline]
    pub fn nominal_single_phase() -> Voltage {
        volts(NOMINAL_SINGLE_PHASE_V)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _v = volts(230.0);
        let _i = amps(32.0);
        let _r = ohms(0.35);
        let _l = metres(25.0);
        let _p = watts(3_000.0);
        let _n = constants::nominal_single_phase();
    }

    #[test]
    fn ohms_law_through_quantities() {
        let i: Current = volts(230.0) / ohms(0.1);
        assert!(nearly_equal(as_amps(i), 2300.0, Tolerances::default()));

        let p: Power = volts(230.0) * amps(10.0);
        assert!(nearly_equal(as_watts(p), 2300.0, Tolerances::default()));
    }

    #[test]
    fn accessors_round_trip_base_units() {
        assert_eq!(as_volts(volts(400.0)), 400.0);
        assert_eq!(as_metres(metres(12.5)), 12.5);
        assert_eq!(as_ohms(ohms(1.44)), 1.44);
    }
}
