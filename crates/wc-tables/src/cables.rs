//! Conductor current-carrying capacity by BS 7671 reference method.
//!
//! Values are amperes per conductor size (mm²), copper, from the Appendix 4
//! tables for the cable family each installation type maps to:
//!
//! | Installation type | Cable family |
//! |---|---|
//! | `pvc` | PVC insulated singles (6491X) |
//! | `xlpe` | XLPE insulated, armoured (6944X) |
//! | `swa` | XLPE insulated, armoured (6944X) |
//! | `lsf` | LSOH singles (6491B) |
//!
//! A zero in a row means the cable family is not rated for that method.

use core::fmt;
use core::str::FromStr;

use wc_core::numeric::{Tolerances, nearly_equal};

use crate::error::TableError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstallationType {
    Pvc,
    Xlpe,
    Swa,
    Lsf,
}

/// Installation reference methods, in table column order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReferenceMethod {
    /// Enclosed in conduit in a thermally insulating wall.
    A1,
    /// Enclosed in conduit on a wall or ceiling.
    A2,
    /// Enclosed in conduit in a masonry wall.
    B1,
    /// Enclosed in trunking on a wall.
    B2,
    /// Clipped direct.
    #[default]
    C,
    /// In ducts in the ground.
    D1,
    /// Direct buried.
    D2,
    /// In free air.
    E,
    /// Ventilated cable tray.
    F,
    /// Perforated cable tray.
    G,
}

/// (size mm², capacity A per reference method).
type Row = (f64, [u16; 10]);

/// PVC insulated singles (6491X).
const PVC_SINGLES: &[Row] = &[
    (1.0, [13, 15, 16, 19, 24, 0, 0, 26, 25, 28]),
    (1.5, [16, 19, 20, 24, 31, 0, 0, 34, 32, 36]),
    (2.5, [22, 26, 28, 33, 42, 0, 0, 46, 44, 49]),
    (4.0, [29, 34, 37, 44, 56, 0, 0, 61, 58, 65]),
    (6.0, [37, 44, 47, 56, 71, 0, 0, 78, 74, 83]),
    (10.0, [51, 60, 64, 76, 96, 0, 0, 105, 100, 112]),
    (16.0, [68, 80, 85, 101, 128, 0, 0, 140, 133, 149]),
    (25.0, [89, 105, 112, 133, 168, 0, 0, 184, 175, 196]),
    (35.0, [110, 130, 138, 164, 207, 0, 0, 227, 216, 242]),
    (50.0, [134, 158, 168, 200, 252, 0, 0, 276, 263, 294]),
    (70.0, [171, 203, 216, 257, 324, 0, 0, 355, 338, 378]),
    (95.0, [209, 247, 263, 312, 393, 0, 0, 431, 410, 458]),
    (120.0, [241, 285, 304, 361, 454, 0, 0, 498, 474, 530]),
    (150.0, [275, 325, 347, 412, 519, 0, 0, 569, 542, 606]),
    (185.0, [314, 371, 396, 470, 593, 0, 0, 650, 619, 692]),
    (240.0, [364, 430, 459, 545, 687, 0, 0, 754, 717, 802]),
    (300.0, [419, 495, 528, 627, 792, 0, 0, 868, 826, 924]),
    (400.0, [486, 574, 613, 727, 918, 0, 0, 1007, 958, 1072]),
];

/// XLPE insulated, steel wire armoured (6944X).
const XLPE_SWA: &[Row] = &[
    (1.5, [0, 0, 0, 0, 32, 25, 27, 36, 34, 38]),
    (2.5, [0, 0, 0, 0, 43, 33, 36, 48, 46, 51]),
    (4.0, [0, 0, 0, 0, 57, 44, 48, 64, 61, 68]),
    (6.0, [0, 0, 0, 0, 73, 56, 61, 82, 78, 87]),
    (10.0, [0, 0, 0, 0, 98, 75, 81, 110, 105, 117]),
    (16.0, [0, 0, 0, 0, 131, 100, 108, 147, 140, 156]),
    (25.0, [0, 0, 0, 0, 168, 128, 138, 189, 180, 200]),
    (35.0, [0, 0, 0, 0, 201, 153, 165, 226, 215, 239]),
    (50.0, [0, 0, 0, 0, 242, 184, 198, 272, 259, 288]),
    (70.0, [0, 0, 0, 0, 310, 236, 254, 348, 331, 368]),
    (95.0, [0, 0, 0, 0, 375, 285, 307, 421, 400, 445]),
    (120.0, [0, 0, 0, 0, 431, 328, 353, 484, 460, 512]),
    (150.0, [0, 0, 0, 0, 491, 374, 402, 551, 524, 583]),
    (185.0, [0, 0, 0, 0, 557, 424, 456, 625, 594, 661]),
    (240.0, [0, 0, 0, 0, 641, 488, 525, 720, 684, 762]),
    (300.0, [0, 0, 0, 0, 738, 562, 605, 829, 788, 877]),
    (400.0, [0, 0, 0, 0, 855, 651, 701, 960, 912, 1015]),
];

/// LSOH singles (6491B).
const LSOH: &[Row] = &[
    (1.5, [16, 19, 20, 24, 31, 0, 0, 34, 32, 36]),
    (2.5, [22, 26, 28, 33, 42, 0, 0, 46, 44, 49]),
    (4.0, [29, 34, 37, 44, 56, 0, 0, 61, 58, 65]),
    (6.0, [37, 44, 47, 56, 71, 0, 0, 78, 74, 83]),
    (10.0, [51, 60, 64, 76, 96, 0, 0, 105, 100, 112]),
    (16.0, [68, 80, 85, 101, 128, 0, 0, 140, 133, 149]),
    (25.0, [89, 105, 112, 133, 168, 0, 0, 184, 175, 196]),
    (35.0, [110, 130, 138, 164, 207, 0, 0, 227, 216, 242]),
    (50.0, [134, 158, 168, 200, 252, 0, 0, 276, 263, 294]),
    (70.0, [171, 203, 216, 257, 324, 0, 0, 355, 338, 378]),
    (95.0, [209, 247, 263, 312, 393, 0, 0, 431, 410, 458]),
    (120.0, [241, 285, 304, 361, 454, 0, 0, 498, 474, 530]),
    (150.0, [275, 325, 347, 412, 519, 0, 0, 569, 542, 606]),
    (185.0, [314, 371, 396, 470, 593, 0, 0, 650, 619, 692]),
    (240.0, [364, 430, 459, 545, 687, 0, 0, 754, 717, 802]),
    (300.0, [419, 495, 528, 627, 792, 0, 0, 868, 826, 924]),
];

const SIZE_TOL: Tolerances = Tolerances {
    abs: 1e-6,
    rel: 1e-9,
};

impl ReferenceMethod {
    pub const ALL: [ReferenceMethod; 10] = [
        ReferenceMethod::A1,
        ReferenceMethod::A2,
        ReferenceMethod::B1,
        ReferenceMethod::B2,
        ReferenceMethod::C,
        ReferenceMethod::D1,
        ReferenceMethod::D2,
        ReferenceMethod::E,
        ReferenceMethod::F,
        ReferenceMethod::G,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceMethod::A1 => "A1",
            ReferenceMethod::A2 => "A2",
            ReferenceMethod::B1 => "B1",
            ReferenceMethod::B2 => "B2",
            ReferenceMethod::C => "C",
            ReferenceMethod::D1 => "D1",
            ReferenceMethod::D2 => "D2",
            ReferenceMethod::E => "E",
            ReferenceMethod::F => "F",
            ReferenceMethod::G => "G",
        }
    }

    fn column(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ReferenceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferenceMethod {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| TableError::unknown("reference method", s))
    }
}

impl InstallationType {
    pub const ALL: [InstallationType; 4] = [
        InstallationType::Pvc,
        InstallationType::Xlpe,
        InstallationType::Swa,
        InstallationType::Lsf,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InstallationType::Pvc => "pvc",
            InstallationType::Xlpe => "xlpe",
            InstallationType::Swa => "swa",
            InstallationType::Lsf => "lsf",
        }
    }

    fn rows(self) -> &'static [Row] {
        match self {
            InstallationType::Pvc => PVC_SINGLES,
            InstallationType::Xlpe | InstallationType::Swa => XLPE_SWA,
            InstallationType::Lsf => LSOH,
        }
    }

    /// Whether the cable family carries ratings for `method` at all.
    pub fn supports(self, method: ReferenceMethod) -> bool {
        self.rows().iter().any(|(_, ratings)| ratings[method.column()] > 0)
    }

    /// (size mm², capacity A) rated for `method`, ascending by size.
    pub fn capacities(self, method: ReferenceMethod) -> impl Iterator<Item = (f64, f64)> {
        self.rows().iter().filter_map(move |(size, ratings)| {
            let amps = ratings[method.column()];
            (amps > 0).then_some((*size, f64::from(amps)))
        })
    }
}

impl fmt::Display for InstallationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstallationType {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TableError::unknown("installation type", s))
    }
}

/// Tabulated capacity (A) of `size_mm2` installed by `method`, or `None` when
/// the size is not listed or not rated for that method.
pub fn tabulated_capacity(
    installation: InstallationType,
    method: ReferenceMethod,
    size_mm2: f64,
) -> Option<f64> {
    installation
        .capacities(method)
        .find(|(size, _)| nearly_equal(*size, size_mm2, SIZE_TOL))
        .map(|(_, amps)| amps)
}

/// Smallest listed size able to carry `required_a`, as (size mm², capacity A).
pub fn optimal_cable_size(
    installation: InstallationType,
    method: ReferenceMethod,
    required_a: f64,
) -> Option<(f64, f64)> {
    installation
        .capacities(method)
        .find(|(_, amps)| *amps >= required_a)
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::ReferenceMethod as M;

    #[test]
    fn parse_is_exact_lowercase() {
        assert_eq!("swa".parse(), Ok(InstallationType::Swa));
        assert!("SWA".parse::<InstallationType>().is_err());
        assert!("copper".parse::<InstallationType>().is_err());
    }

    #[test]
    fn method_parse_is_exact() {
        assert_eq!("B2".parse(), Ok(ReferenceMethod::B2));
        assert!("b2".parse::<ReferenceMethod>().is_err());
        assert!("H".parse::<ReferenceMethod>().is_err());
        assert_eq!(ReferenceMethod::default(), ReferenceMethod::C);
    }

    #[test]
    fn capacity_lookup() {
        assert_eq!(tabulated_capacity(InstallationType::Pvc, M::C, 2.5), Some(42.0));
        assert_eq!(tabulated_capacity(InstallationType::Swa, M::C, 16.0), Some(131.0));
        assert_eq!(tabulated_capacity(InstallationType::Lsf, M::C, 1.0), None);
        assert_eq!(tabulated_capacity(InstallationType::Xlpe, M::C, 3.0), None);
    }

    #[test]
    fn capacity_depends_on_method() {
        assert_eq!(tabulated_capacity(InstallationType::Pvc, M::A1, 2.5), Some(22.0));
        assert_eq!(tabulated_capacity(InstallationType::Pvc, M::E, 2.5), Some(46.0));
        assert_eq!(tabulated_capacity(InstallationType::Swa, M::D2, 4.0), Some(48.0));
    }

    #[test]
    fn unrated_methods_have_no_capacity() {
        assert!(!InstallationType::Pvc.supports(M::D1));
        assert_eq!(tabulated_capacity(InstallationType::Pvc, M::D1, 2.5), None);
        assert!(!InstallationType::Swa.supports(M::A1));
        assert_eq!(optimal_cable_size(InstallationType::Xlpe, M::A1, 1.0), None);
        assert!(InstallationType::Lsf.supports(M::G));
    }

    #[test]
    fn tables_ascend() {
        for installation in InstallationType::ALL {
            for method in ReferenceMethod::ALL {
                let rated: Vec<_> = installation.capacities(method).collect();
                for pair in rated.windows(2) {
                    assert!(pair[0].0 < pair[1].0, "{installation} {method} sizes");
                    assert!(pair[0].1 < pair[1].1, "{installation} {method} capacities");
                }
            }
        }
    }

    #[test]
    fn optimal_size_is_smallest_sufficient() {
        assert_eq!(
            optimal_cable_size(InstallationType::Pvc, M::C, 40.0),
            Some((2.5, 42.0))
        );
        assert_eq!(
            optimal_cable_size(InstallationType::Swa, M::C, 32.0),
            Some((1.5, 32.0))
        );
        assert_eq!(
            optimal_cable_size(InstallationType::Pvc, M::A1, 40.0),
            Some((10.0, 51.0))
        );
        assert_eq!(optimal_cable_size(InstallationType::Lsf, M::C, 1_000.0), None);
    }
}
