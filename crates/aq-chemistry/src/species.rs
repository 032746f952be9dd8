//! Chemical species table.
//!
//! The enumeration order is load-bearing: [`Species::from_variable_name`]
//! performs a prefix scan in this order, so isotopologues (`H2O_161`,
//! `O3_666`, ...) and longer formulas (`CO2`, `ClONO2`, `N2O`, ...) must stay
//! ahead of the species whose name is a prefix of theirs. Reordering the
//! enum changes lookup semantics.

use aq_core::constants;

/// Atmospheric chemical species, including isotopologue variants.
///
/// Canonical names (see [`Species::name`]) are referenced as prefixes by
/// product-mapping metadata and external tooling; they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Air,
    BrO,
    C2H2,
    C2H6,
    CCl2F2,
    CCl3F,
    CF4,
    CH2O,
    CH3Cl,
    CH4,
    CHF2Cl,
    ClNO,
    ClONO2,
    ClO,
    CO2,
    COF2,
    CO,
    H2O161,
    H2O162,
    H2O171,
    H2O181,
    H2O2,
    H2O,
    HCl,
    HCN,
    HCOOH,
    HF,
    HO2NO2,
    HO2,
    HOCl,
    HNO3,
    N2O5,
    N2O,
    N2,
    NO2,
    NO3,
    NO,
    O2,
    O3666,
    O3667,
    O3668,
    O3686,
    O3,
    O4,
    OBrO,
    OClO,
    OCS,
    OH,
    SF6,
    SO2,
    /// Sentinel for unrecognized variable names.
    Unknown,
}

/// Number of real species (excludes the `Unknown` sentinel).
pub const NUM_SPECIES: usize = 50;

impl Species {
    /// Every species in enumeration order, `Unknown` last.
    pub const ALL: [Species; NUM_SPECIES + 1] = [
        Species::Air,
        Species::BrO,
        Species::C2H2,
        Species::C2H6,
        Species::CCl2F2,
        Species::CCl3F,
        Species::CF4,
        Species::CH2O,
        Species::CH3Cl,
        Species::CH4,
        Species::CHF2Cl,
        Species::ClNO,
        Species::ClONO2,
        Species::ClO,
        Species::CO2,
        Species::COF2,
        Species::CO,
        Species::H2O161,
        Species::H2O162,
        Species::H2O171,
        Species::H2O181,
        Species::H2O2,
        Species::H2O,
        Species::HCl,
        Species::HCN,
        Species::HCOOH,
        Species::HF,
        Species::HO2NO2,
        Species::HO2,
        Species::HOCl,
        Species::HNO3,
        Species::N2O5,
        Species::N2O,
        Species::N2,
        Species::NO2,
        Species::NO3,
        Species::NO,
        Species::O2,
        Species::O3666,
        Species::O3667,
        Species::O3668,
        Species::O3686,
        Species::O3,
        Species::O4,
        Species::OBrO,
        Species::OClO,
        Species::OCS,
        Species::OH,
        Species::SF6,
        Species::SO2,
        Species::Unknown,
    ];

    /// Canonical short name of the species.
    ///
    /// Total over the enumeration; `Unknown` maps to `"unknown"`.
    pub fn name(&self) -> &'static str {
        match self {
            Species::Air => "air",
            Species::BrO => "BrO",
            Species::C2H2 => "C2H2",
            Species::C2H6 => "C2H6",
            Species::CCl2F2 => "CCl2F2",
            Species::CCl3F => "CCl3F",
            Species::CF4 => "CF4",
            Species::CH2O => "CH2O",
            Species::CH3Cl => "CH3Cl",
            Species::CH4 => "CH4",
            Species::CHF2Cl => "CHF2Cl",
            Species::ClNO => "ClNO",
            Species::ClONO2 => "ClONO2",
            Species::ClO => "ClO",
            Species::CO2 => "CO2",
            Species::COF2 => "COF2",
            Species::CO => "CO",
            Species::H2O161 => "H2O_161",
            Species::H2O162 => "H2O_162",
            Species::H2O171 => "H2O_171",
            Species::H2O181 => "H2O_181",
            Species::H2O2 => "H2O2",
            Species::H2O => "H2O",
            Species::HCl => "HCl",
            Species::HCN => "HCN",
            Species::HCOOH => "HCOOH",
            Species::HF => "HF",
            Species::HO2NO2 => "HO2NO2",
            Species::HO2 => "HO2",
            Species::HOCl => "HOCl",
            Species::HNO3 => "HNO3",
            Species::N2O => "N2O",
            Species::N2O5 => "N2O5",
            Species::N2 => "N2",
            Species::NO2 => "NO2",
            Species::NO3 => "NO3",
            Species::NO => "NO",
            Species::O2 => "O2",
            Species::O3666 => "O3_666",
            Species::O3667 => "O3_667",
            Species::O3668 => "O3_668",
            Species::O3686 => "O3_686",
            Species::O3 => "O3",
            Species::O4 => "O4",
            Species::OBrO => "OBrO",
            Species::OClO => "OClO",
            Species::OCS => "OCS",
            Species::OH => "OH",
            Species::SF6 => "SF6",
            Species::SO2 => "SO2",
            Species::Unknown => "unknown",
        }
    }

    /// Molar mass of the species [g/mol].
    ///
    /// Total over the enumeration; `Unknown` maps to 0.
    pub fn molar_mass(&self) -> f64 {
        match self {
            Species::Air => constants::MOLAR_MASS_DRY_AIR,
            Species::BrO => constants::MOLAR_MASS_BRO,
            Species::C2H2 => constants::MOLAR_MASS_C2H2,
            Species::C2H6 => constants::MOLAR_MASS_C2H6,
            Species::CCl2F2 => constants::MOLAR_MASS_CCL2F2,
            Species::CCl3F => constants::MOLAR_MASS_CCL3F,
            Species::CF4 => constants::MOLAR_MASS_CF4,
            Species::CH2O => constants::MOLAR_MASS_CH2O,
            Species::CH3Cl => constants::MOLAR_MASS_CH3CL,
            Species::CH4 => constants::MOLAR_MASS_CH4,
            Species::CHF2Cl => constants::MOLAR_MASS_CHF2CL,
            Species::ClNO => constants::MOLAR_MASS_CLNO,
            Species::ClONO2 => constants::MOLAR_MASS_CLONO2,
            Species::ClO => constants::MOLAR_MASS_CLO,
            Species::CO2 => constants::MOLAR_MASS_CO2,
            Species::COF2 => constants::MOLAR_MASS_COF2,
            Species::CO => constants::MOLAR_MASS_CO,
            Species::H2O161 => constants::MOLAR_MASS_H2O_161,
            Species::H2O162 => constants::MOLAR_MASS_H2O_162,
            Species::H2O171 => constants::MOLAR_MASS_H2O_171,
            Species::H2O181 => constants::MOLAR_MASS_H2O_181,
            Species::H2O2 => constants::MOLAR_MASS_H2O2,
            Species::H2O => constants::MOLAR_MASS_H2O,
            Species::HCl => constants::MOLAR_MASS_HCL,
            Species::HCN => constants::MOLAR_MASS_HCN,
            Species::HCOOH => constants::MOLAR_MASS_HCOOH,
            Species::HF => constants::MOLAR_MASS_HF,
            Species::HO2NO2 => constants::MOLAR_MASS_HO2NO2,
            Species::HO2 => constants::MOLAR_MASS_HO2,
            Species::HOCl => constants::MOLAR_MASS_HOCL,
            Species::HNO3 => constants::MOLAR_MASS_HNO3,
            Species::N2O => constants::MOLAR_MASS_N2O,
            Species::N2O5 => constants::MOLAR_MASS_N2O5,
            Species::N2 => constants::MOLAR_MASS_N2,
            Species::NO2 => constants::MOLAR_MASS_NO2,
            Species::NO3 => constants::MOLAR_MASS_NO3,
            Species::NO => constants::MOLAR_MASS_NO,
            Species::O2 => constants::MOLAR_MASS_O2,
            Species::O3666 => constants::MOLAR_MASS_O3_666,
            Species::O3667 => constants::MOLAR_MASS_O3_667,
            Species::O3668 => constants::MOLAR_MASS_O3_668,
            Species::O3686 => constants::MOLAR_MASS_O3_686,
            Species::O3 => constants::MOLAR_MASS_O3,
            Species::O4 => constants::MOLAR_MASS_O4,
            Species::OBrO => constants::MOLAR_MASS_OBRO,
            Species::OClO => constants::MOLAR_MASS_OCLO,
            Species::OCS => constants::MOLAR_MASS_OCS,
            Species::OH => constants::MOLAR_MASS_OH,
            Species::SF6 => constants::MOLAR_MASS_SF6,
            Species::SO2 => constants::MOLAR_MASS_SO2,
            Species::Unknown => 0.0,
        }
    }

    /// Determine the species referenced by a variable name.
    ///
    /// Scans the table in enumeration order and returns the first species
    /// whose canonical name is a prefix of `variable_name` (variable names
    /// are conventionally `<species>_<quantity>`). Returns `Unknown` for an
    /// empty name or when nothing matches.
    pub fn from_variable_name(variable_name: &str) -> Species {
        for species in &Species::ALL[..NUM_SPECIES] {
            if variable_name.starts_with(species.name()) {
                return *species;
            }
        }
        Species::Unknown
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    /// Exact canonical-name parse (no prefix semantics).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .iter()
            .copied()
            .find(|species| species.name() == s)
            .ok_or("unknown species name")
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
