//! Algebraic conversions between composition and state quantities.
//!
//! Each function encodes exactly one formula. The `1e-3`/`1e3` factors bridge
//! molar mass in [g/mol] against SI mass density and number density; they are
//! part of the contract, not rounding artifacts.

use aq_core::constants::{BOLTZMANN, MOLAR_MASS_DRY_AIR, MOLAR_MASS_H2O, NUM_AVOGADRO};

/// Convert volume mixing ratio [1] to mass mixing ratio [1].
///
/// * `molar_mass_species` - molar mass of the species [g/mol]
/// * `molar_mass_air` - molar mass of (dry or moist) air [g/mol]
pub fn mass_mixing_ratio_from_volume_mixing_ratio(
    volume_mixing_ratio: f64,
    molar_mass_species: f64,
    molar_mass_air: f64,
) -> f64 {
    volume_mixing_ratio * molar_mass_species / molar_mass_air
}

/// Convert mass mixing ratio [1] to volume mixing ratio [1].
pub fn volume_mixing_ratio_from_mass_mixing_ratio(
    mass_mixing_ratio: f64,
    molar_mass_species: f64,
    molar_mass_air: f64,
) -> f64 {
    mass_mixing_ratio * molar_mass_air / molar_mass_species
}

/// Convert volume mixing ratio [1] to number density [molec/m3].
///
/// * `number_density_air` - number density of air [molec/m3]
pub fn number_density_from_volume_mixing_ratio(
    volume_mixing_ratio: f64,
    number_density_air: f64,
) -> f64 {
    volume_mixing_ratio * number_density_air
}

/// Convert number density [molec/m3] to volume mixing ratio [1].
pub fn volume_mixing_ratio_from_number_density(
    number_density: f64,
    number_density_air: f64,
) -> f64 {
    number_density / number_density_air
}

/// Convert volume mixing ratio [1] to partial pressure [Pa].
///
/// * `pressure` - total air pressure [Pa]
pub fn partial_pressure_from_volume_mixing_ratio_and_pressure(
    volume_mixing_ratio: f64,
    pressure: f64,
) -> f64 {
    volume_mixing_ratio * pressure
}

/// Convert partial pressure [Pa] to volume mixing ratio [1].
pub fn volume_mixing_ratio_from_partial_pressure_and_pressure(
    partial_pressure: f64,
    pressure: f64,
) -> f64 {
    partial_pressure / pressure
}

/// Convert number density [molec/m3] to mass density [kg/m3].
///
/// * `molar_mass` - molar mass of the species [g/mol]
pub fn mass_density_from_number_density(number_density: f64, molar_mass: f64) -> f64 {
    1e-3 * number_density * molar_mass / NUM_AVOGADRO
}

/// Convert mass density [kg/m3] to number density [molec/m3].
pub fn number_density_from_mass_density(mass_density: f64, molar_mass: f64) -> f64 {
    1e3 * mass_density * NUM_AVOGADRO / molar_mass
}

/// Ideal gas law: pressure [Pa] from number density [molec/m3] and
/// temperature [K].
pub fn pressure_from_number_density_and_temperature(number_density: f64, temperature: f64) -> f64 {
    number_density * BOLTZMANN * temperature
}

/// Ideal gas law: number density [molec/m3] from pressure [Pa] and
/// temperature [K].
pub fn number_density_from_pressure_and_temperature(pressure: f64, temperature: f64) -> f64 {
    pressure / (BOLTZMANN * temperature)
}

/// Ideal gas law: temperature [K] from number density [molec/m3] and
/// pressure [Pa].
pub fn temperature_from_number_density_and_pressure(number_density: f64, pressure: f64) -> f64 {
    pressure / (number_density * BOLTZMANN)
}

/// Molar mass of moist air [g/mol] from the H2O mass mixing ratio q [1].
///
/// Derived from mass bookkeeping of the dry-air/water mixture:
/// `M_air = M_dry * M_h2o / ((1 - q) * M_h2o + q * M_dry)`.
///
/// Not interchangeable with
/// [`molar_mass_air_from_h2o_volume_mixing_ratio`]; the two weightings are
/// algebraically distinct and each matches its own input representation.
pub fn molar_mass_air_from_h2o_mass_mixing_ratio(h2o_mass_mixing_ratio: f64) -> f64 {
    (MOLAR_MASS_DRY_AIR * MOLAR_MASS_H2O)
        / ((1.0 - h2o_mass_mixing_ratio) * MOLAR_MASS_H2O
            + h2o_mass_mixing_ratio * MOLAR_MASS_DRY_AIR)
}

/// Molar mass of moist air [g/mol] from the H2O volume mixing ratio x [1].
///
/// Mole-fraction weighting: `M_air = (1 - x) * M_dry + x * M_h2o`.
pub fn molar_mass_air_from_h2o_volume_mixing_ratio(h2o_volume_mixing_ratio: f64) -> f64 {
    (1.0 - h2o_volume_mixing_ratio) * MOLAR_MASS_DRY_AIR
        + h2o_volume_mixing_ratio * MOLAR_MASS_H2O
}

/// Molar mass of air [g/mol] from bulk mass density [kg/m3] and number
/// density [molec/m3].
pub fn molar_mass_air_from_density_and_number_density(density: f64, number_density: f64) -> f64 {
    1e3 * density * NUM_AVOGADRO / number_density
}

/// Virtual temperature [K] from the molar mass of moist air [g/mol] and
/// temperature [K].
///
/// The virtual temperature is the temperature dry air would need to match
/// the density of the given moist air at equal pressure.
pub fn virtual_temperature_from_molar_mass_air_and_temperature(
    molar_mass_air: f64,
    temperature: f64,
) -> f64 {
    (MOLAR_MASS_DRY_AIR / molar_mass_air) * temperature
}

/// Temperature [K] from the molar mass of moist air [g/mol] and virtual
/// temperature [K].
pub fn temperature_from_molar_mass_air_and_virtual_temperature(
    molar_mass_air: f64,
    virtual_temperature: f64,
) -> f64 {
    (molar_mass_air / MOLAR_MASS_DRY_AIR) * virtual_temperature
}

#[cfg(test)]
mod tests {
    use super::*;
    use aq_core::constants::{STD_AIR_DENSITY, STD_PRESSURE, STD_TEMPERATURE};
    use aq_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn loschmidt_constant_from_ideal_gas_law() {
        // number density of air at standard temperature and pressure
        let n = number_density_from_pressure_and_temperature(101325.0, 273.15);
        assert!((n - 2.6867811e25).abs() < 1e20, "n = {n}");
    }

    #[test]
    fn ideal_gas_trio_consistent_at_stp() {
        let p = pressure_from_number_density_and_temperature(STD_AIR_DENSITY, STD_TEMPERATURE);
        assert!((p - STD_PRESSURE).abs() < 1.0);
        let t = temperature_from_number_density_and_pressure(STD_AIR_DENSITY, STD_PRESSURE);
        assert!((t - STD_TEMPERATURE).abs() < 1e-3);
    }

    #[test]
    fn ozone_mass_mixing_ratio_heavier_than_volume_mixing_ratio() {
        // M_O3 > M_air, so the mass mixing ratio must come out larger
        let vmr = 5e-8;
        let mmr = mass_mixing_ratio_from_volume_mixing_ratio(vmr, 47.9982, MOLAR_MASS_DRY_AIR);
        assert!(mmr > vmr);
        assert!((mmr / vmr - 47.9982 / MOLAR_MASS_DRY_AIR).abs() < 1e-12);
    }

    #[test]
    fn mass_density_of_air_at_stp() {
        // bulk air at STP is about 1.29 kg/m3
        let rho = mass_density_from_number_density(STD_AIR_DENSITY, MOLAR_MASS_DRY_AIR);
        assert!((rho - 1.2923).abs() < 1e-3, "rho = {rho}");
    }

    #[test]
    fn moist_air_is_lighter_than_dry_air() {
        let by_mmr = molar_mass_air_from_h2o_mass_mixing_ratio(0.01);
        let by_vmr = molar_mass_air_from_h2o_volume_mixing_ratio(0.01);
        assert!(by_mmr < MOLAR_MASS_DRY_AIR);
        assert!(by_vmr < MOLAR_MASS_DRY_AIR);
        // same humidity number in the two representations means different air
        assert!(!nearly_equal(by_mmr, by_vmr, Tolerances::default()));
    }

    #[test]
    fn dry_air_limits_agree() {
        // with no water both formulas reduce to the dry-air molar mass
        assert!(nearly_equal(
            molar_mass_air_from_h2o_mass_mixing_ratio(0.0),
            MOLAR_MASS_DRY_AIR,
            Tolerances::default()
        ));
        assert_eq!(
            molar_mass_air_from_h2o_volume_mixing_ratio(0.0),
            MOLAR_MASS_DRY_AIR
        );
    }

    #[test]
    fn molar_mass_from_density_pair_recovers_air() {
        let rho = mass_density_from_number_density(STD_AIR_DENSITY, MOLAR_MASS_DRY_AIR);
        let m = molar_mass_air_from_density_and_number_density(rho, STD_AIR_DENSITY);
        assert!(nearly_equal(m, MOLAR_MASS_DRY_AIR, Tolerances::default()));
    }

    #[test]
    fn virtual_temperature_exceeds_temperature_for_moist_air() {
        let molar_mass_moist = molar_mass_air_from_h2o_volume_mixing_ratio(0.02);
        let tv = virtual_temperature_from_molar_mass_air_and_temperature(molar_mass_moist, 288.15);
        assert!(tv > 288.15);
        let t = temperature_from_molar_mass_air_and_virtual_temperature(molar_mass_moist, tv);
        assert!(nearly_equal(t, 288.15, Tolerances::default()));
    }

    #[test]
    fn nan_propagates_through_the_kernel() {
        assert!(number_density_from_pressure_and_temperature(f64::NAN, 273.15).is_nan());
        assert!(mass_mixing_ratio_from_volume_mixing_ratio(f64::NAN, 48.0, 28.9644).is_nan());
        // division by zero yields infinity, not a panic
        assert!(
            volume_mixing_ratio_from_partial_pressure_and_pressure(100.0, 0.0).is_infinite()
        );
    }
}
