//! Water vapour saturation and relative humidity.

use aq_core::constants::{MOLAR_GAS, NUM_AVOGADRO};

/// Water vapour saturation pressure [Pa] at the given temperature [K].
///
/// August-Roche-Magnus fit; the coefficients are the empirical curve
/// constants and must not be "improved".
pub fn water_vapour_saturation_pressure(temperature: f64) -> f64 {
    let temperature_c = temperature - 273.15;

    610.94 * (17.625 * temperature_c / (temperature_c + 243.04)).exp()
}

/// Water vapour saturation number density [molec/m3] at the given
/// temperature [K].
pub fn water_vapour_saturation_density(temperature: f64) -> f64 {
    water_vapour_saturation_pressure(temperature) * NUM_AVOGADRO / (MOLAR_GAS * temperature)
}

/// Relative humidity [1] from the partial pressure of water vapour [Pa] and
/// temperature [K].
pub fn relative_humidity_from_h2o_partial_pressure_and_temperature(
    partial_pressure_h2o: f64,
    temperature: f64,
) -> f64 {
    partial_pressure_h2o / water_vapour_saturation_pressure(temperature)
}

/// Relative humidity [1] from the water vapour number density [molec/m3] and
/// temperature [K].
pub fn relative_humidity_from_h2o_number_density_and_temperature(
    number_density_h2o: f64,
    temperature: f64,
) -> f64 {
    number_density_h2o / water_vapour_saturation_density(temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aq_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn saturation_pressure_at_20_celsius() {
        // standard meteorological reference value is ~2339 Pa; the Magnus
        // fit lands a few Pa below it
        let e_sat = water_vapour_saturation_pressure(293.15);
        assert!((e_sat - 2339.0).abs() < 10.0, "e_sat = {e_sat}");
    }

    #[test]
    fn saturation_pressure_at_0_celsius() {
        // the fit pins 0 degC at its leading coefficient
        assert_eq!(water_vapour_saturation_pressure(273.15), 610.94);
    }

    #[test]
    fn saturation_pressure_increases_with_temperature() {
        let cold = water_vapour_saturation_pressure(253.15);
        let mild = water_vapour_saturation_pressure(283.15);
        let warm = water_vapour_saturation_pressure(303.15);
        assert!(cold < mild && mild < warm);
    }

    #[test]
    fn saturation_density_at_20_celsius() {
        // about 5.8e23 molec/m3 (17 g/m3 of water vapour)
        let n_sat = water_vapour_saturation_density(293.15);
        assert!((n_sat - 5.77e23).abs() < 3e21, "n_sat = {n_sat}");
    }

    #[test]
    fn relative_humidity_is_one_at_saturation() {
        let t = 288.15;
        let e_sat = water_vapour_saturation_pressure(t);
        let rh = relative_humidity_from_h2o_partial_pressure_and_temperature(e_sat, t);
        assert!(nearly_equal(rh, 1.0, Tolerances::default()));

        let n_sat = water_vapour_saturation_density(t);
        let rh = relative_humidity_from_h2o_number_density_and_temperature(n_sat, t);
        assert!(nearly_equal(rh, 1.0, Tolerances::default()));
    }

    #[test]
    fn half_partial_pressure_is_half_humidity() {
        let t = 283.15;
        let e_sat = water_vapour_saturation_pressure(t);
        let rh = relative_humidity_from_h2o_partial_pressure_and_temperature(0.5 * e_sat, t);
        assert!(nearly_equal(rh, 0.5, Tolerances::default()));
    }
}
