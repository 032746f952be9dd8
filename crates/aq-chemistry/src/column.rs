//! Layer-bounds conversions between densities and partial columns.

use aq_core::constants::{
    GRAV_ACCEL_45LAT_WGS84_SPHERE, MEAN_MOLAR_MASS_WET_AIR, MOLAR_GAS, NUM_AVOGADRO, STD_PRESSURE,
    STD_TEMPERATURE,
};
use aq_geodesy::GravityModel;

/// Layers thinner than this [m] contribute zero density instead of a
/// division blow-up.
const EPSILON: f64 = 1e-9;

/// Convert a partial column [?/m2] to a density [?/m3] using the altitude
/// boundaries of the layer.
///
/// Generic over the column quantity: works for any case where the conversion
/// is dividing the partial column by the layer thickness. A degenerate layer
/// (thickness below epsilon) maps to a zero density; a zero-thickness layer
/// holds nothing, it is not an undefined quantity.
///
/// * `altitude_bounds` - lower and upper altitude [m] of the layer
pub fn density_from_partial_column_and_altitude_bounds(
    partial_column: f64,
    altitude_bounds: [f64; 2],
) -> f64 {
    let height = (altitude_bounds[1] - altitude_bounds[0]).abs();

    if height < EPSILON {
        0.0
    } else {
        partial_column / height
    }
}

/// Convert a density [?/m3] to a partial column [?/m2] using the altitude
/// boundaries of the layer.
pub fn partial_column_from_density_and_altitude_bounds(
    density: f64,
    altitude_bounds: [f64; 2],
) -> f64 {
    density * (altitude_bounds[1] - altitude_bounds[0]).abs()
}

/// Convert a volume mixing ratio [1] and pressure boundaries to a partial
/// column number density [molec/m2].
///
/// The layer is represented by the geometric mean of its pressure bounds; an
/// approximate altitude for that pressure follows from the inverted
/// barometric formula at standard temperature, and the gravity model is
/// evaluated there. This is a single self-consistent estimate, not an
/// iterative solve; gravity varies enough with latitude and altitude that
/// the model evaluation is required, but a first-order altitude is accurate
/// enough for the column.
///
/// * `latitude` - geodetic latitude [degrees north]
/// * `molar_mass_air` - molar mass of air [g/mol]
/// * `pressure_bounds` - pressure [Pa] at the lower and upper layer boundary
pub fn partial_column_number_density_from_volume_mixing_ratio<G: GravityModel>(
    volume_mixing_ratio: f64,
    latitude: f64,
    molar_mass_air: f64,
    pressure_bounds: [f64; 2],
    gravity: &G,
) -> f64 {
    // representative layer pressure and its approximate altitude
    let p = (0.5 * (pressure_bounds[0].ln() + pressure_bounds[1].ln())).exp();
    let z = -(MOLAR_GAS * STD_TEMPERATURE) * (p / STD_PRESSURE).ln()
        / (1e-2 * molar_mass_air * GRAV_ACCEL_45LAT_WGS84_SPHERE);
    let g = gravity.gravity(latitude, z);

    -volume_mixing_ratio * NUM_AVOGADRO * (pressure_bounds[1] - pressure_bounds[0])
        / (1e-2 * molar_mass_air * g)
}

/// Convert a geopotential height [m] to a pressure [Pa] using model values.
///
/// A rough fallback based on constant standard atmosphere values; prefer any
/// conversion that uses actual temperature or pressure profiles when those
/// are available.
pub fn pressure_from_geopotential_height(gph: f64) -> f64 {
    STD_PRESSURE
        * (-GRAV_ACCEL_45LAT_WGS84_SPHERE * MEAN_MOLAR_MASS_WET_AIR * gph * 1.0e-3
            / (STD_TEMPERATURE * MOLAR_GAS))
            .exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aq_core::constants::MOLAR_MASS_DRY_AIR;
    use aq_core::numeric::{Tolerances, nearly_equal};
    use aq_geodesy::{ConstantGravity, Wgs84Gravity};

    #[test]
    fn degenerate_layer_yields_zero_density() {
        let d = density_from_partial_column_and_altitude_bounds(1e19, [5.0, 5.0 + 1e-10]);
        assert_eq!(d, 0.0);
        let d = density_from_partial_column_and_altitude_bounds(1e19, [5.0, 5.0]);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn thin_but_valid_layer_divides_normally() {
        let d = density_from_partial_column_and_altitude_bounds(1.0, [0.0, 1e-6]);
        assert!((d - 1e6).abs() < 1.0);
    }

    #[test]
    fn density_column_round_trip() {
        let bounds = [12_000.0, 14_500.0];
        let density = 3.7e17;
        let column = partial_column_from_density_and_altitude_bounds(density, bounds);
        let back = density_from_partial_column_and_altitude_bounds(column, bounds);
        assert!(nearly_equal(back, density, Tolerances::default()));
    }

    #[test]
    fn bound_order_does_not_matter() {
        let column = 8.3e21;
        let a = density_from_partial_column_and_altitude_bounds(column, [10_000.0, 11_000.0]);
        let b = density_from_partial_column_and_altitude_bounds(column, [11_000.0, 10_000.0]);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_pressure_difference_yields_zero_column() {
        let column = partial_column_number_density_from_volume_mixing_ratio(
            5e-8,
            0.0,
            MOLAR_MASS_DRY_AIR,
            [500e2, 500e2],
            &Wgs84Gravity,
        );
        assert_eq!(column, 0.0);
    }

    #[test]
    fn column_positive_when_pressure_decreases_upward() {
        // bounds ordered bottom (high pressure) to top (low pressure)
        let column = partial_column_number_density_from_volume_mixing_ratio(
            5e-8,
            45.0,
            MOLAR_MASS_DRY_AIR,
            [1000e2, 900e2],
            &Wgs84Gravity,
        );
        assert!(column > 0.0);
    }

    #[test]
    fn column_scales_linearly_with_mixing_ratio() {
        let bounds = [800e2, 750e2];
        let one = partial_column_number_density_from_volume_mixing_ratio(
            1e-8,
            30.0,
            MOLAR_MASS_DRY_AIR,
            bounds,
            &Wgs84Gravity,
        );
        let three = partial_column_number_density_from_volume_mixing_ratio(
            3e-8,
            30.0,
            MOLAR_MASS_DRY_AIR,
            bounds,
            &Wgs84Gravity,
        );
        assert!(nearly_equal(three, 3.0 * one, Tolerances::default()));
    }

    #[test]
    fn constant_gravity_substitutes_into_column_formula() {
        let g = 9.80665;
        let vmr = 2e-7;
        let bounds = [1000e2, 950e2];
        let column = partial_column_number_density_from_volume_mixing_ratio(
            vmr,
            45.0,
            MOLAR_MASS_DRY_AIR,
            bounds,
            &ConstantGravity(g),
        );
        // with a fixed g the whole conversion collapses to a closed form
        let expected = -vmr * aq_core::constants::NUM_AVOGADRO * (bounds[1] - bounds[0])
            / (1e-2 * MOLAR_MASS_DRY_AIR * g);
        assert!(nearly_equal(column, expected, Tolerances::default()));
    }

    #[test]
    fn higher_latitude_means_stronger_gravity_and_smaller_column() {
        let bounds = [1000e2, 900e2];
        let equator = partial_column_number_density_from_volume_mixing_ratio(
            1e-7,
            0.0,
            MOLAR_MASS_DRY_AIR,
            bounds,
            &Wgs84Gravity,
        );
        let pole = partial_column_number_density_from_volume_mixing_ratio(
            1e-7,
            90.0,
            MOLAR_MASS_DRY_AIR,
            bounds,
            &Wgs84Gravity,
        );
        assert!(pole < equator);
    }

    #[test]
    fn model_pressure_from_geopotential_height() {
        // sea level reproduces the standard pressure
        assert!(nearly_equal(
            pressure_from_geopotential_height(0.0),
            aq_core::constants::STD_PRESSURE,
            Tolerances::default()
        ));
        // pressure decreases monotonically with height
        let p5 = pressure_from_geopotential_height(5_000.0);
        let p10 = pressure_from_geopotential_height(10_000.0);
        assert!(p5 < aq_core::constants::STD_PRESSURE);
        assert!(p10 < p5);
    }
}
