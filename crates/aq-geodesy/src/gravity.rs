//! Gravity as a function of geodetic latitude and height.

use aq_core::constants::DEG2RAD;

/// Gravitational acceleration at a geodetic latitude [degrees north] and
/// height above the reference ellipsoid [m], in [m/s2].
///
/// Implementations must be pure; the conversion library calls them from
/// otherwise side-effect-free code.
pub trait GravityModel {
    fn gravity(&self, latitude: f64, height: f64) -> f64;
}

/// WGS-84 normal gravity.
///
/// Surface gravity follows Somigliana's formula on the WGS-84 ellipsoid; the
/// height dependence is the standard second-order free-air correction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wgs84Gravity;

impl Wgs84Gravity {
    /// Normal gravity on the ellipsoid surface for the given latitude
    /// [degrees north], in [m/s2].
    pub fn surface_gravity(latitude: f64) -> f64 {
        let g_e = 9.7803253359;
        let k = 0.00193185265241;
        let e = 0.081819190842622;
        let sinphi = (latitude * DEG2RAD).sin();

        g_e * (1.0 + k * sinphi * sinphi) / (1.0 - e * e * sinphi * sinphi).sqrt()
    }
}

impl GravityModel for Wgs84Gravity {
    fn gravity(&self, latitude: f64, height: f64) -> f64 {
        let a = 6378137.0;
        let f = 1.0 / 298.257223563;
        let m = 0.00344978650684;
        let sinphi = (latitude * DEG2RAD).sin();

        Self::surface_gravity(latitude)
            * (1.0 - 2.0 * (1.0 + f + m - 2.0 * f * sinphi * sinphi) * height / a
                + 3.0 * height * height / (a * a))
    }
}

/// Gravity model returning a fixed value, independent of latitude and height.
///
/// Useful for tests and for callers that deliberately want the spherical
/// constant-gravity approximation.
#[derive(Debug, Clone, Copy)]
pub struct ConstantGravity(pub f64);

impl GravityModel for ConstantGravity {
    fn gravity(&self, _latitude: f64, _height: f64) -> f64 {
        self.0
    }
}
