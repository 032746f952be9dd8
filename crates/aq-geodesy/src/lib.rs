//! aq-geodesy: Earth shape and gravity models for atmoquant.
//!
//! Provides:
//! - `GravityModel` trait (gravity as a function of geodetic latitude and height)
//! - `Wgs84Gravity`, the WGS-84 normal gravity model (Somigliana's formula
//!   with free-air correction)
//! - `ConstantGravity`, a fixed-value stand-in for tests
//! - local curvature radius of the Earth's surface
//!
//! The gravity model is a separate crate so that the conversion library can
//! take it as an injected capability instead of hard-wiring one formula.

pub mod gravity;

pub use gravity::{ConstantGravity, GravityModel, Wgs84Gravity};

use aq_core::constants::DEG2RAD;

/// Local curvature radius of the Earth's surface at the given latitude [m].
///
/// Combines the WGS-84 polar and equatorial radii with the latitude of
/// interest. Latitude is in degrees north.
pub fn local_curvature_radius(latitude: f64) -> f64 {
    let phi = latitude * DEG2RAD;
    let r_min = 6356752.0; // [m]
    let r_max = 6378137.0; // [m]

    1.0 / (phi.cos() * phi.cos() / (r_min * r_min) + phi.sin() * phi.sin() / (r_max * r_max)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curvature_radius_bounds() {
        let r_equator = local_curvature_radius(0.0);
        let r_pole = local_curvature_radius(90.0);
        assert!((r_equator - 6356752.0).abs() < 1.0);
        assert!((r_pole - 6378137.0).abs() < 1.0);
        let r_mid = local_curvature_radius(45.0);
        assert!(r_mid > r_equator && r_mid < r_pole);
    }
}
