//! aq-chemistry: conversions between atmospheric physical quantities.
//!
//! Provides:
//! - Chemical species table (canonical names and molar masses)
//! - Mixing ratio / number density / pressure / temperature conversions
//! - Layer-bounds (column/profile) conversions, including the
//!   gravity-dependent pressure-bounds-to-partial-column conversion
//! - Humidity quantities (saturation pressure, relative humidity)
//!
//! # Numeric contract
//!
//! Every conversion is a pure, total `f64` function: no validation, no
//! clamping, no allocation. Degenerate inputs (log of a non-positive
//! pressure, division by zero) produce IEEE NaN/infinity and the result
//! propagates unsuppressed, which is how downstream consumers mark missing
//! or invalid samples. The single deliberate exception is
//! [`density_from_partial_column_and_altitude_bounds`], which maps a
//! zero-thickness layer to a zero density instead of an infinity.
//!
//! Units are part of each function's contract and are stated per parameter:
//! pressure [Pa], temperature [K], number density [molec/m3], mass density
//! [kg/m3], molar mass [g/mol], altitude [m], latitude [degrees north],
//! mixing ratios as dimensionless fractions, partial columns [molec/m2].

pub mod column;
pub mod conversions;
pub mod humidity;
pub mod species;

// Re-exports for ergonomics
pub use column::{
    density_from_partial_column_and_altitude_bounds,
    partial_column_from_density_and_altitude_bounds,
    partial_column_number_density_from_volume_mixing_ratio, pressure_from_geopotential_height,
};
pub use conversions::*;
pub use humidity::{
    relative_humidity_from_h2o_number_density_and_temperature,
    relative_humidity_from_h2o_partial_pressure_and_temperature,
    water_vapour_saturation_density, water_vapour_saturation_pressure,
};
pub use species::Species;
