//! Process-wide read-only table of physical and chemical constants.
//!
//! Everything here is a plain `f64` in SI units unless the unit comment says
//! otherwise (molar masses are conventionally [g/mol], standard pressure is
//! [Pa]). Fundamental constants use the CODATA 2014 adjustment; molar masses
//! come from the standard atomic weight tables, with isotopologue masses
//! assembled from the individual isotope masses.

// SI prefixes

pub const YOTTA: f64 = 1.0e24;
pub const ZETTA: f64 = 1.0e21;
pub const EXA: f64 = 1.0e18;
pub const PETA: f64 = 1.0e15;
pub const TERA: f64 = 1.0e12;
pub const GIGA: f64 = 1.0e9;
pub const MEGA: f64 = 1.0e6;
pub const KILO: f64 = 1.0e3;
pub const MILLI: f64 = 1.0e-3;
pub const MICRO: f64 = 1.0e-6;
pub const NANO: f64 = 1.0e-9;
pub const PICO: f64 = 1.0e-12;
pub const FEMTO: f64 = 1.0e-15;
pub const ATTO: f64 = 1.0e-18;
pub const ZEPTO: f64 = 1.0e-21;
pub const YOCTO: f64 = 1.0e-24;

// Mathematical constants

/// 360/(2*pi)
pub const RAD2DEG: f64 = 57.29577951308232311024;
/// (2*pi)/360
pub const DEG2RAD: f64 = 0.01745329251994329547437;

// Physical constants

/// Avogadro constant [1/mol] (CODATA 2014)
pub const NUM_AVOGADRO: f64 = 6.022140857e23;
/// Speed of light in vacuum [m/s]
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;
/// Newtonian constant of gravitation [m3/(kg.s2)] (CODATA 2014)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;
/// Planck constant h [kg.m2/s] (CODATA 2014)
pub const PLANCKS_CONSTANT_H: f64 = 6.626070040e-34;
/// Reduced Planck constant hbar [kg.m2/s] (CODATA 2014)
pub const PLANCKS_CONSTANT_HBAR: f64 = 1.054571800e-34;
/// Electron volt [kg.m2/s2] (CODATA 2014)
pub const ELECTRON_VOLT: f64 = 1.6021766208e-19;
/// Electron mass [kg] (CODATA 2014)
pub const MASS_ELECTRON: f64 = 9.10938356e-31;
/// Muon mass [kg] (CODATA 2014)
pub const MASS_MUON: f64 = 1.883531594e-28;
/// Proton mass [kg] (CODATA 2014)
pub const MASS_PROTON: f64 = 1.672621898e-27;
/// Neutron mass [kg] (CODATA 2014)
pub const MASS_NEUTRON: f64 = 1.674927471e-27;
/// Rydberg energy [kg.m2/s2] (CODATA 2014)
pub const RYDBERG: f64 = 2.179872325e-18;
/// Boltzmann constant [kg.m2/(K.s2)] (CODATA 2014)
pub const BOLTZMANN: f64 = 1.38064852e-23;
/// Bohr magneton [A.m2] (CODATA 2014)
pub const BOHR_MAGNETON: f64 = 9.274009994e-24;
/// Nuclear magneton [A.m2] (CODATA 2014)
pub const NUCLEAR_MAGNETON: f64 = 5.050783699e-27;
/// Electron magnetic moment [A.m2] (CODATA 2014)
pub const ELECTRON_MAGNETIC_MOMENT: f64 = 9.284764620e-24;
/// Proton magnetic moment [A.m2] (CODATA 2014)
pub const PROTON_MAGNETIC_MOMENT: f64 = 1.4106067873e-26;
/// Molar gas constant [kg.m2/(K.mol.s2)] = [J/(K.mol)] (CODATA 2014)
pub const MOLAR_GAS: f64 = 8.3144598;
/// Faraday constant [A.s/mol] (CODATA 2014)
pub const FARADAY: f64 = 96485.33289;
/// Elementary charge [A.s] (CODATA 2014)
pub const ELECTRON_CHARGE: f64 = 1.6021766208e-19;
/// Unified atomic mass unit [kg] (CODATA 2014)
pub const UNIFIED_ATOMIC_MASS: f64 = 1.660539040e-27;
/// Stefan-Boltzmann constant [W/(m2.K4)] (CODATA 2014)
pub const STEFAN_BOLTZMANN_CONSTANT: f64 = 5.670367e-8;
/// Thomson cross section [m2] (CODATA 2014)
pub const THOMSON_CROSS_SECTION: f64 = 6.6524587158e-29;
/// Vacuum permittivity [A2.s4/(kg.m3)]
pub const VACUUM_PERMITTIVITY: f64 = 8.854187817e-12;
/// Vacuum permeability [kg.m/(A2.s2)]
pub const VACUUM_PERMEABILITY: f64 = 1.25663706144e-6;
/// Debye [A.s2/m2]
pub const DEBYE: f64 = 3.33564095198e-30;
/// Bohr radius [m]
pub const BOHR_RADIUS: f64 = 5.291772083e-11;
/// Solar mass [kg]
pub const SOLAR_MASS: f64 = 1.98892e30;

// Unit conversion factors (value of one unit in SI base terms)

pub const MINUTE: f64 = 6e1; // [s]
pub const HOUR: f64 = 3.6e3; // [s]
pub const DAY: f64 = 8.64e4; // [s]
pub const WEEK: f64 = 6.048e5; // [s]
pub const INCH: f64 = 2.54e-2; // [m]
pub const FOOT: f64 = 3.048e-1; // [m]
pub const YARD: f64 = 9.144e-1; // [m]
pub const MILE: f64 = 1.609344e3; // [m]
pub const NAUTICAL_MILE: f64 = 1.852e3; // [m]
pub const FATHOM: f64 = 1.8288e0; // [m]
pub const MIL: f64 = 2.54e-5; // [m]
pub const POINT: f64 = 3.52777777778e-4; // [m]
pub const TEXPOINT: f64 = 3.51459803515e-4; // [m]
pub const MICRON: f64 = 1e-6; // [m]
pub const ANGSTROM: f64 = 1e-10; // [m]
pub const HECTARE: f64 = 1e4; // [m2]
pub const ACRE: f64 = 4.04685642241e3; // [m2]
pub const BARN: f64 = 1e-28; // [m2]
pub const LITER: f64 = 1e-3; // [m3]
pub const US_GALLON: f64 = 3.78541178402e-3; // [m3]
pub const QUART: f64 = 9.46352946004e-4; // [m3]
pub const PINT: f64 = 4.73176473002e-4; // [m3]
pub const CUP: f64 = 2.36588236501e-4; // [m3]
pub const FLUID_OUNCE: f64 = 2.95735295626e-5; // [m3]
pub const TABLESPOON: f64 = 1.47867647813e-5; // [m3]
pub const TEASPOON: f64 = 4.92892159375e-6; // [m3]
pub const CANADIAN_GALLON: f64 = 4.54609e-3; // [m3]
pub const UK_GALLON: f64 = 4.546092e-3; // [m3]
pub const MILES_PER_HOUR: f64 = 4.4704e-1; // [m/s]
pub const KILOMETERS_PER_HOUR: f64 = 2.77777777778e-1; // [m/s]
pub const KNOT: f64 = 5.14444444444e-1; // [m/s]
pub const POUND_MASS: f64 = 4.5359237e-1; // [kg]
pub const OUNCE_MASS: f64 = 2.8349523125e-2; // [kg]
pub const TON: f64 = 9.0718474e2; // [kg]
pub const METRIC_TON: f64 = 1e3; // [kg]
pub const UK_TON: f64 = 1.0160469088e3; // [kg]
pub const TROY_OUNCE: f64 = 3.1103475e-2; // [kg]
pub const CARAT: f64 = 2e-4; // [kg]
pub const GRAM_FORCE: f64 = 9.80665e-3; // [kg.m/s2]
pub const POUND_FORCE: f64 = 4.44822161526e0; // [kg.m/s2]
pub const KILOPOUND_FORCE: f64 = 4.44822161526e3; // [kg.m/s2]
pub const POUNDAL: f64 = 1.38255e-1; // [kg.m/s2]
pub const CALORIE: f64 = 4.1868e0; // [kg.m2/s2]
pub const BTU: f64 = 1.05505585262e3; // [kg.m2/s2]
pub const THERM: f64 = 1.05506e8; // [kg.m2/s2]
pub const HORSEPOWER: f64 = 7.457e2; // [kg.m2/s3]
pub const BAR: f64 = 1e5; // [kg/(m.s2)]
pub const PASCAL: f64 = 1.0; // [kg/(m.s2)]
pub const TORR: f64 = 1.33322368421e2; // [kg/(m.s2)]
pub const METER_OF_MERCURY: f64 = 1.33322368421e5; // [kg/(m.s2)]
pub const INCH_OF_MERCURY: f64 = 3.38638815789e3; // [kg/(m.s2)]
pub const INCH_OF_WATER: f64 = 2.490889e2; // [kg/(m.s2)]
pub const PSI: f64 = 6.89475729317e3; // [kg/(m.s2)]
pub const POISE: f64 = 1e-1; // [kg/(m.s)]
pub const STOKES: f64 = 1e-4; // [m2/s]
pub const GAUSS: f64 = 1e-4; // [kg/(A.s2)]
pub const STILB: f64 = 1e4; // [cd/m2]
pub const LUMEN: f64 = 1e0; // [cd.sr]
pub const LUX: f64 = 1e0; // [cd.sr/m2]
pub const PHOT: f64 = 1e4; // [cd.sr/m2]
pub const FOOTCANDLE: f64 = 1.076e1; // [cd.sr/m2]
pub const LAMBERT: f64 = 1e4; // [cd.sr/m2]
pub const FOOTLAMBERT: f64 = 1.07639104e1; // [cd.sr/m2]
pub const CURIE: f64 = 3.7e10; // [1/s]
pub const ROENTGEN: f64 = 2.58e-4; // [A.s/kg]
pub const RAD: f64 = 1e-2; // [m2/s2]
pub const NEWTON: f64 = 1e0; // [kg.m/s2]
pub const DYNE: f64 = 1e-5; // [kg.m/s2]
pub const JOULE: f64 = 1e0; // [kg.m2/s2]
pub const ERG: f64 = 1e-7; // [kg.m2/s2]

// Astronomical constants

pub const ASTRONOMICAL_UNIT: f64 = 1.49597870691e11; // [m]
pub const LIGHT_YEAR: f64 = 9.46053620707e15; // [m]
pub const PARSEC: f64 = 3.08567758135e16; // [m]

// Molar masses [g/mol]

pub const MOLAR_MASS_DRY_AIR: f64 = 28.9644;
pub const MOLAR_MASS_BRO: f64 = 95.9034;
pub const MOLAR_MASS_C2H2: f64 = 26.0373;
pub const MOLAR_MASS_C2H2O2: f64 = 58.036163;
pub const MOLAR_MASS_C2H3NO5: f64 = 121.04892;
pub const MOLAR_MASS_C2H6: f64 = 30.0690;
pub const MOLAR_MASS_C3H8: f64 = 44.09562;
pub const MOLAR_MASS_C5H8: f64 = 68.11702;
pub const MOLAR_MASS_CCL2F2: f64 = 120.9135;
pub const MOLAR_MASS_CCL3F: f64 = 137.3681;
pub const MOLAR_MASS_CF4: f64 = 88.00431;
pub const MOLAR_MASS_CH2O: f64 = 30.026;
pub const MOLAR_MASS_CH3CL: f64 = 50.4875;
pub const MOLAR_MASS_CH4: f64 = 16.0425;
pub const MOLAR_MASS_CHF2CL: f64 = 86.4684;
pub const MOLAR_MASS_CLNO: f64 = 65.4591;
pub const MOLAR_MASS_CLONO2: f64 = 97.4579;
pub const MOLAR_MASS_CLO: f64 = 51.4524;
pub const MOLAR_MASS_CO2: f64 = 44.0095;
pub const MOLAR_MASS_COF2: f64 = 66.0069;
pub const MOLAR_MASS_CO: f64 = 28.0101;
pub const MOLAR_MASS_H2O: f64 = 18.0153;
pub const MOLAR_MASS_H2O_161: f64 = 1.00782503207 + 15.99491461956 + 1.00782503207;
pub const MOLAR_MASS_H2O_162: f64 = 1.00782503207 + 15.99491461956 + 2.0141017778;
pub const MOLAR_MASS_H2O_171: f64 = 1.00782503207 + 16.99913170 + 1.00782503207;
pub const MOLAR_MASS_H2O_181: f64 = 1.00782503207 + 17.9991610 + 1.00782503207;
pub const MOLAR_MASS_H2O2: f64 = 34.01468;
pub const MOLAR_MASS_HCL: f64 = 36.4609;
pub const MOLAR_MASS_HCN: f64 = 27.0253;
pub const MOLAR_MASS_HCOOH: f64 = 46.0254;
pub const MOLAR_MASS_HF: f64 = 20.006343;
pub const MOLAR_MASS_HNO2: f64 = 47.013494;
pub const MOLAR_MASS_HNO3: f64 = 63.0129;
pub const MOLAR_MASS_HO2NO2: f64 = 79.0122;
pub const MOLAR_MASS_HO2: f64 = 33.00674;
pub const MOLAR_MASS_HOCL: f64 = 52.4603;
pub const MOLAR_MASS_IO: f64 = 142.903873;
pub const MOLAR_MASS_N2O: f64 = 44.0129;
pub const MOLAR_MASS_N2O5: f64 = 108.0104;
pub const MOLAR_MASS_N2: f64 = 28.01340;
pub const MOLAR_MASS_NO2: f64 = 46.00550;
pub const MOLAR_MASS_NO3: f64 = 62.0049;
pub const MOLAR_MASS_NO: f64 = 30.00610;
pub const MOLAR_MASS_O2: f64 = 32.000;
pub const MOLAR_MASS_O3: f64 = 47.99820;
pub const MOLAR_MASS_O3_666: f64 = 15.99491461956 + 15.99491461956 + 15.99491461956;
pub const MOLAR_MASS_O3_667: f64 = 15.99491461956 + 15.99491461956 + 16.99913170;
pub const MOLAR_MASS_O3_668: f64 = 15.99491461956 + 15.99491461956 + 17.9991610;
pub const MOLAR_MASS_O3_686: f64 = 15.99491461956 + 17.9991610 + 15.99491461956;
pub const MOLAR_MASS_O4: f64 = 63.9976;
pub const MOLAR_MASS_OBRO: f64 = 111.9028;
pub const MOLAR_MASS_OCLO: f64 = 67.4518;
pub const MOLAR_MASS_OCS: f64 = 60.0751;
pub const MOLAR_MASS_OH: f64 = 17.00734;
pub const MOLAR_MASS_SF6: f64 = 146.0554;
pub const MOLAR_MASS_SO2: f64 = 64.0638;
/// Mean molar mass of moist air [g/mol]
pub const MEAN_MOLAR_MASS_WET_AIR: f64 = 28.940;

// Atmospheric physics constants

/// Dobson unit [molec/m2]
pub const DOBSON_UNIT: f64 = 2.6868e20;
/// Loschmidt constant = air number density at standard T and p [molec/m3] (CODATA 2014)
pub const STD_AIR_DENSITY: f64 = 2.6867811e25;
/// Standard pressure consistent with the Loschmidt constant [Pa]
pub const STD_PRESSURE: f64 = 1.01325e5;
/// Standard temperature consistent with the Loschmidt constant [K]
pub const STD_TEMPERATURE: f64 = 273.15;
/// Molar volume of an ideal gas at standard T and p [m3/mol] (CODATA 2014)
pub const STANDARD_GAS_VOLUME: f64 = 22.413962e-3;
/// Specific gas constant of moist air [J/(kg.K)] (= 1e3 * MOLAR_GAS / MEAN_MOLAR_MASS_WET_AIR)
pub const GAS_SPECIFIC_WET_AIR: f64 = 287.30;
/// Specific gas constant of dry air [J/(kg.K)] (= 1e3 * MOLAR_GAS / MOLAR_MASS_DRY_AIR)
pub const GAS_SPECIFIC_DRY_AIR: f64 = 287.058;
/// Altitude of the top of the atmosphere [m]
pub const TOA_ALTITUDE: f64 = 100.0e3;

// Sphere with WGS-84 radius

/// Standard gravitational acceleration g0 [m/s2]
pub const GRAV_ACCEL: f64 = 9.80665e0;
/// Mean Earth radius [m]
pub const EARTH_RADIUS_WGS84_SPHERE: f64 = 6371.0e3;
/// Gravitational acceleration at 45 degrees latitude [m/s2]
pub const GRAV_ACCEL_45LAT_WGS84_SPHERE: f64 = 9.80665e0;

// WGS-84 Earth ellipsoid

/// GM_earth, including atmosphere [m3/s2]
pub const GRAVITATIONAL_CONSTANT_WGS84_ELLIPSOID: f64 = 3986004.418e8;
/// Angular velocity omega [rad/s]
pub const ANGULAR_VELOCITY_WGS84_ELLIPSOID: f64 = 7292115.0e-11;
/// Semi-major axis a [m]
pub const SEMI_MAJOR_AXIS_WGS84_ELLIPSOID: f64 = 6378.1370e3;
/// Semi-minor axis b [m]
pub const SEMI_MINOR_AXIS_WGS84_ELLIPSOID: f64 = 6356.7523142e3;
/// Flattening f = (a-b)/a [1]
pub const FLATTENING_WGS84_ELLIPSOID: f64 = 0.003352811e0;
/// Linear eccentricity E [m]
pub const LINEAR_ECCENTRICITY_WGS84_ELLIPSOID: f64 = 521.854008974e3;
/// First eccentricity e = E/a [1]
pub const ECCENTRICITY_WGS84_ELLIPSOID: f64 = 0.081819e0;
/// Gravitational acceleration at the poles gp [m/s2]
pub const GRAV_ACCEL_POLAR_WGS84_ELLIPSOID: f64 = 9.8321849378e0;
/// Gravitational acceleration at the equator ge [m/s2]
pub const GRAV_ACCEL_EQUATOR_WGS84_ELLIPSOID: f64 = 9.7803253359e0;
/// Somigliana constant ks = (b/a)*(gp/ge) - 1 [1]
pub const SOMIGLIANA_WGS84_ELLIPSOID: f64 = 1.93853e-3;
/// Gravity ratio m = w2.a2.b / GM_earth [1]
pub const GRAV_RATIO_WGS84_ELLIPSOID: f64 = 0.003449787e0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loschmidt_consistent_with_ideal_gas_law() {
        // n0 = p0 / (k T0), the defining relation for the Loschmidt constant
        let n0 = STD_PRESSURE / (BOLTZMANN * STD_TEMPERATURE);
        assert!((n0 - STD_AIR_DENSITY).abs() < 1e20);
    }

    #[test]
    fn specific_gas_constants_consistent_with_molar_masses() {
        let r_dry = 1e3 * MOLAR_GAS / MOLAR_MASS_DRY_AIR;
        let r_wet = 1e3 * MOLAR_GAS / MEAN_MOLAR_MASS_WET_AIR;
        assert!((r_dry - GAS_SPECIFIC_DRY_AIR).abs() < 0.01);
        assert!((r_wet - GAS_SPECIFIC_WET_AIR).abs() < 0.01);
    }

    #[test]
    fn isotopologue_masses_close_to_parent() {
        assert!((MOLAR_MASS_H2O_161 - MOLAR_MASS_H2O).abs() < 0.01);
        assert!((MOLAR_MASS_O3_666 - MOLAR_MASS_O3).abs() < 0.02);
        // heavy isotopologues are heavier than the main one
        assert!(MOLAR_MASS_H2O_162 > MOLAR_MASS_H2O_161);
        assert!(MOLAR_MASS_O3_668 > MOLAR_MASS_O3_666);
    }
}
