//! Frame and reduction helpers for ecliptic longitudes.
//!
//! Provides the corrections that turn a geometric J2000 ecliptic position
//! into the apparent longitude of date: general precession, nutation in
//! longitude and annual aberration, plus Cartesian → spherical conversion.

pub mod aberration;
pub mod nutation;
pub mod precession;
pub mod spherical;

pub use aberration::{ABERRATION_CONSTANT_ARCSEC, annual_aberration_deg};
pub use nutation::{mean_obliquity_deg, nutation_in_longitude_deg};
pub use precession::{general_precession_longitude_deg, precess_longitude_from_j2000};
pub use spherical::{EclipticCoords, cartesian_to_ecliptic};

/// Wrap an angle into [0, 360) degrees.
pub fn wrap_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // A tiny negative input rounds up to exactly 360.0.
    if r >= 360.0 { 0.0 } else { r }
}

/// Apparent longitude of date from a geometric longitude of date.
///
/// `sun_distance_au` scales the aberration term; pass 1.0 for planets.
pub fn apparent_longitude_deg(geometric_lon_deg: f64, t: f64, sun_distance_au: f64) -> f64 {
    let lon = geometric_lon_deg
        + nutation_in_longitude_deg(t)
        + annual_aberration_deg(sun_distance_au);
    wrap_degrees(lon)
}
