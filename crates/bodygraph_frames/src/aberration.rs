//! Annual aberration in ecliptic longitude.

/// Constant of aberration κ in arcseconds.
pub const ABERRATION_CONSTANT_ARCSEC: f64 = 20.495_52;

/// Aberration correction for the Sun in degrees, scaled by its distance.
///
/// Planets use `sun_distance_au = 1.0`; their own aberration term is folded
/// into the light-time correction applied by the ephemeris.
pub fn annual_aberration_deg(sun_distance_au: f64) -> f64 {
    let r = if sun_distance_au > 0.0 { sun_distance_au } else { 1.0 };
    -(ABERRATION_CONSTANT_ARCSEC - 0.005_72) / r / 3600.0
}
