//! Low-order nutation in longitude and mean obliquity.
//!
//! Four-term series of Meeus, *Astronomical Algorithms* (2nd ed.), ch. 22,
//! accurate to about 0.5″. Gate lines are 0.9375° wide, so the residual is
//! irrelevant to the mapping.

/// Mean longitude of the Moon's ascending node, degrees.
fn node_longitude_deg(t: f64) -> f64 {
    125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0
}

/// Nutation in longitude Δψ in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_in_longitude_deg(t: f64) -> f64 {
    let omega = node_longitude_deg(t).to_radians();
    let sun_mean = (280.4665 + 36_000.7698 * t).to_radians();
    let moon_mean = (218.3165 + 481_267.8813 * t).to_radians();

    let arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * sun_mean).sin()
        - 0.23 * (2.0 * moon_mean).sin()
        + 0.21 * (2.0 * omega).sin();
    arcsec / 3600.0
}

/// Mean obliquity of the ecliptic ε₀ in degrees (IAU 1980 polynomial).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001_813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}
