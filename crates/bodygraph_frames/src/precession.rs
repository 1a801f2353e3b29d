//! General precession in ecliptic longitude (IAU 2006).
//!
//! Planet positions come out of the Keplerian model referred to the
//! J2000 equinox. Adding p_A carries the longitude to the equinox of date.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, Table 1.

/// Accumulated precession p_A in degrees since J2000.0.
///
/// `t` = Julian centuries of TT since J2000.0. About 1.397°/century.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let arcsec =
        5028.796_195 * t + 1.105_434_8 * t2 + 0.000_079_64 * t3 - 0.000_023_857 * t4;
    arcsec / 3600.0
}

/// Carry a J2000 ecliptic longitude to the mean equinox of date.
pub fn precess_longitude_from_j2000(lon_j2000_deg: f64, t: f64) -> f64 {
    crate::wrap_degrees(lon_j2000_deg + general_precession_longitude_deg(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_deg(0.0), 0.0);
    }

    #[test]
    fn about_fifty_arcsec_per_year() {
        let p = general_precession_longitude_deg(0.01) * 3600.0;
        assert!((p - 50.29).abs() < 0.1, "p_A = {p}″");
    }

    #[test]
    fn eighteen_seventy_nine_is_behind_j2000() {
        let t = (2_407_422.94 - 2_451_545.0) / 36_525.0;
        let p = general_precession_longitude_deg(t);
        assert!((p - (-1.688)).abs() < 0.01, "p_A = {p}°");
    }

    #[test]
    fn precess_wraps() {
        let lon = precess_longitude_from_j2000(359.9, 1.0);
        assert!((lon - (359.9 + 1.3972 - 360.0)).abs() < 1e-3, "lon = {lon}");
    }
}
