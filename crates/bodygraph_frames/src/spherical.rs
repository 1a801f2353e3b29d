//! Cartesian → ecliptic spherical conversion.

/// Ecliptic spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoords {
    /// Longitude in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance in the input's length unit (AU for the analytic ephemeris).
    pub distance: f64,
}

/// Convert an ecliptic Cartesian vector to spherical coordinates.
///
/// The zero vector maps to all-zero coordinates.
pub fn cartesian_to_ecliptic(xyz: &[f64; 3]) -> EclipticCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return EclipticCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }
    EclipticCoords {
        lon_deg: crate::wrap_degrees(y.atan2(x).to_degrees()),
        lat_deg: (z / r).asin().to_degrees(),
        distance: r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_axes() {
        let c = cartesian_to_ecliptic(&[0.0, 2.0, 0.0]);
        assert!((c.lon_deg - 90.0).abs() < 1e-12);
        assert!(c.lat_deg.abs() < 1e-12);
        assert!((c.distance - 2.0).abs() < 1e-12);

        let c = cartesian_to_ecliptic(&[0.0, -1.0, 0.0]);
        assert!((c.lon_deg - 270.0).abs() < 1e-12);
    }

    #[test]
    fn north_pole() {
        let c = cartesian_to_ecliptic(&[0.0, 0.0, 1.0]);
        assert!((c.lat_deg - 90.0).abs() < 1e-12);
    }

    #[test]
    fn zero_vector() {
        let c = cartesian_to_ecliptic(&[0.0, 0.0, 0.0]);
        assert_eq!(c.distance, 0.0);
    }
}
