//! Planetary longitudes from mean Keplerian elements.
//!
//! Elements and rates are the Standish (JPL, 1800–2050) set, referred to the
//! J2000 ecliptic and equinox. Geocentric positions use the Earth–Moon
//! barycentre for the Earth and a one-pass light-time correction; the
//! result is carried to the equinox of date by general precession.
//! Accuracy is a few arcminutes for the outer planets, which is ample for
//! a 0.9375° line.

use bodygraph_frames as frames;

use crate::Body;

/// Light travel time for one AU, in days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Mean orbital elements at J2000 with rates per Julian century.
///
/// Angles in degrees, `a` in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerElements {
    /// Semi-major axis, AU.
    pub a: [f64; 2],
    /// Eccentricity.
    pub e: [f64; 2],
    /// Inclination.
    pub i: [f64; 2],
    /// Mean longitude.
    pub l: [f64; 2],
    /// Longitude of perihelion.
    pub varpi: [f64; 2],
    /// Longitude of the ascending node.
    pub node: [f64; 2],
}

#[rustfmt::skip]
const MERCURY: KeplerElements = KeplerElements {
    a: [0.387_099_27, 0.000_000_37], e: [0.205_635_93, 0.000_019_06],
    i: [7.004_979_02, -0.005_947_49], l: [252.250_323_50, 149_472.674_111_75],
    varpi: [77.457_796_28, 0.160_476_89], node: [48.330_765_93, -0.125_340_81],
};
#[rustfmt::skip]
const VENUS: KeplerElements = KeplerElements {
    a: [0.723_335_66, 0.000_003_90], e: [0.006_776_72, -0.000_041_07],
    i: [3.394_676_05, -0.000_788_90], l: [181.979_099_50, 58_517.815_387_29],
    varpi: [131.602_467_18, 0.002_683_29], node: [76.679_842_55, -0.277_694_18],
};
#[rustfmt::skip]
const EARTH_MOON_BARYCENTER: KeplerElements = KeplerElements {
    a: [1.000_002_61, 0.000_005_62], e: [0.016_711_23, -0.000_043_92],
    i: [-0.000_015_31, -0.012_946_68], l: [100.464_571_66, 35_999.372_449_81],
    varpi: [102.937_681_93, 0.323_273_64], node: [0.0, 0.0],
};
#[rustfmt::skip]
const MARS: KeplerElements = KeplerElements {
    a: [1.523_710_34, 0.000_018_47], e: [0.093_394_10, 0.000_078_82],
    i: [1.849_691_42, -0.008_131_31], l: [-4.553_432_05, 19_140.302_684_99],
    varpi: [-23.943_629_59, 0.444_410_88], node: [49.559_538_91, -0.292_573_43],
};
#[rustfmt::skip]
const JUPITER: KeplerElements = KeplerElements {
    a: [5.202_887_00, -0.000_116_07], e: [0.048_386_24, -0.000_132_53],
    i: [1.304_396_95, -0.001_837_14], l: [34.396_440_51, 3_034.746_127_75],
    varpi: [14.728_479_83, 0.212_526_68], node: [100.473_909_09, 0.204_691_06],
};
#[rustfmt::skip]
const SATURN: KeplerElements = KeplerElements {
    a: [9.536_675_94, -0.001_250_60], e: [0.053_861_79, -0.000_509_91],
    i: [2.485_991_87, 0.001_936_09], l: [49.954_244_23, 1_222.493_622_01],
    varpi: [92.598_878_31, -0.418_972_16], node: [113.662_424_48, -0.288_677_94],
};
#[rustfmt::skip]
const URANUS: KeplerElements = KeplerElements {
    a: [19.189_164_64, -0.001_961_76], e: [0.047_257_44, -0.000_043_97],
    i: [0.772_637_83, -0.002_429_39], l: [313.238_104_51, 428.482_027_85],
    varpi: [170.954_276_30, 0.408_052_81], node: [74.016_925_03, 0.042_405_89],
};
#[rustfmt::skip]
const NEPTUNE: KeplerElements = KeplerElements {
    a: [30.069_922_76, 0.000_262_91], e: [0.008_590_48, 0.000_051_05],
    i: [1.770_043_47, 0.000_353_72], l: [-55.120_029_69, 218.459_453_25],
    varpi: [44.964_762_27, -0.322_414_64], node: [131.784_225_74, -0.005_086_64],
};
#[rustfmt::skip]
const PLUTO: KeplerElements = KeplerElements {
    a: [39.482_116_75, -0.000_315_96], e: [0.248_827_30, 0.000_051_70],
    i: [17.140_012_06, 0.000_048_18], l: [238.929_038_33, 145.207_805_15],
    varpi: [224.068_916_29, -0.040_629_42], node: [110.303_936_84, -0.011_834_82],
};

/// Elements for a planet, or `None` for the Sun, Moon and node.
pub fn elements(body: Body) -> Option<&'static KeplerElements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
        Body::Sun | Body::Moon | Body::NorthNode => None,
    }
}

/// Solve Kepler's equation `M = E - e sin E` by Newton iteration.
///
/// `m` in radians. Returns the eccentric anomaly in radians.
pub fn solve_kepler(m: f64, e: f64) -> f64 {
    let mut ecc_anomaly = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..30 {
        let delta = (m - (ecc_anomaly - e * ecc_anomaly.sin())) / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly += delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc_anomaly
}

impl KeplerElements {
    /// Heliocentric J2000 ecliptic position in AU at `t` centuries TT.
    pub fn heliocentric(&self, t: f64) -> [f64; 3] {
        let at = |el: [f64; 2]| el[0] + el[1] * t;
        let a = at(self.a);
        let e = at(self.e);
        let incl = at(self.i).to_radians();
        let l = at(self.l);
        let varpi = at(self.varpi);
        let node = at(self.node);

        let omega = (varpi - node).to_radians();
        let mean_anomaly = ((l - varpi + 540.0).rem_euclid(360.0) - 180.0).to_radians();
        let ecc_anomaly = solve_kepler(mean_anomaly, e);

        let xp = a * (ecc_anomaly.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

        let (so, co) = omega.sin_cos();
        let (sn, cn) = node.to_radians().sin_cos();
        let (si, ci) = incl.sin_cos();

        [
            (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
            (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
            (so * si) * xp + (co * si) * yp,
        ]
    }
}

/// Geometric geocentric longitude, J2000 ecliptic and equinox, degrees.
///
/// Light-time corrected: the planet is taken where it was when the light
/// now arriving left it.
pub fn geocentric_j2000_longitude_deg(body: Body, t: f64) -> Option<f64> {
    let el = elements(body)?;
    let earth = EARTH_MOON_BARYCENTER.heliocentric(t);

    let rel = |p: [f64; 3]| [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]];
    let first = rel(el.heliocentric(t));
    let distance = (first[0] * first[0] + first[1] * first[1] + first[2] * first[2]).sqrt();
    let tau_centuries = LIGHT_TIME_DAYS_PER_AU * distance / 36_525.0;

    let seen = rel(el.heliocentric(t - tau_centuries));
    Some(frames::cartesian_to_ecliptic(&seen).lon_deg)
}

/// Apparent geocentric longitude of date in degrees [0, 360).
///
/// Returns `None` for bodies without Keplerian elements.
pub fn apparent_longitude_deg(body: Body, t: f64) -> Option<f64> {
    let j2000 = geocentric_j2000_longitude_deg(body, t)?;
    let of_date = frames::precess_longitude_from_j2000(j2000, t);
    Some(frames::apparent_longitude_deg(of_date, t, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_is_identity() {
        for &m in &[0.0, 0.5, 2.0, -1.0] {
            assert!((solve_kepler(m, 0.0) - m).abs() < 1e-14);
        }
    }

    #[test]
    fn kepler_residual_small() {
        for &e in &[0.0, 0.1, 0.25, 0.5, 0.9] {
            for i in -6..=6 {
                let m = f64::from(i) * 0.5;
                let big_e = solve_kepler(m, e);
                assert!((big_e - e * big_e.sin() - m).abs() < 1e-10, "e={e} m={m}");
            }
        }
    }

    #[test]
    fn earth_is_one_au_from_sun() {
        let p = EARTH_MOON_BARYCENTER.heliocentric(0.0);
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 1.0).abs() < 0.02, "r = {r}");
    }

    #[test]
    fn luminaries_and_node_have_no_elements() {
        assert!(elements(Body::Sun).is_none());
        assert!(elements(Body::Moon).is_none());
        assert!(elements(Body::NorthNode).is_none());
        assert!(apparent_longitude_deg(Body::Moon, 0.0).is_none());
    }

    #[test]
    fn jupiter_at_j2000() {
        // 2000-01-01: Jupiter near 25.3° apparent.
        let lon = apparent_longitude_deg(Body::Jupiter, 0.0).unwrap_or(f64::NAN);
        assert!((lon - 25.32).abs() < 0.3, "λ = {lon}");
    }
}
