//! Lunar longitude.
//!
//! Truncated ELP-2000/82 series as tabulated in Meeus, *Astronomical
//! Algorithms* (2nd ed.), ch. 47: the 59 periodic terms of Table 47.A
//! together with the additive corrections for Venus, Jupiter and the
//! Earth's flattening. Accuracy is about 10″, well inside a line.

use bodygraph_frames as frames;

/// Periodic terms in longitude: `[D, M, M', F, Σl coefficient (1e-6 deg)]`.
#[rustfmt::skip]
static LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 59] = [
    (0, 0, 1, 0, 6_288_774), (2, 0, -1, 0, 1_274_027), (2, 0, 0, 0, 658_314),
    (0, 0, 2, 0, 213_618), (0, 1, 0, 0, -185_116), (0, 0, 0, 2, -114_332),
    (2, 0, -2, 0, 58_793), (2, -1, -1, 0, 57_066), (2, 0, 1, 0, 53_322),
    (2, -1, 0, 0, 45_758), (0, 1, -1, 0, -40_923), (1, 0, 0, 0, -34_720),
    (0, 1, 1, 0, -30_383), (2, 0, 0, -2, 15_327), (0, 0, 1, 2, -12_528),
    (0, 0, 1, -2, 10_980), (4, 0, -1, 0, 10_675), (0, 0, 3, 0, 10_034),
    (4, 0, -2, 0, 8_548), (2, 1, -1, 0, -7_888), (2, 1, 0, 0, -6_766),
    (1, 0, -1, 0, -5_163), (1, 1, 0, 0, 4_987), (2, -1, 1, 0, 4_036),
    (2, 0, 2, 0, 3_994), (4, 0, 0, 0, 3_861), (2, 0, -3, 0, 3_665),
    (0, 1, -2, 0, -2_689), (2, 0, -1, 2, -2_602), (2, -1, -2, 0, 2_390),
    (1, 0, 1, 0, -2_348), (2, -2, 0, 0, 2_236), (0, 1, 2, 0, -2_120),
    (0, 2, 0, 0, -2_069), (2, -2, -1, 0, 2_048), (2, 0, 1, -2, -1_773),
    (2, 0, 0, 2, -1_595), (4, -1, -1, 0, 1_215), (0, 0, 2, 2, -1_110),
    (3, 0, -1, 0, -892), (2, 1, 1, 0, -810), (4, -1, -2, 0, 759),
    (0, 2, -1, 0, -713), (2, 2, -1, 0, -700), (2, 1, -2, 0, 691),
    (2, -1, 0, -2, 596), (4, 0, 1, 0, 549), (0, 0, 4, 0, 537),
    (4, -1, 0, 0, 520), (1, 0, -2, 0, -487), (2, 1, 0, -2, -399),
    (0, 0, 2, -2, -381), (1, 1, 1, 0, 351), (3, 0, -2, 0, -340),
    (4, 0, -3, 0, 330), (2, -1, 2, 0, 327), (0, 2, 1, 0, -323),
    (1, 1, -1, 0, 299), (2, 0, 3, 0, 294),
];

/// Lunar fundamental arguments in degrees (not reduced).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Mean longitude L'.
    pub mean_longitude: f64,
    /// Mean elongation D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M'.
    pub moon_anomaly: f64,
    /// Argument of latitude F.
    pub latitude_argument: f64,
}

impl LunarArguments {
    /// Arguments at `t` Julian centuries of TT since J2000.0.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
                + t3 / 538_841.0
                - t4 / 65_194_000.0,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2
                + t3 / 545_868.0
                - t4 / 113_065_000.0,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
                + t3 / 24_490_000.0,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
                + t3 / 69_699.0
                - t4 / 14_712_000.0,
            latitude_argument: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
                - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        }
    }
}

/// Geometric lunar longitude, mean equinox of date, degrees [0, 360).
pub fn geometric_longitude_deg(t: f64) -> f64 {
    let args = LunarArguments::at(t);
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_argument.to_radians();

    // Terms in M are scaled by E for the decreasing eccentricity of the
    // Earth's orbit; E² for |M| = 2.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sigma = 0.0_f64;
    for &(cd, cm, cmp, cf, coeff) in &LONGITUDE_TERMS {
        let arg = f64::from(cd) * d + f64::from(cm) * m + f64::from(cmp) * mp + f64::from(cf) * f;
        let scale = match cm.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sigma += f64::from(coeff) * scale * arg.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let lp = args.mean_longitude.to_radians();
    sigma += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();

    frames::wrap_degrees(args.mean_longitude + sigma / 1_000_000.0)
}

/// Apparent lunar longitude of date in degrees [0, 360).
///
/// Only nutation is applied. The Moon's own aberration is folded into the
/// series' mean longitude.
pub fn apparent_longitude_deg(t: f64) -> f64 {
    frames::wrap_degrees(geometric_longitude_deg(t) + frames::nutation_in_longitude_deg(t))
}
