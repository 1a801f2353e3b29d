//! Design-instant search against the analytic ephemeris.

use bodygraph_base::normalize_to_pm180;
use bodygraph_ephem::{AnalyticEphemeris, Body, EphemerisError, EphemerisProvider};
use bodygraph_search::{DesignConfig, SearchError, solve_design_instant};
use bodygraph_time::calendar_to_jd;

/// 1973-06-02 06:55 UTC.
fn birth_1973() -> f64 {
    calendar_to_jd(1973, 6, 2.0 + 6.0 / 24.0 + 55.0 / 1440.0)
}

#[test]
fn design_1973_lands_about_ninety_days_earlier() {
    let eph = AnalyticEphemeris::default();
    let config = DesignConfig::standard();
    let birth = birth_1973();
    let r = solve_design_instant(&eph, birth, &config).expect("design solves");

    let days = birth - r.jd_ut;
    assert!((85.0..95.0).contains(&days), "design {days:.3} days before birth");
    assert!(
        (r.jd_ut - 2_441_745.823).abs() < 0.01,
        "design JD {:.4}",
        r.jd_ut
    );
    assert!(r.residual_deg.abs() < config.tolerance_deg);
    assert_eq!((r.utc.year, r.utc.month, r.utc.day), (1973, 3, 4));
}

#[test]
fn design_sun_is_88_degrees_behind() {
    let eph = AnalyticEphemeris::default();
    let config = DesignConfig::standard();
    for &birth in &[2_407_422.9375, 2_440_000.1, 2_451_545.0, 2_460_310.75] {
        let r = solve_design_instant(&eph, birth, &config).expect("design solves");
        let birth_sun = eph.longitude(Body::Sun, birth).expect("sun");
        let arc = normalize_to_pm180(birth_sun - r.sun_longitude_deg);
        assert!((arc - 88.0).abs() < 1e-6, "birth {birth}: arc {arc}");
        let days = birth - r.jd_ut;
        assert!((85.0..95.0).contains(&days), "birth {birth}: {days} days");
    }
}

#[test]
fn deterministic_bit_for_bit() {
    let eph = AnalyticEphemeris::default();
    let config = DesignConfig::standard();
    let a = solve_design_instant(&eph, birth_1973(), &config).expect("a");
    let b = solve_design_instant(&eph, birth_1973(), &config).expect("b");
    assert_eq!(a.jd_ut.to_bits(), b.jd_ut.to_bits());
    assert_eq!(a, b);
}

/// The Sun never moves; the search can never close the gap.
struct StuckSun;

impl EphemerisProvider for StuckSun {
    fn name(&self) -> &'static str {
        "stuck"
    }

    fn longitude(&self, _body: Body, _jd_ut: f64) -> Result<f64, EphemerisError> {
        Ok(123.0)
    }
}

#[test]
fn stuck_sun_fails_with_no_convergence() {
    let config = DesignConfig {
        max_iterations: 12,
        ..DesignConfig::standard()
    };
    match solve_design_instant(&StuckSun, 2_451_545.0, &config) {
        Err(SearchError::NoConvergence {
            iterations,
            residual_deg,
        }) => {
            assert_eq!(iterations, 12);
            assert!((residual_deg.abs() - 88.0).abs() < 1e-9, "{residual_deg}");
        }
        other => panic!("expected NoConvergence, got {other:?}"),
    }
}

#[test]
fn provider_failure_propagates() {
    let eph = AnalyticEphemeris::default();
    let r = solve_design_instant(&eph, 2_300_000.0, &DesignConfig::standard());
    assert!(matches!(
        r,
        Err(SearchError::Ephemeris {
            source: EphemerisError::EpochOutOfRange { .. },
            ..
        })
    ));
}
