//! Design-instant search.
//!
//! Finds the instant before birth when the Sun's apparent longitude was the
//! birth Sun longitude minus the solar arc (88° by default). Starts from the
//! mean-motion estimate and corrects it with the signed shortest-path error
//! divided by the mean solar rate. Each step needs the previous one's
//! result, so queries run strictly in sequence.
//!
//! Non-convergence is returned as an error, never as an unrefined estimate.

use bodygraph_base::{normalize_360, normalize_to_pm180};
use bodygraph_ephem::{Body, EphemerisProvider};
use bodygraph_time::UtcTime;
use tracing::{debug, trace};

use crate::design_types::{DesignConfig, DesignInstant};
use crate::error::SearchError;

fn sun_longitude<P>(provider: &P, jd_ut: f64) -> Result<f64, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    provider
        .finite_longitude(Body::Sun, jd_ut)
        .map_err(|source| SearchError::Ephemeris { jd_ut, source })
}

/// Target design longitude for a birth Sun longitude.
pub fn design_target_longitude(birth_sun_deg: f64, solar_arc_deg: f64) -> f64 {
    normalize_360(birth_sun_deg - solar_arc_deg)
}

/// Solve the design instant for a birth at `birth_jd_ut`.
pub fn solve_design_instant<P>(
    provider: &P,
    birth_jd_ut: f64,
    config: &DesignConfig,
) -> Result<DesignInstant, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !birth_jd_ut.is_finite() {
        return Err(SearchError::InvalidInput("birth JD must be finite"));
    }

    let birth_sun = sun_longitude(provider, birth_jd_ut)?;
    solve_from_birth_sun(provider, birth_jd_ut, birth_sun, config)
}

/// Same as [`solve_design_instant`] with the birth Sun longitude already known.
pub fn solve_from_birth_sun<P>(
    provider: &P,
    birth_jd_ut: f64,
    birth_sun_deg: f64,
    config: &DesignConfig,
) -> Result<DesignInstant, SearchError>
where
    P: EphemerisProvider + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !birth_jd_ut.is_finite() || !birth_sun_deg.is_finite() {
        return Err(SearchError::InvalidInput("birth JD and Sun longitude must be finite"));
    }

    let target = design_target_longitude(birth_sun_deg, config.solar_arc_deg);
    let rate = config.mean_solar_rate_deg_per_day;
    let mut jd = birth_jd_ut - config.initial_offset_days();
    let mut residual = f64::NAN;

    for iteration in 1..=config.max_iterations {
        let sun = sun_longitude(provider, jd)?;
        residual = normalize_to_pm180(sun - target);
        trace!(iteration, jd_ut = jd, sun_deg = sun, residual_deg = residual, "design step");

        if residual.abs() < config.tolerance_deg {
            let instant = DesignInstant {
                jd_ut: jd,
                utc: UtcTime::from_jd_ut(jd),
                sun_longitude_deg: sun,
                target_longitude_deg: target,
                iterations: iteration,
                residual_deg: residual,
            };
            debug!(
                birth_jd_ut,
                design_jd_ut = jd,
                days_before = birth_jd_ut - jd,
                iterations = iteration,
                provider = provider.name(),
                "design instant solved"
            );
            return Ok(instant);
        }
        jd -= residual / rate;
    }

    Err(SearchError::NoConvergence {
        iterations: config.max_iterations,
        residual_deg: residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodygraph_ephem::EphemerisError;

    /// Sun moving uniformly at exactly the mean rate.
    struct LinearSun {
        lon_at_zero: f64,
        rate: f64,
    }

    impl EphemerisProvider for LinearSun {
        fn name(&self) -> &'static str {
            "linear"
        }

        fn longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
            match body {
                Body::Sun => Ok(normalize_360(self.lon_at_zero + self.rate * jd_ut)),
                other => Err(EphemerisError::UnsupportedBody(other)),
            }
        }
    }

    #[test]
    fn nan_sun_is_an_ephemeris_error() {
        let provider = LinearSun {
            lon_at_zero: f64::NAN,
            rate: 1.0,
        };
        let r = solve_design_instant(&provider, 2_000.0, &DesignConfig::standard());
        assert_eq!(
            r,
            Err(SearchError::Ephemeris {
                jd_ut: 2_000.0,
                source: EphemerisError::NonFinite {
                    body: Body::Sun,
                    jd_ut: 2_000.0
                },
            })
        );
    }

    #[test]
    fn target_wraps() {
        assert!((design_target_longitude(10.0, 88.0) - 282.0).abs() < 1e-12);
        assert!((design_target_longitude(200.0, 88.0) - 112.0).abs() < 1e-12);
    }

    #[test]
    fn uniform_sun_converges_after_one_query() {
        let config = DesignConfig::standard();
        let provider = LinearSun {
            lon_at_zero: 5.0,
            rate: config.mean_solar_rate_deg_per_day,
        };
        let birth = 1000.0;
        let r = solve_design_instant(&provider, birth, &config).expect("solves");
        assert!(r.iterations <= 2, "took {}", r.iterations);
        assert!((birth - r.jd_ut - config.initial_offset_days()).abs() < 1e-6);
    }

    #[test]
    fn faster_sun_needs_refinement() {
        let config = DesignConfig::standard();
        let provider = LinearSun {
            lon_at_zero: 350.0,
            rate: config.mean_solar_rate_deg_per_day * 1.03,
        };
        let r = solve_design_instant(&provider, 2_000.0, &config).expect("solves");
        assert!(r.iterations > 1);
        assert!(r.residual_deg.abs() < config.tolerance_deg);
        let sep = normalize_to_pm180(r.sun_longitude_deg - r.target_longitude_deg);
        assert!(sep.abs() < config.tolerance_deg);
    }

    #[test]
    fn rejects_invalid_config_before_querying() {
        let mut config = DesignConfig::standard();
        config.max_iterations = 0;
        let provider = LinearSun {
            lon_at_zero: 0.0,
            rate: 1.0,
        };
        assert_eq!(
            solve_design_instant(&provider, 0.0, &config),
            Err(SearchError::InvalidConfig("max_iterations must be > 0"))
        );
    }

    #[test]
    fn rejects_nan_birth() {
        let provider = LinearSun {
            lon_at_zero: 0.0,
            rate: 1.0,
        };
        assert!(matches!(
            solve_design_instant(&provider, f64::NAN, &DesignConfig::standard()),
            Err(SearchError::InvalidInput(_))
        ));
    }
}
