//! Types for the design-instant search.

use bodygraph_time::UtcTime;
use serde::{Deserialize, Serialize};

/// Mean tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_189;

/// Configuration for [`solve_design_instant`](crate::solve_design_instant).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignConfig {
    /// Solar arc between design and birth, degrees (default 88).
    pub solar_arc_deg: f64,
    /// Mean solar motion used to turn an angular error into days.
    pub mean_solar_rate_deg_per_day: f64,
    /// Stop when |sun - target| falls under this, degrees (default 1e-7,
    /// about 0.4″).
    pub tolerance_deg: f64,
    /// Maximum ephemeris queries at refined estimates (default 50).
    pub max_iterations: u32,
}

impl DesignConfig {
    /// The conventional 88° solar arc.
    pub fn standard() -> Self {
        Self {
            solar_arc_deg: 88.0,
            mean_solar_rate_deg_per_day: 360.0 / TROPICAL_YEAR_DAYS,
            tolerance_deg: 1e-7,
            max_iterations: 50,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.solar_arc_deg.is_finite()
            || self.solar_arc_deg <= 0.0
            || self.solar_arc_deg >= 360.0
        {
            return Err("solar_arc_deg must be in (0, 360)");
        }
        if !self.mean_solar_rate_deg_per_day.is_finite() || self.mean_solar_rate_deg_per_day <= 0.0
        {
            return Err("mean_solar_rate_deg_per_day must be positive");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }

    /// Days the first estimate sits before birth.
    pub fn initial_offset_days(&self) -> f64 {
        self.solar_arc_deg / self.mean_solar_rate_deg_per_day
    }
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// A solved design instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignInstant {
    /// Julian Date (UT).
    pub jd_ut: f64,
    /// Calendar form of `jd_ut`.
    pub utc: UtcTime,
    /// Sun longitude at `jd_ut`, degrees [0, 360).
    pub sun_longitude_deg: f64,
    /// Birth Sun longitude minus the solar arc, degrees [0, 360).
    pub target_longitude_deg: f64,
    /// Ephemeris queries spent refining.
    pub iterations: u32,
    /// Signed final error, degrees.
    pub residual_deg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_defaults() {
        let c = DesignConfig::standard();
        assert!((c.solar_arc_deg - 88.0).abs() < 1e-12);
        assert_eq!(c.max_iterations, 50);
        assert!(c.validate().is_ok());
        assert_eq!(c, DesignConfig::default());
    }

    #[test]
    fn initial_offset_about_89_days() {
        let d = DesignConfig::standard().initial_offset_days();
        assert!((d - 89.28).abs() < 0.01, "offset {d}");
    }

    #[test]
    fn rejects_zero_iterations() {
        let mut c = DesignConfig::standard();
        c.max_iterations = 0;
        assert_eq!(c.validate(), Err("max_iterations must be > 0"));
    }

    #[test]
    fn rejects_bad_tolerance_and_arc() {
        let mut c = DesignConfig::standard();
        c.tolerance_deg = f64::NAN;
        assert!(c.validate().is_err());

        let mut c = DesignConfig::standard();
        c.solar_arc_deg = 360.0;
        assert!(c.validate().is_err());

        let mut c = DesignConfig::standard();
        c.mean_solar_rate_deg_per_day = -1.0;
        assert!(c.validate().is_err());
    }
}
