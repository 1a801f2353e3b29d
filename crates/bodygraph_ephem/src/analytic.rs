//! Built-in analytic ephemeris.
//!
//! Closed-form series for the Sun, Moon and node, mean elements for the
//! planets. No data files. Valid over the configured epoch window.

use bodygraph_time::{jd_to_centuries, jd_ut_to_tt};
use serde::{Deserialize, Serialize};

use crate::lunar_nodes::{LunarNode, NodeMode, lunar_node_deg};
use crate::{Body, EphemerisError, EphemerisProvider, moon, planets, sun};

/// JD(UT) of 1800-01-01 0h.
pub const DEFAULT_MIN_JD_UT: f64 = 2_378_496.5;
/// JD(UT) of 2150-01-01 0h.
pub const DEFAULT_MAX_JD_UT: f64 = 2_506_331.5;

/// Configuration for [`AnalyticEphemeris`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EphemerisConfig {
    /// Mean or true North Node.
    pub node_mode: NodeMode,
    /// Earliest accepted epoch, JD(UT).
    pub min_jd_ut: f64,
    /// Latest accepted epoch, JD(UT).
    pub max_jd_ut: f64,
}

impl EphemerisConfig {
    /// True node over the default window.
    pub fn true_node() -> Self {
        Self {
            node_mode: NodeMode::True,
            min_jd_ut: DEFAULT_MIN_JD_UT,
            max_jd_ut: DEFAULT_MAX_JD_UT,
        }
    }

    /// Mean node over the default window.
    pub fn mean_node() -> Self {
        Self {
            node_mode: NodeMode::Mean,
            ..Self::true_node()
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.min_jd_ut.is_finite() || !self.max_jd_ut.is_finite() {
            return Err("epoch window bounds must be finite");
        }
        if self.min_jd_ut >= self.max_jd_ut {
            return Err("min_jd_ut must be < max_jd_ut");
        }
        Ok(())
    }
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self::true_node()
    }
}

/// Analytic [`EphemerisProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalyticEphemeris {
    config: EphemerisConfig,
}

impl AnalyticEphemeris {
    pub fn new(config: EphemerisConfig) -> Result<Self, EphemerisError> {
        config.validate().map_err(EphemerisError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    fn in_window(&self, jd_ut: f64) -> bool {
        jd_ut.is_finite() && jd_ut >= self.config.min_jd_ut && jd_ut <= self.config.max_jd_ut
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn name(&self) -> &'static str {
        "analytic"
    }

    fn longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
        if !self.in_window(jd_ut) {
            return Err(EphemerisError::EpochOutOfRange { jd_ut });
        }
        let t = jd_to_centuries(jd_ut_to_tt(jd_ut));

        let lon = match body {
            Body::Sun => sun::apparent_longitude_deg(t),
            Body::Moon => moon::apparent_longitude_deg(t),
            Body::NorthNode => lunar_node_deg(LunarNode::North, t, self.config.node_mode),
            planet => planets::apparent_longitude_deg(planet, t)
                .ok_or(EphemerisError::UnsupportedBody(planet))?,
        };

        if !lon.is_finite() {
            return Err(EphemerisError::NonFinite { body, jd_ut });
        }
        Ok(lon)
    }
}
