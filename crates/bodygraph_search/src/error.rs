//! Error type for searches.

use bodygraph_ephem::EphemerisError;
use thiserror::Error;

/// Errors from the design-instant search.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The ephemeris provider failed for the Sun at `jd_ut`.
    #[error("ephemeris error at JD(UT) {jd_ut}: {source}")]
    Ephemeris { jd_ut: f64, source: EphemerisError },
    /// Rejected configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Rejected input instant.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Iteration cap reached before the residual fell under tolerance.
    #[error("no convergence after {iterations} iterations (residual {residual_deg:e}°)")]
    NoConvergence { iterations: u32, residual_deg: f64 },
}
