//! Error type for chart computation.

use bodygraph_ephem::{Body, EphemerisError};
use bodygraph_search::SearchError;
use thiserror::Error;

/// Why a chart could not be computed. Partial charts are never returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed birth instant or location. Raised before any ephemeris query.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Rejected configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// The provider failed or could not supply a required body.
    #[error("ephemeris unavailable for {body} at JD(UT) {jd_ut}: {source}")]
    EphemerisUnavailable {
        body: Body,
        jd_ut: f64,
        source: EphemerisError,
    },
    /// The design-instant search hit its iteration cap.
    #[error("design instant did not converge after {iterations} iterations (residual {residual_deg:e}°)")]
    NoConvergence { iterations: u32, residual_deg: f64 },
    /// Any other design-search failure.
    #[error("design search failed: {0}")]
    Search(SearchError),
}

impl From<SearchError> for ChartError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Ephemeris { jd_ut, source } => Self::EphemerisUnavailable {
                body: Body::Sun,
                jd_ut,
                source,
            },
            SearchError::InvalidConfig(msg) => Self::InvalidConfig(msg),
            SearchError::InvalidInput(msg) => Self::InvalidInput(msg),
            SearchError::NoConvergence {
                iterations,
                residual_deg,
            } => Self::NoConvergence {
                iterations,
                residual_deg,
            },
            other => Self::Search(other),
        }
    }
}
