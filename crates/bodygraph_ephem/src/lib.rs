//! Ephemeris seam for chart computation.
//!
//! The chart engine never does orbital mechanics itself. It asks an
//! [`EphemerisProvider`] for the apparent geocentric ecliptic longitude of a
//! [`Body`] at a UT Julian Date. Any correct ephemeris can be plugged in;
//! [`AnalyticEphemeris`] is the built-in one, needing no data files.

pub mod analytic;
pub mod lunar_nodes;
pub mod moon;
pub mod planets;
pub mod sun;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use analytic::{AnalyticEphemeris, EphemerisConfig};
pub use lunar_nodes::{LunarNode, NodeMode, lunar_node_deg, mean_node_deg, true_node_deg};

/// Bodies an ephemeris provider must answer for.
///
/// `NorthNode` is a computed point, not a physical body; Earth and the
/// South Node are derived by the caller (+180°) and never queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
}

/// Every queryable body, in query order.
pub const ALL_BODIES: [Body; 11] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::NorthNode,
];

impl Body {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
        }
    }

    /// 0-based index in [`ALL_BODIES`] order.
    pub const fn index(self) -> usize {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
            Self::NorthNode => 10,
        }
    }

    /// All queryable bodies.
    pub const fn all() -> &'static [Body; 11] {
        &ALL_BODIES
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ephemeris errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("epoch out of range: JD(UT) {jd_ut}")]
    EpochOutOfRange { jd_ut: f64 },
    #[error("body not supported by this provider: {0}")]
    UnsupportedBody(Body),
    #[error("non-finite longitude for {body} at JD(UT) {jd_ut}")]
    NonFinite { body: Body, jd_ut: f64 },
    #[error("provider failure: {0}")]
    Provider(String),
}

/// Source of apparent geocentric ecliptic longitudes.
///
/// Implementations must be deterministic: the same `(body, jd_ut)` always
/// yields the same value. Longitudes are degrees of date in [0, 360).
pub trait EphemerisProvider: Send + Sync {
    /// Short identifier, for logs.
    fn name(&self) -> &'static str;

    /// Apparent ecliptic longitude of `body` at `jd_ut` (Julian Date, UT).
    fn longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError>;

    /// [`longitude`](Self::longitude), with a non-finite `Ok` value turned
    /// into [`EphemerisError::NonFinite`].
    fn finite_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
        let lon = self.longitude(body, jd_ut)?;
        if lon.is_finite() {
            Ok(lon)
        } else {
            Err(EphemerisError::NonFinite { body, jd_ut })
        }
    }
}
