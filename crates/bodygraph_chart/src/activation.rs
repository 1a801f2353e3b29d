//! Activations: the 13 chart bodies mapped at one instant.
//!
//! Earth and the South Node are never queried. They are the Sun and the
//! North Node plus 180°.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use bodygraph_base::{SymbolicUnit, map_longitude, normalize_360};
use bodygraph_ephem::{ALL_BODIES, Body, EphemerisProvider};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// A body as it appears in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChartBody {
    Sun,
    Earth,
    Moon,
    NorthNode,
    SouthNode,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All chart bodies in display order.
pub const ALL_CHART_BODIES: [ChartBody; 13] = [
    ChartBody::Sun,
    ChartBody::Earth,
    ChartBody::Moon,
    ChartBody::NorthNode,
    ChartBody::SouthNode,
    ChartBody::Mercury,
    ChartBody::Venus,
    ChartBody::Mars,
    ChartBody::Jupiter,
    ChartBody::Saturn,
    ChartBody::Uranus,
    ChartBody::Neptune,
    ChartBody::Pluto,
];

impl ChartBody {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based index in display order.
    pub const fn index(self) -> usize {
        match self {
            Self::Sun => 0,
            Self::Earth => 1,
            Self::Moon => 2,
            Self::NorthNode => 3,
            Self::SouthNode => 4,
            Self::Mercury => 5,
            Self::Venus => 6,
            Self::Mars => 7,
            Self::Jupiter => 8,
            Self::Saturn => 9,
            Self::Uranus => 10,
            Self::Neptune => 11,
            Self::Pluto => 12,
        }
    }

    /// The queried body and the offset added to its longitude.
    pub const fn source(self) -> (Body, f64) {
        match self {
            Self::Sun => (Body::Sun, 0.0),
            Self::Earth => (Body::Sun, 180.0),
            Self::Moon => (Body::Moon, 0.0),
            Self::NorthNode => (Body::NorthNode, 0.0),
            Self::SouthNode => (Body::NorthNode, 180.0),
            Self::Mercury => (Body::Mercury, 0.0),
            Self::Venus => (Body::Venus, 0.0),
            Self::Mars => (Body::Mars, 0.0),
            Self::Jupiter => (Body::Jupiter, 0.0),
            Self::Saturn => (Body::Saturn, 0.0),
            Self::Uranus => (Body::Uranus, 0.0),
            Self::Neptune => (Body::Neptune, 0.0),
            Self::Pluto => (Body::Pluto, 0.0),
        }
    }

    pub const fn all() -> &'static [ChartBody; 13] {
        &ALL_CHART_BODIES
    }
}

impl Display for ChartBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which instant an activation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Origin {
    /// Birth instant (conscious).
    Personality,
    /// Design instant (unconscious).
    Design,
}

impl Origin {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Personality => "Personality",
            Self::Design => "Design",
        }
    }
}

/// One body mapped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Activation {
    pub body: ChartBody,
    pub origin: Origin,
    /// Longitude the unit was mapped from, degrees [0, 360).
    pub longitude_deg: f64,
    pub unit: SymbolicUnit,
}

impl Activation {
    pub fn gate(&self) -> u8 {
        self.unit.gate
    }
}

/// Query every ephemeris body once at `jd_ut`, in [`ALL_BODIES`] order.
fn query_bodies<P>(provider: &P, jd_ut: f64) -> Result<[f64; 11], ChartError>
where
    P: EphemerisProvider + ?Sized,
{
    let mut out = [0.0; 11];
    for (slot, &body) in out.iter_mut().zip(ALL_BODIES.iter()) {
        let lon = provider
            .finite_longitude(body, jd_ut)
            .map_err(|source| ChartError::EphemerisUnavailable {
                body,
                jd_ut,
                source,
            })?;
        *slot = lon;
    }
    Ok(out)
}

/// Map all 13 chart bodies at `jd_ut`.
///
/// Fails on the first body the provider cannot supply; a partial list is
/// never returned.
pub fn build_activations<P>(
    provider: &P,
    jd_ut: f64,
    origin: Origin,
) -> Result<[Activation; 13], ChartError>
where
    P: EphemerisProvider + ?Sized,
{
    let raw = query_bodies(provider, jd_ut)?;
    Ok(ALL_CHART_BODIES.map(|body| {
        let (source, offset) = body.source();
        let longitude_deg = normalize_360(raw[source.index()] + offset);
        Activation {
            body,
            origin,
            longitude_deg,
            unit: map_longitude(longitude_deg),
        }
    }))
}

/// Personality and Design activations of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivationSet {
    personality: [Activation; 13],
    design: [Activation; 13],
}

impl ActivationSet {
    pub fn new(personality: [Activation; 13], design: [Activation; 13]) -> Self {
        Self {
            personality,
            design,
        }
    }

    pub fn personality(&self) -> &[Activation; 13] {
        &self.personality
    }

    pub fn design(&self) -> &[Activation; 13] {
        &self.design
    }

    /// Activation of `body` on `origin`'s side.
    pub fn get(&self, origin: Origin, body: ChartBody) -> &Activation {
        let side = match origin {
            Origin::Personality => &self.personality,
            Origin::Design => &self.design,
        };
        &side[body.index()]
    }

    /// All 26 activations, Personality first.
    pub fn iter(&self) -> impl Iterator<Item = &Activation> {
        self.personality.iter().chain(self.design.iter())
    }

    /// Deduplicated set of activated gates.
    pub fn all_gates(&self) -> BTreeSet<u8> {
        self.iter().map(Activation::gate).collect()
    }
}
