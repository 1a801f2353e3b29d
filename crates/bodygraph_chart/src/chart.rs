//! The chart pipeline.
//!
//! birth instant → Personality activations → design instant → Design
//! activations → structure → classification. Input is validated before the
//! provider is touched; any provider failure fails the whole chart.

use std::collections::BTreeSet;

use bodygraph_ephem::{AnalyticEphemeris, EphemerisProvider};
use bodygraph_search::{DesignConfig, DesignInstant, solve_from_birth_sun};
use bodygraph_time::{TimeError, UtcTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::activation::{ActivationSet, ChartBody, Origin, build_activations};
use crate::classify::classify;
use crate::classify_types::Classification;
use crate::error::ChartError;
use crate::structure::{CenterStatus, ChannelStatus, aggregate};

/// Observer location. Echoed in the result; charts are geocentric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Degrees, north positive, [-90, 90].
    pub latitude_deg: f64,
    /// Degrees, east positive, [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err("latitude must be in [-90, 90]");
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err("longitude must be in [-180, 180]");
        }
        Ok(())
    }
}

/// What the caller supplies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    /// Birth instant, already in UTC.
    pub birth: UtcTime,
    pub location: GeoLocation,
}

impl ChartInput {
    pub fn new(birth: UtcTime, location: GeoLocation) -> Self {
        Self { birth, location }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        self.birth.validate().map_err(|e| match e {
            TimeError::InvalidCalendar(msg) => msg,
            _ => "birth time is not a valid calendar instant",
        })?;
        self.location.validate()
    }
}

/// Chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    pub design: DesignConfig,
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        self.design.validate()
    }
}

/// A computed chart. Owned by the caller; the engine keeps nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub birth: UtcTime,
    pub birth_jd_ut: f64,
    pub location: GeoLocation,
    pub design: DesignInstant,
    /// Name of the provider that produced the longitudes.
    pub provider: &'static str,
    pub activations: ActivationSet,
    pub activated_gates: BTreeSet<u8>,
    pub centers: Vec<CenterStatus>,
    pub channels: Vec<ChannelStatus>,
    pub hanging_gates: Vec<u8>,
    pub classification: Classification,
}

impl ChartResult {
    /// Complete channels only.
    pub fn complete_channels(&self) -> impl Iterator<Item = &ChannelStatus> {
        self.channels.iter().filter(|c| c.complete)
    }
}

/// Compute a full chart with `provider`.
pub fn compute_chart<P>(
    provider: &P,
    input: &ChartInput,
    config: &ChartConfig,
) -> Result<ChartResult, ChartError>
where
    P: EphemerisProvider + ?Sized,
{
    config.validate().map_err(ChartError::InvalidConfig)?;
    input.validate().map_err(ChartError::InvalidInput)?;

    let birth_jd_ut = input.birth.to_jd_ut();
    debug!(birth = %input.birth, birth_jd_ut, provider = provider.name(), "chart start");

    let personality = build_activations(provider, birth_jd_ut, Origin::Personality)?;
    let birth_sun = personality[ChartBody::Sun.index()].longitude_deg;

    let design = solve_from_birth_sun(provider, birth_jd_ut, birth_sun, &config.design)?;
    debug!(design = %design.utc, design_jd_ut = design.jd_ut, "design instant");

    let design_acts = build_activations(provider, design.jd_ut, Origin::Design)?;
    let activations = ActivationSet::new(personality, design_acts);

    let activated_gates = activations.all_gates();
    let structure = aggregate(&activated_gates);
    let classification = classify(&structure, &activations);
    debug!(
        gates = activated_gates.len(),
        hd_type = classification.hd_type.name(),
        profile = %classification.profile,
        "chart classified"
    );

    Ok(ChartResult {
        birth: input.birth,
        birth_jd_ut,
        location: input.location,
        design,
        provider: provider.name(),
        centers: structure.center_statuses(),
        channels: structure.channel_statuses(),
        hanging_gates: structure.hanging_gates(),
        activations,
        activated_gates,
        classification,
    })
}

/// [`compute_chart`] with the built-in analytic ephemeris and defaults.
pub fn compute_chart_analytic(input: &ChartInput) -> Result<ChartResult, ChartError> {
    compute_chart(&AnalyticEphemeris::default(), input, &ChartConfig::default())
}
