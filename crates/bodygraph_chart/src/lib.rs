//! Bodygraph chart computation.
//!
//! This crate provides:
//! - The activation builder (13 bodies at the birth and design instants)
//! - The structure aggregator (complete channels, defined centers)
//! - The classifier (type, strategy, authority, profile, definition, cross)
//! - [`compute_chart`], the whole pipeline behind one call
//!
//! The engine holds no state between calls. Independent charts can be
//! computed concurrently with a shared provider.

pub mod activation;
pub mod chart;
pub mod classify;
pub mod classify_types;
pub mod error;
pub mod structure;

pub use activation::{
    ALL_CHART_BODIES, Activation, ActivationSet, ChartBody, Origin, build_activations,
};
pub use chart::{
    ChartConfig, ChartInput, ChartResult, GeoLocation, compute_chart, compute_chart_analytic,
};
pub use classify::{
    classify, classify_authority, classify_definition, classify_profile, classify_type,
    classify_variables,
};
pub use classify_types::{
    Authority, Classification, Definition, HdType, Orientation, Strategy, Variables,
};
pub use error::ChartError;
pub use structure::{CenterState, CenterStatus, ChannelStatus, Structure, aggregate};
