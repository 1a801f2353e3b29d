//! Design-instant search for bodygraph charts.
//!
//! The Design side of a chart is cast for the moment the Sun was 88° of
//! arc behind its birth position, roughly three months before birth.

pub mod design;
pub mod design_types;
pub mod error;

pub use design::{design_target_longitude, solve_design_instant, solve_from_birth_sun};
pub use design_types::{DesignConfig, DesignInstant, TROPICAL_YEAR_DAYS};
pub use error::SearchError;
