//! Reference data and pure mapping for bodygraph charts.
//!
//! This crate provides:
//! - The mandala mapper: ecliptic longitude → gate.line.color.tone.base
//! - The 64 gates, 9 centers and 36 channels as static tables
//! - Profile and incarnation-cross lookups
//!
//! Everything here is `const` data or a pure function. Nothing allocates
//! except the display helpers.

pub mod center;
pub mod channel;
pub mod cross;
pub mod gate;
pub mod mandala;
pub mod profile;
pub mod util;

pub use center::{ALL_CENTERS, Center, MOTOR_CENTERS};
pub use channel::{CHANNELS, Channel, channels_of_gate};
pub use cross::{CrossAngle, IncarnationCross, incarnation_cross};
pub use gate::{GATE_COUNT, center_of_gate, gate_name, gates_of};
pub use mandala::{
    BASE_SPAN_DEG, COLOR_SPAN_DEG, GATE_SEQUENCE, GATE_SPAN_DEG, LINE_SPAN_DEG,
    MANDALA_OFFSET_DEG, SymbolicUnit, TONE_SPAN_DEG, gate_start_longitude, map_longitude,
    opposite_gate,
};
pub use profile::{Profile, line_name};
pub use util::{normalize_360, normalize_to_pm180};
