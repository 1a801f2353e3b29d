//! The 36 channels.
//!
//! A channel joins two gates in two different centers. It is complete when
//! both gates are activated.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::center::Center;
use crate::gate::center_of_valid_gate;

/// A channel: an unordered gate pair, stored with `gate_a < gate_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Channel {
    pub gate_a: u8,
    pub gate_b: u8,
    pub name: &'static str,
}

const fn ch(gate_a: u8, gate_b: u8, name: &'static str) -> Channel {
    Channel {
        gate_a,
        gate_b,
        name,
    }
}

/// All 36 channels, ordered by lower gate.
pub const CHANNELS: [Channel; 36] = [
    ch(1, 8, "Inspiration"),
    ch(2, 14, "The Beat"),
    ch(3, 60, "Mutation"),
    ch(4, 63, "Logic"),
    ch(5, 15, "Rhythm"),
    ch(6, 59, "Mating"),
    ch(7, 31, "The Alpha"),
    ch(9, 52, "Concentration"),
    ch(10, 20, "Awakening"),
    ch(10, 34, "Exploration"),
    ch(10, 57, "Perfected Form"),
    ch(11, 56, "Curiosity"),
    ch(12, 22, "Openness"),
    ch(13, 33, "The Prodigal"),
    ch(16, 48, "The Wavelength"),
    ch(17, 62, "Acceptance"),
    ch(18, 58, "Judgment"),
    ch(19, 49, "Synthesis"),
    ch(20, 34, "Charisma"),
    ch(20, 57, "The Brainwave"),
    ch(21, 45, "Money"),
    ch(23, 43, "Structuring"),
    ch(24, 61, "Awareness"),
    ch(25, 51, "Initiation"),
    ch(26, 44, "Surrender"),
    ch(27, 50, "Preservation"),
    ch(28, 38, "Struggle"),
    ch(29, 46, "Discovery"),
    ch(30, 41, "Recognition"),
    ch(32, 54, "Transformation"),
    ch(34, 57, "Power"),
    ch(35, 36, "Transitoriness"),
    ch(37, 40, "Community"),
    ch(39, 55, "Emoting"),
    ch(42, 53, "Maturation"),
    ch(47, 64, "Abstraction"),
];

impl Channel {
    /// Stable key, `"{gate_a}-{gate_b}"`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.gate_a, self.gate_b)
    }

    /// The two centers this channel joins, in gate order.
    pub const fn centers(&self) -> (Center, Center) {
        (
            center_of_valid_gate(self.gate_a),
            center_of_valid_gate(self.gate_b),
        )
    }

    /// Whether the channel touches `center`.
    pub fn touches(&self, center: Center) -> bool {
        let (a, b) = self.centers();
        a == center || b == center
    }

    /// Whether `gate` is one end of this channel.
    pub const fn has_gate(&self, gate: u8) -> bool {
        self.gate_a == gate || self.gate_b == gate
    }

    /// Whether both gates are in `activated`.
    pub fn is_complete(&self, activated: impl Fn(u8) -> bool) -> bool {
        activated(self.gate_a) && activated(self.gate_b)
    }

    pub const fn all() -> &'static [Channel; 36] {
        &CHANNELS
    }
}

/// Channels with `gate` at one end.
pub fn channels_of_gate(gate: u8) -> impl Iterator<Item = &'static Channel> {
    CHANNELS.iter().filter(move |c| c.has_gate(gate))
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} {}", self.gate_a, self.gate_b, self.name)
    }
}

/// Channels serialize as their key.
impl Serialize for Channel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}
