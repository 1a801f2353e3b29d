//! Classification outputs.

use std::fmt::{Display, Formatter};

use bodygraph_base::{IncarnationCross, Profile};
use serde::{Deserialize, Serialize};

/// Energy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HdType {
    Generator,
    ManifestingGenerator,
    Manifestor,
    Projector,
    Reflector,
}

impl HdType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generator => "Generator",
            Self::ManifestingGenerator => "Manifesting Generator",
            Self::Manifestor => "Manifestor",
            Self::Projector => "Projector",
            Self::Reflector => "Reflector",
        }
    }

    /// Strategy belonging to this type.
    pub const fn strategy(self) -> Strategy {
        match self {
            Self::Generator | Self::ManifestingGenerator => Strategy::WaitToRespond,
            Self::Manifestor => Strategy::Inform,
            Self::Projector => Strategy::WaitForInvitation,
            Self::Reflector => Strategy::WaitLunarCycle,
        }
    }
}

impl Display for HdType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Strategy, fixed by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    WaitToRespond,
    Inform,
    WaitForInvitation,
    WaitLunarCycle,
}

impl Strategy {
    pub const fn description(self) -> &'static str {
        match self {
            Self::WaitToRespond => "Wait to respond",
            Self::Inform => "Inform before acting",
            Self::WaitForInvitation => "Wait for the invitation",
            Self::WaitLunarCycle => "Wait a full lunar cycle",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Inner authority, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    /// Heart connected to the Throat.
    Ego,
    /// G connected to the Throat.
    SelfProjected,
    /// Heart defined, not connected to the Throat.
    EgoProjected,
    /// Projector with no inner authority center ("Environmental").
    Mental,
    Lunar,
}

impl Authority {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emotional => "Emotional",
            Self::Sacral => "Sacral",
            Self::Splenic => "Splenic",
            Self::Ego => "Ego",
            Self::SelfProjected => "Self-Projected",
            Self::EgoProjected => "Ego Projected",
            Self::Mental => "Mental",
            Self::Lunar => "Lunar",
        }
    }
}

impl Display for Authority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of separate groups of defined centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Definition {
    None,
    Single,
    Split,
    TripleSplit,
    QuadrupleSplit,
}

impl Definition {
    /// From a component count. Nine centers allow at most four groups.
    pub const fn from_components(count: usize) -> Self {
        match count {
            0 => Self::None,
            1 => Self::Single,
            2 => Self::Split,
            3 => Self::TripleSplit,
            _ => Self::QuadrupleSplit,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Single => "Single",
            Self::Split => "Split",
            Self::TripleSplit => "Triple Split",
            Self::QuadrupleSplit => "Quadruple Split",
        }
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Arrow direction of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Left,
    Right,
}

impl Orientation {
    /// Tones 1–3 point left, 4–6 right.
    pub const fn from_tone(tone: u8) -> Self {
        if tone <= 3 { Self::Left } else { Self::Right }
    }
}

/// The four variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variables {
    /// Design Sun tone.
    pub digestion: Orientation,
    /// Design North Node tone.
    pub environment: Orientation,
    /// Personality Sun tone.
    pub motivation: Orientation,
    /// Personality North Node tone.
    pub perspective: Orientation,
}

/// Everything the classifier derives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub hd_type: HdType,
    pub strategy: Strategy,
    pub authority: Authority,
    pub profile: Profile,
    pub definition: Definition,
    /// `None` only if the Personality Sun unit is out of range, which the
    /// mapper never produces.
    pub incarnation_cross: Option<IncarnationCross>,
    pub variables: Variables,
}
