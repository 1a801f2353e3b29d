//! Incarnation crosses.
//!
//! A cross is named from the four gates of the Personality Sun and Earth
//! and the Design Sun and Earth. The angle comes from the Personality Sun
//! line: lines 1–2 give a Right Angle cross, 3–4 a Juxtaposition and 5–6 a
//! Left Angle cross.
//!
//! Right Angle crosses are shared by the four gates of one quarter of the
//! wheel. Left Angle crosses belong to a Sun/Earth opposite pair, so the Sun
//! gate alone picks one. Each gate has its own Juxtaposition cross.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Angle of a cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrossAngle {
    Right,
    Juxtaposition,
    Left,
}

impl CrossAngle {
    /// Angle for a Personality Sun line. `None` outside 1..=6.
    pub const fn from_line(line: u8) -> Option<Self> {
        match line {
            1 | 2 => Some(Self::Right),
            3 | 4 => Some(Self::Juxtaposition),
            5 | 6 => Some(Self::Left),
            _ => None,
        }
    }

    /// Label prefix, e.g. `"Right Angle Cross"`.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Right => "Right Angle Cross",
            Self::Juxtaposition => "Juxtaposition Cross",
            Self::Left => "Left Angle Cross",
        }
    }
}

impl Display for CrossAngle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[rustfmt::skip]
const RIGHT_ANGLE: [([u8; 4], &str); 16] = [
    ([13, 7, 1, 2], "The Sphinx"),
    ([25, 46, 10, 15], "The Vessel of Love"),
    ([49, 4, 43, 23], "Explanation"),
    ([63, 64, 5, 35], "Consciousness"),
    ([30, 29, 14, 8], "Contagion"),
    ([36, 6, 11, 12], "Eden"),
    ([24, 44, 19, 33], "The Four Ways"),
    ([3, 50, 60, 56], "Laws"),
    ([32, 42, 62, 61], "Maya"),
    ([51, 57, 54, 53], "Penetration"),
    ([37, 40, 9, 16], "Planning"),
    ([45, 26, 22, 47], "Rulership"),
    ([17, 18, 58, 52], "Service"),
    ([55, 59, 34, 20], "The Sleeping Phoenix"),
    ([39, 38, 48, 21], "Tension"),
    ([28, 27, 31, 41], "The Unexpected"),
];

#[rustfmt::skip]
const LEFT_ANGLE: [([u8; 2], &str); 32] = [
    ([1, 2], "Defiance"), ([7, 13], "Masks"), ([31, 41], "Alpha"),
    ([19, 33], "Refinement"), ([27, 28], "Alignment"), ([24, 44], "Incarnation"),
    ([4, 49], "Revolution"), ([23, 43], "Dedication"), ([29, 30], "Industry"),
    ([55, 59], "Spirit"), ([37, 40], "Migration"), ([63, 64], "Dominion"),
    ([22, 47], "Informing"), ([6, 36], "The Plane"), ([25, 46], "Healing"),
    ([17, 18], "Upheaval"), ([21, 48], "Endeavour"), ([51, 57], "The Clarion"),
    ([32, 42], "Limitation"), ([3, 50], "Wishes"), ([8, 14], "Uncertainty"),
    ([20, 34], "Duality"), ([9, 16], "Identification"), ([5, 35], "Separation"),
    ([26, 45], "Confrontation"), ([11, 12], "Education"), ([10, 15], "Prevention"),
    ([52, 58], "Demands"), ([38, 39], "Individualism"), ([53, 54], "Cycles"),
    ([61, 62], "Obscuration"), ([56, 60], "Distraction"),
];

/// Juxtaposition cross names, indexed by `gate - 1`.
const JUXTAPOSITION: [&str; 64] = [
    "Self-Expression", "The Driver", "Mutation", "Formulization",
    "Habits", "Conflict", "Interaction", "Contribution",
    "Focus", "Behavior", "Ideas", "Articulation",
    "Listening", "Empowering", "Extremes", "Experimentation",
    "Opinions", "Correction", "Need", "The Now",
    "Control", "Grace", "Assimilation", "Rationalization",
    "Innocence", "The Trickster", "Caring", "Risks",
    "Commitment", "Fates", "Influence", "Conservation",
    "Retreat", "Power", "Experience", "Crisis",
    "Bargains", "Opposition", "Provocation", "Denial",
    "Fantasy", "Completion", "Insight", "Alertness",
    "Possession", "Serendipity", "Oppression", "Depth",
    "Principles", "Values", "Shock", "Stillness",
    "Beginnings", "Ambition", "Moods", "Stimulation",
    "Intuition", "Vitality", "Strategy", "Limitation",
    "Thinking", "Detail", "Doubts", "Confusion",
];

fn cross_name(angle: CrossAngle, sun: u8) -> Option<&'static str> {
    match angle {
        CrossAngle::Right => RIGHT_ANGLE
            .iter()
            .find(|(quarter, _)| quarter.contains(&sun))
            .map(|(_, name)| *name),
        CrossAngle::Left => LEFT_ANGLE
            .iter()
            .find(|(pair, _)| pair.contains(&sun))
            .map(|(_, name)| *name),
        CrossAngle::Juxtaposition => match sun {
            1..=64 => Some(JUXTAPOSITION[usize::from(sun - 1)]),
            _ => None,
        },
    }
}

/// A resolved incarnation cross.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncarnationCross {
    pub angle: CrossAngle,
    pub name: &'static str,
    /// Personality Sun, Personality Earth, Design Sun, Design Earth.
    pub gates: [u8; 4],
    /// e.g. `"Right Angle Cross of Consciousness (35/5 | 63/64)"`.
    pub label: String,
}

/// Resolve the cross for a Personality Sun line and the four gates.
///
/// `gates` is `[personality_sun, personality_earth, design_sun,
/// design_earth]`. Returns `None` only for a line outside 1..=6 or a Sun
/// gate outside 1..=64.
pub fn incarnation_cross(personality_sun_line: u8, gates: [u8; 4]) -> Option<IncarnationCross> {
    let angle = CrossAngle::from_line(personality_sun_line)?;
    let name = cross_name(angle, gates[0])?;
    let label = format!(
        "{} of {} ({}/{} | {}/{})",
        angle.title(),
        name,
        gates[0],
        gates[1],
        gates[2],
        gates[3]
    );
    Some(IncarnationCross {
        angle,
        name,
        gates,
        label,
    })
}

impl Display for IncarnationCross {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
