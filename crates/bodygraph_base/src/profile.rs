//! Profiles: Personality Sun line over Design Sun line.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

const LINE_NAMES: [&str; 6] = [
    "Investigator",
    "Hermit",
    "Martyr",
    "Opportunist",
    "Heretic",
    "Role Model",
];

/// Name of a line, 1..=6.
pub fn line_name(line: u8) -> Option<&'static str> {
    match line {
        1..=6 => Some(LINE_NAMES[usize::from(line - 1)]),
        _ => None,
    }
}

/// A profile such as `1/3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    pub personality_line: u8,
    pub design_line: u8,
}

impl Profile {
    pub const fn new(personality_line: u8, design_line: u8) -> Self {
        Self {
            personality_line,
            design_line,
        }
    }

    /// `"Investigator / Martyr"` style name.
    pub fn name(&self) -> String {
        let p = line_name(self.personality_line).unwrap_or("?");
        let d = line_name(self.design_line).unwrap_or("?");
        format!("{p} / {d}")
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.personality_line, self.design_line)
    }
}
