//! The nine centers.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One of the nine centers of the bodygraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    Heart,
    Spleen,
    Sacral,
    SolarPlexus,
    Root,
}

/// All nine centers, top of the bodygraph first.
pub const ALL_CENTERS: [Center; 9] = [
    Center::Head,
    Center::Ajna,
    Center::Throat,
    Center::G,
    Center::Heart,
    Center::Spleen,
    Center::Sacral,
    Center::SolarPlexus,
    Center::Root,
];

/// The four motor centers.
pub const MOTOR_CENTERS: [Center; 4] = [
    Center::Heart,
    Center::SolarPlexus,
    Center::Sacral,
    Center::Root,
];

impl Center {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Ajna => "Ajna",
            Self::Throat => "Throat",
            Self::G => "G",
            Self::Heart => "Heart",
            Self::Spleen => "Spleen",
            Self::Sacral => "Sacral",
            Self::SolarPlexus => "Solar Plexus",
            Self::Root => "Root",
        }
    }

    /// 0-based index in [`ALL_CENTERS`] order.
    pub const fn index(self) -> usize {
        match self {
            Self::Head => 0,
            Self::Ajna => 1,
            Self::Throat => 2,
            Self::G => 3,
            Self::Heart => 4,
            Self::Spleen => 5,
            Self::Sacral => 6,
            Self::SolarPlexus => 7,
            Self::Root => 8,
        }
    }

    /// Heart, Solar Plexus, Sacral and Root generate energy.
    pub const fn is_motor(self) -> bool {
        matches!(
            self,
            Self::Heart | Self::SolarPlexus | Self::Sacral | Self::Root
        )
    }

    pub const fn all() -> &'static [Center; 9] {
        &ALL_CENTERS
    }
}

impl Display for Center {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
