//! The 64 gates: owning center and name.
//!
//! Gates are plain `u8` numbers 1..=64. Lookups taking a gate number return
//! `None` outside that range.

use crate::center::Center;

/// Number of gates.
pub const GATE_COUNT: u8 = 64;

/// Owning center of each gate, indexed by `gate - 1`.
#[rustfmt::skip]
const GATE_CENTER: [Center; 64] = {
    use Center::*;
    [
        G, G, Sacral, Ajna, Sacral, SolarPlexus, G, Throat,
        Sacral, G, Ajna, Throat, G, Sacral, G, Throat,
        Ajna, Spleen, Root, Throat, Heart, SolarPlexus, Throat, Ajna,
        G, Heart, Sacral, Spleen, Sacral, SolarPlexus, Throat, Spleen,
        Throat, Sacral, Throat, SolarPlexus, SolarPlexus, Root, Root, Heart,
        Root, Sacral, Ajna, Spleen, Throat, G, Ajna, Spleen,
        SolarPlexus, Spleen, Heart, Root, Root, Root, SolarPlexus, Throat,
        Spleen, Root, Sacral, Root, Head, Throat, Head, Head,
    ]
};

/// Gate names, indexed by `gate - 1`.
const GATE_NAMES: [&str; 64] = [
    "Self-Expression",
    "Direction of the Self",
    "Ordering",
    "Formulization",
    "Fixed Rhythms",
    "Friction",
    "The Role of the Self",
    "Contribution",
    "Focus",
    "Behavior of the Self",
    "Ideas",
    "Caution",
    "The Listener",
    "Power Skills",
    "Extremes",
    "Skills",
    "Opinions",
    "Correction",
    "Wanting",
    "The Now",
    "The Hunter/Huntress",
    "Openness",
    "Assimilation",
    "Rationalization",
    "The Spirit of the Self",
    "The Egoist",
    "Caring",
    "The Game Player",
    "Perseverance",
    "Feelings",
    "Influence",
    "Continuity",
    "Privacy",
    "Power",
    "Change",
    "Crisis",
    "Friendship",
    "The Fighter",
    "Provocation",
    "Aloneness",
    "Contraction",
    "Growth",
    "Insight",
    "Alertness",
    "The Gatherer",
    "Determination of the Self",
    "Realizing",
    "Depth",
    "Principles",
    "Values",
    "Shock",
    "Stillness",
    "Beginnings",
    "Ambition",
    "Spirit",
    "Stimulation",
    "Intuitive Clarity",
    "Vitality",
    "Sexuality",
    "Acceptance",
    "Mystery",
    "Details",
    "Doubt",
    "Confusion",
];

/// Gates owned by each center, in bodygraph drawing order.
const HEAD_GATES: [u8; 3] = [64, 61, 63];
const AJNA_GATES: [u8; 6] = [47, 24, 4, 17, 43, 11];
const THROAT_GATES: [u8; 11] = [62, 23, 56, 35, 12, 45, 33, 8, 31, 20, 16];
const G_GATES: [u8; 8] = [7, 1, 13, 25, 46, 2, 15, 10];
const HEART_GATES: [u8; 4] = [21, 40, 26, 51];
const SPLEEN_GATES: [u8; 7] = [48, 57, 44, 50, 32, 28, 18];
const SACRAL_GATES: [u8; 9] = [5, 14, 29, 59, 9, 3, 42, 27, 34];
const SOLAR_PLEXUS_GATES: [u8; 7] = [6, 37, 22, 36, 30, 55, 49];
const ROOT_GATES: [u8; 9] = [53, 60, 52, 19, 39, 41, 58, 38, 54];

/// Whether `gate` is a valid gate number.
const fn is_valid_gate(gate: u8) -> bool {
    gate >= 1 && gate <= GATE_COUNT
}

/// Center owning `gate`.
pub fn center_of_gate(gate: u8) -> Option<Center> {
    is_valid_gate(gate).then(|| GATE_CENTER[usize::from(gate - 1)])
}

/// Center of a gate already known to be in range.
pub(crate) const fn center_of_valid_gate(gate: u8) -> Center {
    GATE_CENTER[(gate - 1) as usize]
}

/// Name of `gate`.
pub fn gate_name(gate: u8) -> Option<&'static str> {
    is_valid_gate(gate).then(|| GATE_NAMES[usize::from(gate - 1)])
}

/// Gates owned by `center`.
pub const fn gates_of(center: Center) -> &'static [u8] {
    match center {
        Center::Head => &HEAD_GATES,
        Center::Ajna => &AJNA_GATES,
        Center::Throat => &THROAT_GATES,
        Center::G => &G_GATES,
        Center::Heart => &HEART_GATES,
        Center::Spleen => &SPLEEN_GATES,
        Center::Sacral => &SACRAL_GATES,
        Center::SolarPlexus => &SOLAR_PLEXUS_GATES,
        Center::Root => &ROOT_GATES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::center::ALL_CENTERS;

    #[test]
    fn center_lists_partition_the_gates() {
        let mut seen = [false; 64];
        for &c in &ALL_CENTERS {
            for &g in gates_of(c) {
                assert!(!seen[usize::from(g - 1)], "gate {g} listed twice");
                seen[usize::from(g - 1)] = true;
                assert_eq!(center_of_gate(g), Some(c), "gate {g}");
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn out_of_range_gates() {
        assert_eq!(center_of_gate(0), None);
        assert_eq!(center_of_gate(65), None);
        assert_eq!(gate_name(0), None);
    }

    #[test]
    fn known_names() {
        assert_eq!(gate_name(1), Some("Self-Expression"));
        assert_eq!(gate_name(34), Some("Power"));
        assert_eq!(gate_name(64), Some("Confusion"));
    }

    #[test]
    fn known_centers() {
        assert_eq!(center_of_gate(34), Some(Center::Sacral));
        assert_eq!(center_of_gate(57), Some(Center::Spleen));
        assert_eq!(center_of_gate(41), Some(Center::Root));
    }
}
