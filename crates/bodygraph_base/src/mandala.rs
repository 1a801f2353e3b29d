//! Longitude → symbolic unit mapping.
//!
//! The ecliptic is divided into 64 gate arcs of 5.625° starting at the
//! mandala origin, 302° (about 2° Aquarius). Gates do not run in numeric
//! order; [`GATE_SEQUENCE`] gives the gate at each arc index. Each arc nests
//! 6 lines, each line 6 colors, each color 6 tones and each tone 5 bases.
//!
//! Every floored subdivision index saturates at its maximum, so exact
//! boundaries and rounding noise never produce an out-of-range unit.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Ecliptic longitude where arc index 0 begins.
pub const MANDALA_OFFSET_DEG: f64 = 302.0;

/// Span of one gate: 360/64 = 5.625°.
pub const GATE_SPAN_DEG: f64 = 360.0 / 64.0;
/// Span of one line: 0.9375°.
pub const LINE_SPAN_DEG: f64 = GATE_SPAN_DEG / 6.0;
/// Span of one color: 0.15625°.
pub const COLOR_SPAN_DEG: f64 = LINE_SPAN_DEG / 6.0;
/// Span of one tone.
pub const TONE_SPAN_DEG: f64 = COLOR_SPAN_DEG / 6.0;
/// Span of one base.
pub const BASE_SPAN_DEG: f64 = TONE_SPAN_DEG / 5.0;

/// Gate number at each arc index, starting from the mandala origin.
#[rustfmt::skip]
pub const GATE_SEQUENCE: [u8; 64] = [
    41, 19, 13, 49, 30, 55, 37, 63,
    22, 36, 25, 17, 21, 51, 42,  3,
    27, 24,  2, 23,  8, 20, 16, 35,
    45, 12, 15, 52, 39, 53, 62, 56,
    31, 33,  7,  4, 29, 59, 40, 64,
    47,  6, 46, 18, 48, 57, 32, 50,
    28, 44,  1, 43, 14, 34,  9,  5,
    26, 11, 10, 58, 38, 54, 61, 60,
];

/// Gate, line, color, tone and base for one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolicUnit {
    /// Gate, 1..=64.
    pub gate: u8,
    /// Line, 1..=6.
    pub line: u8,
    /// Color, 1..=6.
    pub color: u8,
    /// Tone, 1..=6.
    pub tone: u8,
    /// Base, 1..=5.
    pub base: u8,
}

impl Display for SymbolicUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.gate, self.line, self.color, self.tone, self.base
        )
    }
}

/// Floor `remainder / span`, saturated to `[0, count - 1]`, and the
/// remainder left inside the chosen slot.
fn subdivide(remainder: f64, span: f64, count: u8) -> (u8, f64) {
    // `as` saturates: negative rounding noise and NaN give 0.
    let idx = ((remainder / span).floor() as u8).min(count - 1);
    (idx, remainder - f64::from(idx) * span)
}

/// Map an ecliptic longitude in degrees to its symbolic unit.
///
/// Any finite value is accepted and wrapped into [0, 360) first.
pub fn map_longitude(longitude_deg: f64) -> SymbolicUnit {
    let angle = normalize_360(normalize_360(longitude_deg) - MANDALA_OFFSET_DEG);

    let (gate_idx, rem) = subdivide(angle, GATE_SPAN_DEG, 64);
    let (line_idx, rem) = subdivide(rem, LINE_SPAN_DEG, 6);
    let (color_idx, rem) = subdivide(rem, COLOR_SPAN_DEG, 6);
    let (tone_idx, rem) = subdivide(rem, TONE_SPAN_DEG, 6);
    let (base_idx, _) = subdivide(rem, BASE_SPAN_DEG, 5);

    SymbolicUnit {
        gate: GATE_SEQUENCE[usize::from(gate_idx)],
        line: line_idx + 1,
        color: color_idx + 1,
        tone: tone_idx + 1,
        base: base_idx + 1,
    }
}

/// Arc index of `gate` in [`GATE_SEQUENCE`].
fn sequence_index(gate: u8) -> Option<usize> {
    GATE_SEQUENCE.iter().position(|&g| g == gate)
}

/// Ecliptic longitude in [0, 360) where `gate`'s arc begins.
pub fn gate_start_longitude(gate: u8) -> Option<f64> {
    sequence_index(gate)
        .map(|idx| normalize_360(MANDALA_OFFSET_DEG + idx as f64 * GATE_SPAN_DEG))
}

/// The gate directly across the wheel, 180° away.
pub fn opposite_gate(gate: u8) -> Option<u8> {
    sequence_index(gate).map(|idx| GATE_SEQUENCE[(idx + 32) % 64])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(gate: u8, line: u8, color: u8, tone: u8, base: u8) -> SymbolicUnit {
        SymbolicUnit {
            gate,
            line,
            color,
            tone,
            base,
        }
    }

    #[test]
    fn sequence_is_a_permutation() {
        let mut seen = [false; 64];
        for &g in &GATE_SEQUENCE {
            assert!((1..=64).contains(&g));
            assert!(!seen[usize::from(g - 1)], "gate {g} repeated");
            seen[usize::from(g - 1)] = true;
        }
    }

    #[test]
    fn origin_is_gate_41_first_everything() {
        assert_eq!(map_longitude(MANDALA_OFFSET_DEG), unit(41, 1, 1, 1, 1));
    }

    #[test]
    fn just_below_origin_saturates() {
        assert_eq!(map_longitude(MANDALA_OFFSET_DEG - 1e-12), unit(60, 6, 6, 6, 5));
    }

    #[test]
    fn cardinal_points() {
        // 0° sits on a base boundary, so stop at the tone.
        let u = map_longitude(0.0);
        assert_eq!((u.gate, u.line, u.color, u.tone), (25, 2, 6, 2));
        assert_eq!(map_longitude(270.0).gate, 10);
    }

    #[test]
    fn wraps_negative_and_large() {
        assert_eq!(map_longitude(-360.0), map_longitude(0.0));
        assert_eq!(map_longitude(-58.0), map_longitude(302.0));
        assert_eq!(map_longitude(720.0 + 12.3), map_longitude(12.3));
    }

    #[test]
    fn line_boundaries_inside_gate_41() {
        for line in 0..6_u8 {
            let lon = MANDALA_OFFSET_DEG + f64::from(line) * LINE_SPAN_DEG + 1e-9;
            let u = map_longitude(lon);
            assert_eq!((u.gate, u.line), (41, line + 1));
        }
    }

    #[test]
    fn display_is_dotted() {
        assert_eq!(unit(35, 1, 2, 3, 4).to_string(), "35.1.2.3.4");
    }

    #[test]
    fn gate_start_round_trips() {
        for &g in &GATE_SEQUENCE {
            let Some(start) = gate_start_longitude(g) else {
                panic!("no start for gate {g}");
            };
            let u = map_longitude(start + GATE_SPAN_DEG / 2.0);
            assert_eq!(u.gate, g);
        }
        assert_eq!(gate_start_longitude(41), Some(302.0));
        assert_eq!(gate_start_longitude(0), None);
    }

    #[test]
    fn opposite_pairs() {
        assert_eq!(opposite_gate(41), Some(31));
        assert_eq!(opposite_gate(35), Some(5));
        assert_eq!(opposite_gate(63), Some(64));
        assert_eq!(opposite_gate(1), Some(2));
        for &g in &GATE_SEQUENCE {
            let o = opposite_gate(g).and_then(opposite_gate);
            assert_eq!(o, Some(g));
        }
    }
}
