//! Lunar node longitudes.
//!
//! Mean node: Meeus, *Astronomical Algorithms* (2nd ed.), eq. 47.7.
//! True node: mean node plus the five largest periodic terms in the
//! motion of the node (Meeus ch. 47, after Chapront). The residual is
//! under 0.01°.
//!
//! The South Node is always North + 180°.

use bodygraph_frames as frames;
use serde::{Deserialize, Serialize};

use crate::moon::LunarArguments;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarNode {
    /// Ascending node.
    North,
    /// Descending node. Always North + 180°.
    South,
}

/// Both nodes, North first.
pub const ALL_NODES: [LunarNode; 2] = [LunarNode::North, LunarNode::South];

impl LunarNode {
    pub const fn all() -> &'static [LunarNode] {
        &ALL_NODES
    }
}

/// Mean or true (perturbed) node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    Mean,
    /// Mean + periodic perturbations. The usual choice for charts.
    #[default]
    True,
}

pub const ALL_MODES: [NodeMode; 2] = [NodeMode::Mean, NodeMode::True];

impl NodeMode {
    pub const fn all() -> &'static [NodeMode] {
        &ALL_MODES
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }
}

/// Mean ascending node longitude, mean equinox of date, degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_node_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    frames::wrap_degrees(
        125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
            - t4 / 60_616_000.0,
    )
}

/// Periodic correction from mean to true node, in degrees.
fn node_perturbation_deg(t: f64) -> f64 {
    // [nD, nM, nM', nF, amplitude_deg]
    #[rustfmt::skip]
    static TERMS: [[f64; 5]; 5] = [
        [ 2.0, 0.0,  0.0, -2.0, -1.4979],
        [ 0.0, 1.0,  0.0,  0.0, -0.1500],
        [ 2.0, 0.0,  0.0,  0.0, -0.1226],
        [ 0.0, 0.0,  0.0,  2.0,  0.1176],
        [ 0.0, 0.0,  2.0, -2.0, -0.0801],
    ];

    let args = LunarArguments::at(t);
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_argument.to_radians();

    TERMS
        .iter()
        .map(|term| {
            let angle = term[0] * d + term[1] * m + term[2] * mp + term[3] * f;
            term[4] * angle.sin()
        })
        .sum()
}

/// True ascending node longitude, mean equinox of date, degrees [0, 360).
pub fn true_node_deg(t: f64) -> f64 {
    frames::wrap_degrees(mean_node_deg(t) + node_perturbation_deg(t))
}

/// Apparent node longitude (nutation applied), degrees [0, 360).
pub fn lunar_node_deg(node: LunarNode, t: f64, mode: NodeMode) -> f64 {
    let north = match mode {
        NodeMode::Mean => mean_node_deg(t),
        NodeMode::True => true_node_deg(t),
    };
    let north = north + frames::nutation_in_longitude_deg(t);
    match node {
        LunarNode::North => frames::wrap_degrees(north),
        LunarNode::South => frames::wrap_degrees(north + 180.0),
    }
}
