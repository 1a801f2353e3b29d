//! Structure aggregation: channels, centers and their connectivity.
//!
//! A channel is complete when both of its gates are activated. A center is
//! defined only when a complete channel touches it; activated gates on
//! their own never define a center.

use std::collections::BTreeSet;

use bodygraph_base::{
    ALL_CENTERS, CHANNELS, Center, Channel, MOTOR_CENTERS, center_of_gate, channels_of_gate,
    gates_of,
};
use serde::{Deserialize, Serialize};

/// State of a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CenterState {
    /// Touched by at least one complete channel.
    Defined,
    /// Has activated gates, but no complete channel.
    Undefined,
    /// No activated gate at all.
    Open,
}

impl CenterState {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Defined => "Defined",
            Self::Undefined => "Undefined",
            Self::Open => "Open",
        }
    }

    pub const fn is_defined(self) -> bool {
        matches!(self, Self::Defined)
    }
}

/// One center's state and activated gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterStatus {
    pub center: Center,
    pub state: CenterState,
    /// Activated gates owned by this center, ascending.
    pub active_gates: Vec<u8>,
}

/// One channel and whether it is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChannelStatus {
    pub channel: Channel,
    pub complete: bool,
}

/// Centers and channels derived from an activated gate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    centers: [CenterState; 9],
    complete: [bool; 36],
    active_gates: BTreeSet<u8>,
}

/// Aggregate an activated gate set.
pub fn aggregate(active_gates: &BTreeSet<u8>) -> Structure {
    let mut complete = [false; 36];
    let mut defined = [false; 9];
    for (i, channel) in CHANNELS.iter().enumerate() {
        if channel.is_complete(|g| active_gates.contains(&g)) {
            complete[i] = true;
            let (a, b) = channel.centers();
            defined[a.index()] = true;
            defined[b.index()] = true;
        }
    }

    let centers = ALL_CENTERS.map(|c| {
        if defined[c.index()] {
            CenterState::Defined
        } else if gates_of(c).iter().any(|g| active_gates.contains(g)) {
            CenterState::Undefined
        } else {
            CenterState::Open
        }
    });

    Structure {
        centers,
        complete,
        active_gates: active_gates.clone(),
    }
}

impl Structure {
    pub fn state(&self, center: Center) -> CenterState {
        self.centers[center.index()]
    }

    pub fn is_defined(&self, center: Center) -> bool {
        self.state(center).is_defined()
    }

    /// Defined centers in [`ALL_CENTERS`] order.
    pub fn defined_centers(&self) -> Vec<Center> {
        ALL_CENTERS
            .iter()
            .copied()
            .filter(|&c| self.is_defined(c))
            .collect()
    }

    /// Complete channels in table order.
    pub fn complete_channels(&self) -> Vec<Channel> {
        CHANNELS
            .iter()
            .zip(self.complete.iter())
            .filter(|&(_, &done)| done)
            .map(|(c, _)| *c)
            .collect()
    }

    /// All 36 channels with their completion flag.
    pub fn channel_statuses(&self) -> Vec<ChannelStatus> {
        CHANNELS
            .iter()
            .zip(self.complete.iter())
            .map(|(&channel, &complete)| ChannelStatus { channel, complete })
            .collect()
    }

    /// All nine centers with state and activated gates.
    pub fn center_statuses(&self) -> Vec<CenterStatus> {
        ALL_CENTERS
            .iter()
            .map(|&center| CenterStatus {
                center,
                state: self.state(center),
                active_gates: self
                    .active_gates
                    .iter()
                    .copied()
                    .filter(|&g| center_of_gate(g) == Some(center))
                    .collect(),
            })
            .collect()
    }

    /// Activated gates whose channel partners are all inactive.
    pub fn hanging_gates(&self) -> Vec<u8> {
        self.active_gates
            .iter()
            .copied()
            .filter(|&g| {
                channels_of_gate(g).all(|c| !c.is_complete(|x| self.active_gates.contains(&x)))
            })
            .collect()
    }

    /// Centers reachable from `start` through complete channels.
    ///
    /// `start` is included only if it is defined.
    fn reachable(&self, start: Center) -> [bool; 9] {
        let mut seen = [false; 9];
        if !self.is_defined(start) {
            return seen;
        }
        let mut stack = vec![start];
        seen[start.index()] = true;
        while let Some(center) = stack.pop() {
            for (channel, &done) in CHANNELS.iter().zip(self.complete.iter()) {
                if !done {
                    continue;
                }
                let (a, b) = channel.centers();
                let next = if a == center {
                    b
                } else if b == center {
                    a
                } else {
                    continue;
                };
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    stack.push(next);
                }
            }
        }
        seen
    }

    /// Whether a chain of complete channels joins `from` and `to`.
    pub fn connected(&self, from: Center, to: Center) -> bool {
        from != to && self.reachable(from)[to.index()]
    }

    /// Whether the Throat is joined to any motor center.
    pub fn throat_connected_to_motor(&self) -> bool {
        let reach = self.reachable(Center::Throat);
        MOTOR_CENTERS.iter().any(|c| reach[c.index()])
    }

    /// Connected groups of defined centers.
    pub fn components(&self) -> Vec<Vec<Center>> {
        let mut assigned = [false; 9];
        let mut groups = Vec::new();
        for &center in &ALL_CENTERS {
            if assigned[center.index()] || !self.is_defined(center) {
                continue;
            }
            let reach = self.reachable(center);
            let group: Vec<Center> = ALL_CENTERS
                .iter()
                .copied()
                .filter(|c| reach[c.index()])
                .collect();
            for c in &group {
                assigned[c.index()] = true;
            }
            groups.push(group);
        }
        groups
    }

    pub fn active_gates(&self) -> &BTreeSet<u8> {
        &self.active_gates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gates(list: &[u8]) -> BTreeSet<u8> {
        list.iter().copied().collect()
    }

    #[test]
    fn nothing_active_everything_open() {
        let s = aggregate(&BTreeSet::new());
        assert!(ALL_CENTERS.iter().all(|&c| s.state(c) == CenterState::Open));
        assert!(s.complete_channels().is_empty());
        assert!(s.components().is_empty());
    }

    #[test]
    fn hanging_gate_does_not_define() {
        let s = aggregate(&gates(&[34, 5, 14, 29]));
        assert_eq!(s.state(Center::Sacral), CenterState::Undefined);
        assert!(!s.is_defined(Center::Sacral));
        assert_eq!(s.hanging_gates(), vec![5, 14, 29, 34]);
    }

    #[test]
    fn complete_channel_defines_both_ends() {
        let s = aggregate(&gates(&[34, 57, 1]));
        assert!(s.is_defined(Center::Sacral));
        assert!(s.is_defined(Center::Spleen));
        assert_eq!(s.state(Center::G), CenterState::Undefined);
        assert_eq!(s.state(Center::Head), CenterState::Open);
        assert_eq!(s.hanging_gates(), vec![1]);
        assert_eq!(s.complete_channels().len(), 1);
    }

    #[test]
    fn connection_through_intermediate_center() {
        // Root → Spleen (32-54), Spleen → Throat (16-48).
        let s = aggregate(&gates(&[32, 54, 16, 48]));
        assert!(s.connected(Center::Root, Center::Throat));
        assert!(s.throat_connected_to_motor());
        assert_eq!(s.components().len(), 1);
    }

    #[test]
    fn disjoint_channels_split() {
        let s = aggregate(&gates(&[64, 47, 34, 57]));
        let comps = s.components();
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0], vec![Center::Head, Center::Ajna]);
        assert!(!s.connected(Center::Head, Center::Sacral));
    }

    #[test]
    fn center_statuses_list_gates() {
        let s = aggregate(&gates(&[34, 57, 5]));
        let sacral = &s.center_statuses()[Center::Sacral.index()];
        assert_eq!(sacral.active_gates, vec![5, 34]);
        assert_eq!(s.channel_statuses().iter().filter(|c| c.complete).count(), 1);
    }
}
