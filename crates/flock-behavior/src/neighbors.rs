//! Brute-force neighbor classification.
//!
//! For agent `i` every other agent `j` is tested against two radii:
//!
//! ```text
//! perception[j] = d(i, j) < perception_radius,  j != i
//! separation[j] = d(i, j) < perception_radius / 2,  j != i
//! cohesion      = perception XOR separation      (outer annulus only)
//! alignment     = perception
//! ```
//!
//! Cost is O(N) per agent and O(N²) per tick.  A spatial index could replace
//! the distance scan without changing any mask.

use flock_core::{AgentId, ClassId, DVec2};

use crate::FlockContext;

/// The three boolean masks for one agent, indexed by `AgentId`.
///
/// The agent's own slot is always `false` in every mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborMasks {
    pub separation: Vec<bool>,
    pub cohesion:   Vec<bool>,
    pub alignment:  Vec<bool>,
}

impl NeighborMasks {
    /// `true` if the agent perceives at least one other agent.
    #[inline]
    pub fn any(&self) -> bool {
        self.alignment.iter().any(|&b| b)
    }
}

/// Euclidean distance from `positions[i]` to every position (including `i`
/// itself, which is `0.0`).
pub fn distances_from(positions: &[DVec2], i: usize) -> Vec<f64> {
    let origin = positions[i];
    positions.iter().map(|&p| origin.distance(p)).collect()
}

/// Compute the separation, cohesion and alignment masks for `agent`.
pub fn classify(ctx: &FlockContext<'_>, agent: AgentId) -> NeighborMasks {
    let i = agent.index();
    let distances = distances_from(&ctx.agents.positions, i);
    let outer = ctx.perception_radius;
    let inner = ctx.separation_radius();

    let mut perception: Vec<bool> = distances.iter().map(|&d| d < outer).collect();
    let mut separation: Vec<bool> = distances.iter().map(|&d| d < inner).collect();
    perception[i] = false;
    separation[i] = false;

    let cohesion = perception
        .iter()
        .zip(&separation)
        .map(|(&p, &s)| p ^ s)
        .collect();

    NeighborMasks { separation, cohesion, alignment: perception }
}

/// Indices set in `mask` whose agent belongs to `class`.
///
/// This is the per-class intersection `mask ∧ (class_id == class)` used when
/// accumulating class-weighted contributions.
pub fn members<'m>(
    mask:      &'m [bool],
    class_ids: &'m [ClassId],
    class:     ClassId,
) -> impl Iterator<Item = usize> + 'm {
    mask.iter()
        .zip(class_ids)
        .enumerate()
        .filter(move |&(_, (&set, &c))| set && c == class)
        .map(|(j, _)| j)
}
