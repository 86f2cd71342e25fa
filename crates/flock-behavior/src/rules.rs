//! The four steering rules.
//!
//! Each neighbor rule takes the agent and an iterator over the neighbor
//! indices it should consider, and returns `None` when that set is empty so
//! the caller can skip the contribution entirely.  Results are steering
//! accelerations: the agent's own velocity is already subtracted.

use flock_core::{DVec2, Field};

use crate::FlockContext;

/// Added to pairwise distances so coincident agents do not divide by zero.
pub const SEPARATION_EPSILON: f64 = 1e-4;

/// Added to wall distances to bound the repulsion near an edge.
pub const WALL_EPSILON: f64 = 0.1;

/// Steer away from close neighbors, weighting each by inverse distance.
///
/// `Σ (p_i − p_j) / (|p_i − p_j| + ε) − v_i`
pub fn separation(
    ctx:       &FlockContext<'_>,
    i:         usize,
    neighbors: impl Iterator<Item = usize>,
) -> Option<DVec2> {
    let positions = &ctx.agents.positions;
    let origin = positions[i];

    let mut push = DVec2::ZERO;
    let mut seen = false;
    for j in neighbors {
        let away = origin - positions[j];
        push += away / (away.length() + SEPARATION_EPSILON);
        seen = true;
    }
    seen.then(|| push - ctx.agents.velocities[i])
}

/// Steer toward the centroid of the neighbors (the agent itself is not part
/// of the average).
///
/// `mean(p_j) − p_i − v_i`
pub fn cohesion(
    ctx:       &FlockContext<'_>,
    i:         usize,
    neighbors: impl Iterator<Item = usize>,
) -> Option<DVec2> {
    let positions = &ctx.agents.positions;
    let (sum, n) = neighbors.fold((DVec2::ZERO, 0usize), |(s, n), j| (s + positions[j], n + 1));
    if n == 0 {
        return None;
    }
    let centroid = sum / n as f64;
    Some(centroid - positions[i] - ctx.agents.velocities[i])
}

/// Match the mean velocity of the neighbors.
///
/// `mean(v_j) − v_i`
pub fn alignment(
    ctx:       &FlockContext<'_>,
    i:         usize,
    neighbors: impl Iterator<Item = usize>,
) -> Option<DVec2> {
    let velocities = &ctx.agents.velocities;
    let (sum, n) = neighbors.fold((DVec2::ZERO, 0usize), |(s, n), j| (s + velocities[j], n + 1));
    if n == 0 {
        return None;
    }
    Some(sum / n as f64 - velocities[i])
}

/// Soft repulsion from all four edges; applies every tick regardless of
/// neighbors or boundary policy.
///
/// Each edge pushes with `1 / (distance + ε)`:
///
/// ```text
/// ax = 1/(|x| + ε) − 1/(|x − width| + ε)
/// ay = 1/(|y| + ε) − 1/(|y − 1| + ε)
/// ```
pub fn wall_avoidance(field: &Field, position: DVec2) -> DVec2 {
    let push = |d: f64| 1.0 / (d.abs() + WALL_EPSILON);
    DVec2::new(
        push(position.x) - push(position.x - field.width),
        push(position.y) - push(position.y - field.height()),
    )
}
