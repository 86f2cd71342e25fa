//! A steering model that never steers.

use flock_core::{AgentId, DVec2};

use crate::{FlockContext, SteeringModel};

/// A [`SteeringModel`] that always returns zero acceleration.
///
/// Agents keep their velocity and move in straight lines until the boundary
/// policy intervenes.  Useful as a baseline in tests.
pub struct BallisticModel;

impl SteeringModel for BallisticModel {
    fn steer(&self, _agent: AgentId, _ctx: &FlockContext<'_>) -> DVec2 {
        DVec2::ZERO
    }
}
