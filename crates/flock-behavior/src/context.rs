//! Read-only simulation state passed to every steering callback.

use flock_agent::AgentStore;
use flock_core::{Field, FlockConfig};

/// A read-only snapshot of the flock passed to every
/// [`SteeringModel`][crate::SteeringModel] call.
///
/// `FlockContext` is built once per tick by flock-sim and shared immutably
/// across all workers during the compute phase.
///
/// # Lifetimes
///
/// The borrow of `agents` lives for one tick's compute phase.  flock-sim never
/// allows mutable access to the store while a `FlockContext` is live, so every
/// agent observes exactly the pre-tick state of every other agent.
pub struct FlockContext<'a> {
    /// Pre-tick positions, velocities and classes of every agent.
    pub agents: &'a AgentStore,

    pub field: Field,

    /// Outer neighbor radius (cohesion and alignment).
    pub perception_radius: f64,
}

impl<'a> FlockContext<'a> {
    #[inline]
    pub fn new(agents: &'a AgentStore, field: Field, perception_radius: f64) -> Self {
        Self { agents, field, perception_radius }
    }

    /// Build a context using the field and radius from `config`.
    #[inline]
    pub fn from_config(agents: &'a AgentStore, config: &FlockConfig) -> Self {
        Self::new(agents, config.field(), config.perception_radius)
    }

    /// Inner radius: always half of the perception radius.
    #[inline]
    pub fn separation_radius(&self) -> f64 {
        self.perception_radius * 0.5
    }
}
