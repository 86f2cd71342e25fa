//! The `SteeringModel` trait — the extension point for steering behavior.

use flock_core::{AgentId, ConfigResult, DVec2};

use crate::FlockContext;

/// Pluggable steering behavior.
///
/// # Thread safety
///
/// The simulation loop calls `steer` for many agents in parallel via Rayon,
/// so implementations must be `Send + Sync`.  Everything that varies per
/// agent lives in the `AgentStore` (read through `ctx.agents`), never in the
/// model itself.
///
/// # Example
///
/// ```rust,ignore
/// struct SeekCenter;
///
/// impl SteeringModel for SeekCenter {
///     fn steer(&self, agent: AgentId, ctx: &FlockContext<'_>) -> DVec2 {
///         ctx.field.center() - ctx.agents.position(agent)
///     }
/// }
/// ```
pub trait SteeringModel: Send + Sync + 'static {
    /// Total acceleration for `agent` this tick, computed from the pre-tick
    /// snapshot only.
    fn steer(&self, agent: AgentId, ctx: &FlockContext<'_>) -> DVec2;

    /// Check the model against the configured number of classes.
    ///
    /// Called once by `SimBuilder::build`.  Default: accepts anything.
    fn validate(&self, _class_count: usize) -> ConfigResult<()> {
        Ok(())
    }
}
