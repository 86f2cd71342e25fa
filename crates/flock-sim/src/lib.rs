//! `flock-sim` — tick loop orchestrator for the `flock` boids simulation.
//!
//! # Snapshot-then-commit tick
//!
//! ```text
//! tick(dt):
//!   ① Snapshot — borrow the AgentStore immutably as a FlockContext.
//!   ② Steer    — SteeringModel::steer for every agent against the snapshot
//!                (parallel with the `parallel` feature).
//!   ③ Contain  — bounce/wrap each agent's pre-tick state, written into the
//!                same private output slot.
//!   ④ Commit   — integrate every slot in AgentId order and replace the
//!                store's kinematic arrays wholesale.
//! ```
//!
//! No agent ever reads another agent's in-progress result, so the outcome of
//! a tick does not depend on thread count or scheduling order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs steps ② and ③ on Rayon's thread pool.             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_behavior::{ClassWeights, CoefficientTable};
//! use flock_core::FlockConfig;
//! use flock_sim::{NoopObserver, SimBuilder};
//!
//! let config = FlockConfig::default();
//! let table = CoefficientTable::uniform(2, ClassWeights::new(1.0, 0.5, 0.5), 0.1)?;
//! let mut sim = SimBuilder::flocking(config, table).build()?;
//! sim.run_ticks(100, &mut NoopObserver);
//! let positions = sim.snapshot_positions();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TracingObserver};
pub use sim::Sim;
pub use stats::TickStats;
