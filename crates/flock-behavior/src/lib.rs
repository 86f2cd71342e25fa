//! `flock-behavior` — how a boid decides which way to steer.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                        |
//! |------------------|-----------------------------------------------------------------|
//! | [`context`]      | `FlockContext<'a>` — read-only tick snapshot shared by all agents |
//! | [`neighbors`]    | `NeighborMasks`, `classify` — brute-force distance masks        |
//! | [`coefficients`] | `ClassWeights`, `CoefficientTable` — per-class-pair weights     |
//! | [`rules`]        | separation, cohesion, alignment, wall avoidance                 |
//! | [`model`]        | `SteeringModel` trait                                           |
//! | [`flocking`]     | `FlockingModel` — class-weighted sum of the four rules          |
//! | [`ballistic`]    | `BallisticModel` — never steers                                 |
//!
//! # Design notes
//!
//! The tick loop in flock-sim has a compute phase and a commit phase:
//!
//! 1. **Compute** (parallel): for every agent call `SteeringModel::steer`.
//!    All reads go through `&FlockContext`, which borrows the pre-tick
//!    `AgentStore`; nothing is mutated.
//!
//! 2. **Commit** (sequential): the collected accelerations are integrated and
//!    the store is replaced wholesale.
//!
//! Because `steer` only ever sees the pre-tick snapshot, the result for one
//! agent cannot depend on the order in which other agents were processed.

pub mod ballistic;
pub mod coefficients;
pub mod context;
pub mod flocking;
pub mod model;
pub mod neighbors;
pub mod rules;


pub use ballistic::BallisticModel;
pub use coefficients::{ClassWeights, CoefficientTable};
pub use context::FlockContext;
pub use flocking::{Contributions, FlockingModel};
pub use model::SteeringModel;
pub use neighbors::{NeighborMasks, classify};
