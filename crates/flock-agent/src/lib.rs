//! `flock-agent` — Structure-of-Arrays boid storage for the `flock` simulation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (positions, velocities, accelerations, classes) |
//! | [`builder`]     | `AgentStoreBuilder` (seeded random population)            |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |
//!
//! The population is fixed at construction: no agent is created or destroyed
//! mid-run, and index order is agent identity.

pub mod builder;
pub mod error;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use store::AgentStore;
