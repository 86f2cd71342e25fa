//! `flock-core` — foundational types for the `flock` boids simulation.
//!
//! This crate is a dependency of every other `flock-*` crate.  It has no
//! `flock-*` dependencies and few external ones (`glam`, `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ClassId`                                  |
//! | [`vector`]      | `MagnitudeRange`, `clip`                              |
//! | [`field`]       | `Field` — the `[0,width] × [0,1]` rectangle            |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `FlockConfig`, `BoundaryKind`                         |
//! | [`rng`]         | `SimRng` (seeded, owned by the simulation)            |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod field;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BoundaryKind, FlockConfig};
pub use error::{ConfigError, ConfigResult};
pub use field::Field;
pub use glam::DVec2;
pub use ids::{AgentId, ClassId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
pub use vector::{MagnitudeRange, clip};
