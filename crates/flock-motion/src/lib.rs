//! `flock-motion` — how a boid moves once its acceleration is known.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`state`]      | `Kinematics` — one agent's `(position, velocity)` pair     |
//! | [`boundary`]   | `contain` — bounce or wrap at the field edges              |
//! | [`integrator`] | `Integrator` — semi-implicit Euler with speed clipping     |
//!
//! # Per-agent motion step
//!
//! 1. `boundary::contain` corrects the pre-tick position and velocity.
//! 2. `Integrator::step` advances velocity, clips it, then advances position
//!    from the new velocity.
//!
//! Both are pure functions of one agent's state, so the simulation can run
//! them inside its parallel pass without any shared writes.

pub mod boundary;
pub mod integrator;
pub mod state;


pub use boundary::{BOUNDARY_INSET, contain};
pub use integrator::Integrator;
pub use state::Kinematics;
