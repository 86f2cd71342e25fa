//! Semi-implicit (symplectic) Euler integration.

use flock_core::{DVec2, MagnitudeRange, clip};

use crate::Kinematics;

/// Advances one agent by `dt`:
///
/// ```text
/// v' = clip(v + a·dt, v_range)
/// p' = p + v'·dt
/// ```
///
/// Velocity is updated first and the position uses the *updated* velocity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Integrator {
    pub v_range: MagnitudeRange,
}

impl Integrator {
    #[inline]
    pub fn new(v_range: MagnitudeRange) -> Self {
        Self { v_range }
    }

    #[inline]
    pub fn step(&self, state: Kinematics, acceleration: DVec2, dt: f64) -> Kinematics {
        let velocity = clip(state.velocity + acceleration * dt, self.v_range);
        let position = state.position + velocity * dt;
        Kinematics { position, velocity }
    }
}
