//! Per-tick summary statistics handed to observers.

use flock_agent::AgentStore;
use flock_core::{DVec2, Tick};

/// Aggregate state of the flock right after a commit.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickStats {
    /// The tick that was just committed.
    pub tick: Tick,
    pub mean_speed: f64,
    pub max_speed: f64,
    /// Mean magnitude of the accelerations applied this tick.
    pub mean_acceleration: f64,
    /// Mean position of all agents.
    pub centroid: DVec2,
}

impl TickStats {
    pub fn from_store(tick: Tick, store: &AgentStore) -> Self {
        if store.is_empty() {
            return Self { tick, ..Self::default() };
        }
        let n = store.count as f64;

        let (speed_sum, max_speed) = store
            .velocities
            .iter()
            .map(|v| v.length())
            .fold((0.0, 0.0_f64), |(sum, max), s| (sum + s, max.max(s)));
        let accel_sum: f64 = store.accelerations.iter().map(|a| a.length()).sum();
        let centroid = store.positions.iter().copied().sum::<DVec2>() / n;

        Self {
            tick,
            mean_speed: speed_sum / n,
            max_speed,
            mean_acceleration: accel_sum / n,
            centroid,
        }
    }
}
