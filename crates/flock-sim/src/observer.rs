//! Simulation observer trait for progress reporting and rendering hooks.

use flock_agent::AgentStore;
use flock_core::Tick;
use tracing::info;

use crate::TickStats;

/// Callbacks invoked by [`Sim::run_ticks`][crate::Sim::run_ticks] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — frame pump for a renderer
///
/// ```rust,ignore
/// struct Frames(Vec<Vec<[f64; 2]>>);
///
/// impl SimObserver for Frames {
///     fn on_snapshot(&mut self, _tick: Tick, agents: &AgentStore) {
///         self.0.push(agents.positions.iter().map(|p| [p.x, p.y]).collect());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the snapshot is taken.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the commit with summary statistics for the new state.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called every `config.snapshot_interval_ticks` ticks with read-only
    /// access to the committed agent state.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once after the last tick of a `run_ticks` call.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Logs tick statistics through `tracing` every `interval` ticks.
pub struct TracingObserver {
    interval: u64,
}

impl TracingObserver {
    /// `interval` of `0` is treated as `1`.
    pub fn new(interval: u64) -> Self {
        Self { interval: interval.max(1) }
    }
}

impl SimObserver for TracingObserver {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        if tick.0.is_multiple_of(self.interval) {
            info!(
                tick = tick.0,
                mean_speed = stats.mean_speed,
                max_speed = stats.max_speed,
                mean_acceleration = stats.mean_acceleration,
                centroid_x = stats.centroid.x,
                centroid_y = stats.centroid.y,
                "flock tick",
            );
        }
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        info!(tick = final_tick.0, "run finished");
    }
}
