//! The `Sim` struct and its tick loop.

use flock_agent::AgentStore;
use flock_behavior::{FlockContext, SteeringModel};
use flock_core::{AgentId, ClassId, DVec2, FlockConfig, SimClock, Tick};
use flock_motion::{Integrator, Kinematics, contain};
use tracing::trace;

use crate::{SimError, SimObserver, SimResult, TickStats};

// ── Per-agent output slot ─────────────────────────────────────────────────────

/// Everything computed for one agent during the compute phase.  Each worker
/// writes exactly one slot and reads nothing but the pre-tick snapshot.
#[derive(Copy, Clone, Debug)]
struct AgentUpdate {
    acceleration: DVec2,
    /// Pre-tick state after boundary correction.
    contained:    Kinematics,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<M>` owns the agent store and drives the snapshot → compute → commit
/// tick described in the crate docs.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: SteeringModel> {
    /// Validated configuration.
    pub config: FlockConfig,

    /// Tick counter and accumulated simulated time.
    pub clock: SimClock,

    /// Agent state (SoA arrays).  Replaced wholesale once per tick.
    pub agents: AgentStore,

    /// The steering model.  Called once per agent per tick.
    pub model: M,

    pub integrator: Integrator,

    /// Dedicated worker pool when `config.num_threads` is set.
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<M: SteeringModel> Sim<M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one tick using the configured `dt`.
    pub fn tick(&mut self) -> TickStats {
        let dt = self.config.dt;
        self.process_tick(dt)
    }

    /// Advance one tick with a caller-supplied timestep.
    ///
    /// # Errors
    ///
    /// `InvalidTimestep` if `dt` is not positive and finite; state is left
    /// untouched.
    pub fn tick_with(&mut self, dt: f64) -> SimResult<TickStats> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTimestep(dt));
        }
        Ok(self.process_tick(dt))
    }

    /// Run exactly `n` ticks at the configured `dt`, reporting to `observer`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        let interval = self.config.snapshot_interval_ticks;
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let stats = self.tick();
            observer.on_tick_end(now, &stats);
            if interval > 0 && now.0.is_multiple_of(interval) {
                observer.on_snapshot(now, &self.agents);
            }
        }
        observer.on_run_end(self.clock.current_tick);
    }

    /// Current position of every agent as `[x, y]`, in `AgentId` order.
    pub fn snapshot_positions(&self) -> Vec<[f64; 2]> {
        self.agents.positions.iter().map(|p| [p.x, p.y]).collect()
    }

    /// Heading glyph per agent as `[x0, y0, x1, y1]`: from
    /// `position - dt * velocity` to `position`.
    pub fn snapshot_segments(&self, dt: f64) -> Vec<[f64; 4]> {
        self.agents.heading_segments(dt)
    }

    /// Species of every agent, in `AgentId` order.
    pub fn class_ids(&self) -> &[ClassId] {
        &self.agents.class_ids
    }

    /// The tick that the next call to `tick` will compute.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, dt: f64) -> TickStats {
        let now = self.clock.current_tick;

        // ── ①–③: compute against the immutable snapshot ──────────────────
        let updates = self.compute_updates();

        // ── ④: commit (single writer, ascending AgentId) ─────────────────
        let n = updates.len();
        let mut positions     = Vec::with_capacity(n);
        let mut velocities    = Vec::with_capacity(n);
        let mut accelerations = Vec::with_capacity(n);

        for update in &updates {
            let next = self.integrator.step(update.contained, update.acceleration, dt);
            debug_assert!(next.is_finite(), "non-finite state after integration: {next:?}");
            positions.push(next.position);
            velocities.push(next.velocity);
            accelerations.push(update.acceleration);
        }

        self.agents.commit(positions, velocities, accelerations);
        self.clock.advance(dt);

        trace!(tick = now.0, dt, agents = n, "tick committed");
        TickStats::from_store(now, &self.agents)
    }

    /// Steer and contain every agent.
    ///
    /// With the `parallel` Cargo feature the per-agent closure runs on
    /// Rayon's thread pool; otherwise sequentially.  Either way each agent
    /// reads only `&self.agents` and produces its own `AgentUpdate`, so the
    /// result is identical.
    fn compute_updates(&self) -> Vec<AgentUpdate> {
        // Explicit field borrows so the closure captures only shared refs.
        let store    = &self.agents;
        let model    = &self.model;
        let boundary = self.config.boundary;
        let field    = self.config.field();
        let ctx      = FlockContext::new(store, field, self.config.perception_radius);

        let compute = |i: usize| -> AgentUpdate {
            let agent = AgentId(i as u32);
            let acceleration = model.steer(agent, &ctx);
            debug_assert!(acceleration.is_finite(), "{agent} steered to {acceleration:?}");
            let pre = Kinematics::new(store.positions[i], store.velocities[i]);
            AgentUpdate { acceleration, contained: contain(boundary, &field, pre) }
        };

        #[cfg(not(feature = "parallel"))]
        {
            (0..store.count).map(compute).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let run = || -> Vec<AgentUpdate> { (0..store.count).into_par_iter().map(compute).collect() };
            match &self.pool {
                Some(pool) => pool.install(run),
                None       => run(),
            }
        }
    }
}
