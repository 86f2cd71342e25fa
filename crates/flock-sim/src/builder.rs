//! Fluent builder for constructing a [`Sim`].

use flock_agent::{AgentError, AgentStore, AgentStoreBuilder};
use flock_behavior::{CoefficientTable, FlockingModel, SteeringModel};
use flock_core::{AgentId, ClassId, DVec2, FlockConfig, SimClock};
use flock_motion::Integrator;
use tracing::{info, warn};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<M>`].
///
/// # Required inputs
///
/// - [`FlockConfig`] — population, field, radii, ranges, timestep, seed, …
/// - `M: SteeringModel` — usually a [`FlockingModel`] (see
///   [`SimBuilder::flocking`])
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                          |
/// |------------------------|--------------------------------------------------|
/// | `.agents(store)`       | Random flock drawn from `config.seed`            |
/// | `.initial_state(p,v,c)`| Random flock drawn from `config.seed`            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::flocking(config, table)
///     .build()?;
/// sim.run_ticks(1_000, &mut NoopObserver);
/// ```
pub struct SimBuilder<M: SteeringModel> {
    config: FlockConfig,
    model:  M,
    agents: Option<InitialAgents>,
}

enum InitialAgents {
    Store(AgentStore),
    Parts {
        positions:  Vec<DVec2>,
        velocities: Vec<DVec2>,
        class_ids:  Vec<ClassId>,
    },
}

impl SimBuilder<FlockingModel> {
    /// Builder for the standard class-weighted flocking model, using
    /// `config.a_range` for per-rule clipping.
    pub fn flocking(config: FlockConfig, table: CoefficientTable) -> Self {
        let model = FlockingModel::new(table, config.a_range);
        Self::new(config, model)
    }
}

impl<M: SteeringModel> SimBuilder<M> {
    /// Create a builder with all required inputs.
    pub fn new(config: FlockConfig, model: M) -> Self {
        Self { config, model, agents: None }
    }

    /// Start from an existing store instead of a random flock.
    ///
    /// Its length must equal `config.agent_count` and every class must be
    /// below `config.class_count`.
    pub fn agents(mut self, store: AgentStore) -> Self {
        self.agents = Some(InitialAgents::Store(store));
        self
    }

    /// Start from explicit positions, velocities and classes.
    pub fn initial_state(
        mut self,
        positions:  Vec<DVec2>,
        velocities: Vec<DVec2>,
        class_ids:  Vec<ClassId>,
    ) -> Self {
        self.agents = Some(InitialAgents::Parts { positions, velocities, class_ids });
        self
    }

    /// Validate inputs, create the agent store, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<M>> {
        self.validate().inspect_err(|e| warn!(error = %e, "rejected flock configuration"))?;

        let config = self.config;
        let agents = match self.agents {
            None => AgentStoreBuilder::new(config.agent_count, config.seed)
                .classes(config.class_count)
                .field(config.field())
                .speed_range(config.v_range)
                .build(),
            Some(InitialAgents::Store(store)) => check_store(store, &config)?,
            Some(InitialAgents::Parts { positions, velocities, class_ids }) => {
                let store = AgentStore::from_parts(positions, velocities, class_ids, config.class_count)?;
                check_store(store, &config)?
            }
        };

        #[cfg(feature = "parallel")]
        let pool = match config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None    => None,
        };

        info!(
            agents = agents.count,
            classes = config.class_count,
            width = config.field_width,
            perception = config.perception_radius,
            boundary = %config.boundary,
            "flock simulation built",
        );

        Ok(Sim {
            clock:      SimClock::new(),
            integrator: Integrator::new(config.v_range),
            config,
            agents,
            model:      self.model,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    fn validate(&self) -> SimResult<()> {
        self.config.validate()?;
        self.model.validate(self.config.class_count)?;
        Ok(())
    }
}

/// The store must match the configured population and class count, and hold
/// only finite kinematics.
fn check_store(mut store: AgentStore, config: &FlockConfig) -> SimResult<AgentStore> {
    if store.count != config.agent_count {
        return Err(SimError::AgentCountMismatch {
            expected: config.agent_count,
            got:      store.count,
            what:     "initial agent store",
        });
    }
    for (what, got) in [
        ("positions", store.positions.len()),
        ("velocities", store.velocities.len()),
        ("accelerations", store.accelerations.len()),
        ("class ids", store.class_ids.len()),
    ] {
        if got != store.count {
            return Err(SimError::AgentCountMismatch { expected: store.count, got, what });
        }
    }
    if let Some(i) = store.class_ids.iter().position(|c| c.index() >= config.class_count) {
        return Err(SimError::ClassOutOfRange {
            agent:   AgentId(i as u32),
            class:   store.class_ids[i],
            classes: config.class_count,
        });
    }
    for (i, (p, v)) in store.positions.iter().zip(&store.velocities).enumerate() {
        let agent = AgentId(i as u32);
        if !p.is_finite() {
            return Err(AgentError::NonFinite { agent, what: "position" }.into());
        }
        if !v.is_finite() {
            return Err(AgentError::NonFinite { agent, what: "velocity" }.into());
        }
    }
    store.class_count = config.class_count;
    Ok(store)
}
