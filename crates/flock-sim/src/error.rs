use flock_agent::AgentError;
use flock_core::{AgentId, ClassId, ConfigError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("initial agent state rejected: {0}")]
    Agents(#[from] AgentError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{agent} has {class} but the simulation is configured for {classes} classes")]
    ClassOutOfRange {
        agent:   AgentId,
        class:   ClassId,
        classes: usize,
    },

    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),

    #[cfg(feature = "parallel")]
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
