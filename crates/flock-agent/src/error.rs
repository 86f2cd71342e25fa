use flock_core::{AgentId, ClassId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("{what} length {got} does not match agent count {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{agent} has {class} but only {classes} classes exist")]
    ClassOutOfRange {
        agent:   AgentId,
        class:   ClassId,
        classes: usize,
    },

    #[error("{agent} has a non-finite {what}")]
    NonFinite { agent: AgentId, what: &'static str },

    #[error("population of {0} agents exceeds the AgentId range")]
    TooManyAgents(usize),
}

pub type AgentResult<T> = Result<T, AgentError>;
