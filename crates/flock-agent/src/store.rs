//! Core agent storage: `AgentStore` (SoA data).
//!
//! The store is the only piece of state that survives between ticks.  The
//! simulation reads it immutably while computing forces (every worker shares
//! the same `&AgentStore`) and then replaces its kinematic arrays wholesale in
//! a single-writer commit:
//!
//! ```ignore
//! // flock-sim tick loop (simplified):
//! let store: &AgentStore = &sim.agents;
//! let updates: Vec<_> = (0..store.count)
//!     .into_par_iter()
//!     .map(|i| steer_and_contain(AgentId(i as u32), store))
//!     .collect();
//! let (positions, velocities, accelerations) = integrate(&updates);
//! sim.agents.commit(positions, velocities, accelerations);
//! ```

use flock_core::{AgentId, ClassId, DVec2};

use crate::{AgentError, AgentResult};

/// Structure-of-Arrays storage for all boid state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let p = store.positions[agent.index()];  // O(1), cache-friendly
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Number of species.  Every `class_ids` entry is `< class_count`.
    pub class_count: usize,

    pub positions: Vec<DVec2>,

    pub velocities: Vec<DVec2>,

    /// Acceleration applied during the most recent tick.  Zero before the
    /// first tick; scratch data otherwise.
    pub accelerations: Vec<DVec2>,

    /// Species of each agent, fixed for the lifetime of the run.
    pub class_ids: Vec<ClassId>,
}

impl AgentStore {
    /// Build a store from explicit initial state.
    ///
    /// All three slices must have the same length, every class must be in
    /// `[0, class_count)`, and every vector must be finite.
    pub fn from_parts(
        positions:   Vec<DVec2>,
        velocities:  Vec<DVec2>,
        class_ids:   Vec<ClassId>,
        class_count: usize,
    ) -> AgentResult<Self> {
        let count = positions.len();
        if u32::try_from(count).is_err() {
            return Err(AgentError::TooManyAgents(count));
        }
        for (what, got) in [("velocities", velocities.len()), ("class ids", class_ids.len())] {
            if got != count {
                return Err(AgentError::LengthMismatch { expected: count, got, what });
            }
        }
        for (i, &class) in class_ids.iter().enumerate() {
            let agent = AgentId(i as u32);
            if class.index() >= class_count {
                return Err(AgentError::ClassOutOfRange { agent, class, classes: class_count });
            }
            if !positions[i].is_finite() {
                return Err(AgentError::NonFinite { agent, what: "position" });
            }
            if !velocities[i].is_finite() {
                return Err(AgentError::NonFinite { agent, what: "velocity" });
            }
        }

        Ok(Self {
            count,
            class_count,
            positions,
            velocities,
            accelerations: vec![DVec2::ZERO; count],
            class_ids,
        })
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> DVec2 {
        self.positions[agent.index()]
    }

    #[inline]
    pub fn velocity(&self, agent: AgentId) -> DVec2 {
        self.velocities[agent.index()]
    }

    #[inline]
    pub fn class_of(&self, agent: AgentId) -> ClassId {
        self.class_ids[agent.index()]
    }

    /// Heading indicator per agent as `[x0, y0, x1, y1]`, where the start is
    /// `position - dt * velocity` and the end is the current position.
    pub fn heading_segments(&self, dt: f64) -> Vec<[f64; 4]> {
        self.positions
            .iter()
            .zip(&self.velocities)
            .map(|(&p, &v)| {
                let tail = p - v * dt;
                [tail.x, tail.y, p.x, p.y]
            })
            .collect()
    }

    /// Replace the kinematic arrays in one bulk write.
    ///
    /// Slices must be `count` long; this is the commit half of the
    /// snapshot-then-commit tick and is never called while a snapshot of the
    /// store is borrowed.
    pub fn commit(&mut self, positions: Vec<DVec2>, velocities: Vec<DVec2>, accelerations: Vec<DVec2>) {
        debug_assert_eq!(positions.len(), self.count);
        debug_assert_eq!(velocities.len(), self.count);
        debug_assert_eq!(accelerations.len(), self.count);
        self.positions = positions;
        self.velocities = velocities;
        self.accelerations = accelerations;
    }
}
