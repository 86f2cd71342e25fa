//! Class-weighted flocking: separation + cohesion + alignment + walls.

use flock_core::{AgentId, ClassId, ConfigResult, DVec2, MagnitudeRange, clip};

use crate::neighbors::{classify, members};
use crate::rules::{alignment, cohesion, separation, wall_avoidance};
use crate::{CoefficientTable, FlockContext, SteeringModel};

/// The four per-tick contributions for one agent, each already clipped into
/// the acceleration band and weighted.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Contributions {
    pub separation: DVec2,
    pub cohesion:   DVec2,
    pub alignment:  DVec2,
    pub wall:       DVec2,
}

impl Contributions {
    #[inline]
    pub fn total(&self) -> DVec2 {
        self.separation + self.cohesion + self.alignment + self.wall
    }
}

/// The standard multi-species boids model.
///
/// For agent `i` of class `c`, each neighbor rule is evaluated once per
/// other class `c'` over the neighbors of that class, weighted by
/// `table[c][c']`, and summed over `c'`.  The three sums and the raw wall
/// term are then clipped into `a_range` independently; the wall term is
/// finally scaled by the wall weight of `c`.
pub struct FlockingModel {
    pub table:   CoefficientTable,
    pub a_range: MagnitudeRange,
}

impl FlockingModel {
    pub fn new(table: CoefficientTable, a_range: MagnitudeRange) -> Self {
        Self { table, a_range }
    }

    /// Break down the acceleration of `agent` into its four contributions.
    pub fn contributions(&self, agent: AgentId, ctx: &FlockContext<'_>) -> Contributions {
        let i = agent.index();
        let store = ctx.agents;
        let own = store.class_ids[i];

        let mut sep = DVec2::ZERO;
        let mut coh = DVec2::ZERO;
        let mut ali = DVec2::ZERO;

        let masks = classify(ctx, agent);
        if masks.any() {
            for other in 0..self.table.classes() {
                let other = ClassId(other as u16);
                let w = self.table.get(own, other);
                let ids = &store.class_ids;

                if let Some(a) = separation(ctx, i, members(&masks.separation, ids, other)) {
                    sep += w.separation * a;
                }
                if let Some(a) = cohesion(ctx, i, members(&masks.cohesion, ids, other)) {
                    coh += w.cohesion * a;
                }
                if let Some(a) = alignment(ctx, i, members(&masks.alignment, ids, other)) {
                    ali += w.alignment * a;
                }
            }
        }

        let wall = wall_avoidance(&ctx.field, store.positions[i]);

        Contributions {
            separation: clip(sep, self.a_range),
            cohesion:   clip(coh, self.a_range),
            alignment:  clip(ali, self.a_range),
            wall:       self.table.wall(own) * clip(wall, self.a_range),
        }
    }
}

impl SteeringModel for FlockingModel {
    fn steer(&self, agent: AgentId, ctx: &FlockContext<'_>) -> DVec2 {
        self.contributions(agent, ctx).total()
    }

    fn validate(&self, class_count: usize) -> ConfigResult<()> {
        self.table.validate_for(class_count)?;
        self.a_range.validate("a_range")
    }
}
