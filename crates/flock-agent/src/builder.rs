//! Fluent builder for a randomly initialized `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::AgentStoreBuilder;
//! use flock_core::{Field, MagnitudeRange};
//!
//! let store = AgentStoreBuilder::new(1_000, /*seed=*/ 42)
//!     .classes(2)
//!     .field(Field::new(16.0 / 9.0))
//!     .speed_range(MagnitudeRange::new(0.0, 0.1))
//!     .build();
//!
//! assert_eq!(store.count, 1_000);
//! assert!(store.class_ids.iter().all(|c| c.index() < 2));
//! ```
//!
//! For hand-placed scenarios use [`AgentStore::from_parts`] instead.

use std::f64::consts::TAU;

use flock_core::{ClassId, DVec2, Field, MagnitudeRange, SimRng};

use crate::AgentStore;

/// Fluent builder for a seeded random [`AgentStore`].
///
/// Each agent gets:
/// - a position uniform in the field,
/// - a heading uniform in `[0, 2π)`,
/// - a speed uniform in the speed range,
/// - a class uniform in `[0, K)`.
///
/// Draws are made agent by agent in index order from one [`SimRng`], so the
/// same seed always produces the same flock.
pub struct AgentStoreBuilder {
    count:   usize,
    seed:    u64,
    classes: usize,
    field:   Field,
    speed:   MagnitudeRange,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the RNG seed.
    ///
    /// Defaults: one class, a unit-square field, speeds in `[0, 1]`.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            classes: 1,
            field:   Field::new(1.0),
            speed:   MagnitudeRange::new(0.0, 1.0),
        }
    }

    /// Number of species to draw classes from.  Values below 1 are raised to 1.
    pub fn classes(mut self, classes: usize) -> Self {
        self.classes = classes.clamp(1, u16::MAX as usize);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.field = field;
        self
    }

    pub fn speed_range(mut self, speed: MagnitudeRange) -> Self {
        self.speed = speed;
        self
    }

    /// Draw the population.
    ///
    /// The caller is responsible for passing a valid field and speed range
    /// (`FlockConfig::validate` checks both).
    pub fn build(self) -> AgentStore {
        let mut rng = SimRng::new(self.seed);

        let mut positions  = Vec::with_capacity(self.count);
        let mut velocities = Vec::with_capacity(self.count);
        let mut class_ids  = Vec::with_capacity(self.count);

        for _ in 0..self.count {
            let x = rng.gen_range(0.0..=self.field.width);
            let y = rng.gen_range(0.0..=self.field.height());
            let heading: f64 = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(self.speed.min..=self.speed.max);
            let class = rng.gen_range(0..self.classes);

            positions.push(DVec2::new(x, y));
            velocities.push(DVec2::from_angle(heading) * speed);
            class_ids.push(ClassId(class as u16));
        }

        AgentStore {
            count: self.count,
            class_count: self.classes,
            positions,
            velocities,
            accelerations: vec![DVec2::ZERO; self.count],
            class_ids,
        }
    }
}
