//! Seeded simulation RNG.
//!
//! The simulation owns exactly one `SimRng`, created from the configured
//! seed.  It is only touched during construction (initial positions, headings,
//! speeds and classes); the tick loop itself is deterministic and draws no
//! randomness, so a run is fully reproducible from `(config, seed)`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.  Single-threaded; never shared with the tick loop.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    ///
    /// Degenerate float ranges (`lo == hi`) are valid here and always return
    /// `lo`; callers pass `lo..=hi` for speed ranges that may collapse.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
