//! Top-level simulation configuration.

use crate::{ConfigError, ConfigResult, Field, MagnitudeRange};

/// Upper bound on `class_count`; `ClassId` is a `u16`.
pub const MAX_CLASSES: usize = u16::MAX as usize;

// ── BoundaryKind ──────────────────────────────────────────────────────────────

/// Hard containment policy, selected once per run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoundaryKind {
    /// Reflect the offending velocity component and clamp just inside the edge.
    #[default]
    Bounce,
    /// Teleport to the opposite edge; velocity unchanged.
    Wrap,
}

impl std::fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryKind::Bounce => f.write_str("bounce"),
            BoundaryKind::Wrap => f.write_str("wrap"),
        }
    }
}

// ── FlockConfig ───────────────────────────────────────────────────────────────

/// Everything needed to construct a simulation except the coefficient table.
///
/// Typically built in code or loaded from JSON by the application crate (with
/// the `serde` feature) and passed to `flock_sim::SimBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    /// Population size `N`.  Fixed for the lifetime of the run.
    pub agent_count: usize,

    /// Number of species `K`.  The coefficient table must be `K × K`.
    pub class_count: usize,

    /// Field width (aspect ratio).  Height is always `1.0`.
    pub field_width: f64,

    /// Neighbor radius for cohesion and alignment.  The separation radius is
    /// always half of this.
    pub perception_radius: f64,

    /// Allowed speed band; velocities are clipped into it every tick.
    pub v_range: MagnitudeRange,

    /// Allowed band for each steering contribution before summation.
    pub a_range: MagnitudeRange,

    /// Fixed timestep used by `Sim::tick`.
    pub dt: f64,

    /// Hard containment policy.
    pub boundary: BoundaryKind,

    /// Master RNG seed.  The same seed always produces the same initial flock.
    pub seed: u64,

    /// Worker thread count for the parallel force phase.  `None` uses Rayon's
    /// global pool.
    pub num_threads: Option<usize>,

    /// Call `SimObserver::on_snapshot` every N ticks.  `0` disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            agent_count:             500,
            class_count:             2,
            field_width:             16.0 / 9.0,
            perception_radius:       1.0 / 20.0,
            v_range:                 MagnitudeRange::new(0.0, 0.1),
            a_range:                 MagnitudeRange::new(0.0, 2.0),
            dt:                      0.1,
            boundary:                BoundaryKind::Bounce,
            seed:                    0,
            num_threads:             None,
            snapshot_interval_ticks: 1,
        }
    }
}

impl FlockConfig {
    /// Inner radius below which separation applies instead of cohesion.
    #[inline]
    pub fn separation_radius(&self) -> f64 {
        self.perception_radius * 0.5
    }

    #[inline]
    pub fn field(&self) -> Field {
        Field::new(self.field_width)
    }

    /// Fail fast on any value the tick loop cannot handle.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.agent_count == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.class_count == 0 {
            return Err(ConfigError::NoClasses);
        }
        if self.class_count > MAX_CLASSES {
            return Err(ConfigError::TooManyClasses(self.class_count));
        }
        positive("field_width", self.field_width)?;
        positive("perception_radius", self.perception_radius)?;
        positive("dt", self.dt)?;
        self.v_range.validate("v_range")?;
        self.a_range.validate("a_range")?;
        Ok(())
    }
}

/// `value` must be finite and strictly greater than zero.
pub fn positive(what: &'static str, value: f64) -> ConfigResult<()> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { what });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { what, value });
    }
    Ok(())
}
