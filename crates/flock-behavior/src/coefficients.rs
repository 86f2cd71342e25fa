//! Per-class interaction weights.
//!
//! A `K × K` table of `(separation, cohesion, alignment)` triples indexed by
//! `(own_class, other_class)`, plus one wall-avoidance weight per own class.
//! Weights only need to be finite; a negative weight inverts its rule (e.g. a
//! negative cohesion weight toward a predator class makes prey scatter).

use flock_core::{ClassId, ConfigError, ConfigResult};

/// How strongly an agent reacts to one other class.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassWeights {
    pub separation: f64,
    pub cohesion:   f64,
    pub alignment:  f64,
}

impl ClassWeights {
    #[inline]
    pub const fn new(separation: f64, cohesion: f64, alignment: f64) -> Self {
        Self { separation, cohesion, alignment }
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.separation.is_finite() && self.cohesion.is_finite() && self.alignment.is_finite()
    }
}

/// The full `K × K` weight table, stored row-major by own class.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoefficientTable {
    classes: usize,
    pairs:   Vec<ClassWeights>,
    wall:    Vec<f64>,
}

impl CoefficientTable {
    /// Build from one row per own class plus a wall weight per own class.
    ///
    /// # Errors
    ///
    /// - `TableShape` if the rows do not form a square table.
    /// - `WallWeightCount` if `wall.len() != rows.len()`.
    /// - `NonFiniteWeight` if any weight is NaN or infinite.
    pub fn from_rows(rows: Vec<Vec<ClassWeights>>, wall: Vec<f64>) -> ConfigResult<Self> {
        let classes = rows.len();
        if classes == 0 {
            return Err(ConfigError::NoClasses);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != classes) {
            return Err(ConfigError::TableShape { expected: classes, rows: classes, row, cols: r.len() });
        }
        if wall.len() != classes {
            return Err(ConfigError::WallWeightCount { expected: classes, got: wall.len() });
        }
        for (own, row) in rows.iter().enumerate() {
            if let Some(other) = row.iter().position(|w| !w.is_finite()) {
                return Err(ConfigError::NonFiniteWeight { own, other });
            }
            if !wall[own].is_finite() {
                return Err(ConfigError::NonFinite { what: "wall weight" });
            }
        }

        Ok(Self {
            classes,
            pairs: rows.into_iter().flatten().collect(),
            wall,
        })
    }

    /// Every class pair gets `weights`; every class gets `wall`.
    pub fn uniform(classes: usize, weights: ClassWeights, wall: f64) -> ConfigResult<Self> {
        Self::from_rows(vec![vec![weights; classes]; classes], vec![wall; classes])
    }

    /// A table of zeros: agents never steer.
    pub fn zeros(classes: usize) -> ConfigResult<Self> {
        Self::uniform(classes, ClassWeights::default(), 0.0)
    }

    /// Number of classes `K`.
    #[inline]
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Weights an agent of class `own` applies to neighbors of class `other`.
    #[inline]
    pub fn get(&self, own: ClassId, other: ClassId) -> ClassWeights {
        self.pairs[own.index() * self.classes + other.index()]
    }

    /// Wall-avoidance weight of class `own`.
    #[inline]
    pub fn wall(&self, own: ClassId) -> f64 {
        self.wall[own.index()]
    }

    /// The table must describe exactly `class_count` classes.
    ///
    /// Also re-checks the internal shape, which a deserialized table has not
    /// been through `from_rows` for.
    pub fn validate_for(&self, class_count: usize) -> ConfigResult<()> {
        if self.pairs.len() != self.classes * self.classes {
            return Err(ConfigError::TableShape {
                expected: self.classes,
                rows:     self.pairs.len() / self.classes.max(1),
                row:      0,
                cols:     self.classes,
            });
        }
        if self.wall.len() != self.classes {
            return Err(ConfigError::WallWeightCount { expected: self.classes, got: self.wall.len() });
        }
        if self.classes != class_count {
            return Err(ConfigError::TableShape {
                expected: class_count,
                rows:     self.classes,
                row:      0,
                cols:     self.classes,
            });
        }
        Ok(())
    }
}
