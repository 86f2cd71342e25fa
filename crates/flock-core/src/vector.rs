//! Magnitude clipping for 2D vectors.
//!
//! Velocities and per-rule accelerations are kept inside a `[min, max]`
//! magnitude band.  Clipping rescales the vector and preserves its direction.
//!
//! A zero vector has no direction, so it passes through unchanged even when
//! `min > 0`.  This is the only case where the result may fall below `min`.

use glam::DVec2;

use crate::{ConfigError, ConfigResult};

/// An inclusive `[min, max]` band for vector magnitudes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagnitudeRange {
    pub min: f64,
    pub max: f64,
}

impl MagnitudeRange {
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `true` if `magnitude` lies inside the band (both ends inclusive).
    #[inline]
    pub fn contains(self, magnitude: f64) -> bool {
        magnitude >= self.min && magnitude <= self.max
    }

    /// Reject inverted, negative or non-finite bands.  `what` names the band in errors.
    pub fn validate(self, what: &'static str) -> ConfigResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFinite { what });
        }
        if self.min < 0.0 {
            return Err(ConfigError::NegativeMagnitude { what, min: self.min });
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedRange { what, min: self.min, max: self.max });
        }
        Ok(())
    }
}

/// Clamp the magnitude of `v` into `range`.
///
/// - `|v| > max` → rescaled to `max`.
/// - `0 < |v| < min` → rescaled to `min`.
/// - otherwise `v` is returned unchanged (including `v == 0`).
///
/// Idempotent: `clip(clip(v, r), r) == clip(v, r)` up to rounding.
#[inline]
pub fn clip(v: DVec2, range: MagnitudeRange) -> DVec2 {
    let norm = v.length();
    if norm == 0.0 {
        v
    } else if norm > range.max {
        v * (range.max / norm)
    } else if norm < range.min {
        v * (range.min / norm)
    } else {
        v
    }
}
