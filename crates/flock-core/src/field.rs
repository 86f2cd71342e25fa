//! The simulation field: an axis-aligned rectangle `[0, width] × [0, 1]`.
//!
//! Height is fixed at `1.0`; `width` is the aspect ratio of the renderer's
//! canvas (e.g. `16/9`).

use glam::DVec2;

/// Height of the field.  All vertical coordinates live in `[0, HEIGHT]`.
pub const HEIGHT: f64 = 1.0;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub width: f64,
}

impl Field {
    #[inline]
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    #[inline]
    pub fn height(&self) -> f64 {
        HEIGHT
    }

    /// `true` if `p` lies inside the closed rectangle.
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=HEIGHT).contains(&p.y)
    }

    /// Geometric centre of the field.
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, HEIGHT * 0.5)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[0, {:.3}] × [0, {:.3}]", self.width, HEIGHT)
    }
}
