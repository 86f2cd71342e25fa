//! Hard containment at the field edges.
//!
//! | Policy   | Past an edge                                                     |
//! |----------|------------------------------------------------------------------|
//! | `Bounce` | negate that velocity component, clamp `BOUNDARY_INSET` inside    |
//! | `Wrap`   | teleport to the opposite edge, velocity unchanged                |
//!
//! Each axis is handled independently, so an agent past a corner is corrected
//! on both axes in one call.

use flock_core::{BoundaryKind, Field};

use crate::Kinematics;

/// How far inside the edge a bounced agent is placed, so it does not
/// re-trigger the bounce on the next tick.
pub const BOUNDARY_INSET: f64 = 0.001;

/// Apply `kind` to one agent's state.  Agents inside the field are returned
/// unchanged.
pub fn contain(kind: BoundaryKind, field: &Field, state: Kinematics) -> Kinematics {
    match kind {
        BoundaryKind::Bounce => bounce(field, state),
        BoundaryKind::Wrap   => wrap(field, state),
    }
}

fn bounce(field: &Field, mut s: Kinematics) -> Kinematics {
    let height = field.height();

    if s.position.y > height {
        s.velocity.y = -s.velocity.y;
        s.position.y = height - BOUNDARY_INSET;
    } else if s.position.y < 0.0 {
        s.velocity.y = -s.velocity.y;
        s.position.y = BOUNDARY_INSET;
    }

    if s.position.x > field.width {
        s.velocity.x = -s.velocity.x;
        s.position.x = field.width - BOUNDARY_INSET;
    } else if s.position.x < 0.0 {
        s.velocity.x = -s.velocity.x;
        s.position.x = BOUNDARY_INSET;
    }

    s
}

fn wrap(field: &Field, mut s: Kinematics) -> Kinematics {
    let height = field.height();

    if s.position.y > height {
        s.position.y = 0.0;
    } else if s.position.y < 0.0 {
        s.position.y = height;
    }

    if s.position.x > field.width {
        s.position.x = 0.0;
    } else if s.position.x < 0.0 {
        s.position.x = field.width;
    }

    s
}
