//! Circle-circle collision detection

use super::Collision;
use crate::shapes::Circle;

/// Detect collision between two circles.
///
/// Coincident centres leave the normal undefined, so such a pair is
/// reported as no collision rather than producing a NaN normal.
pub fn detect_circle_circle_collision(
    index_a: usize,
    circle_a: &Circle,
    index_b: usize,
    circle_b: &Circle,
) -> Option<Collision> {
    let delta = circle_b.center() - circle_a.center();
    let distance = delta.length();
    let radii = circle_a.radius() + circle_b.radius();

    if distance >= radii {
        return None;
    }

    let Some(normal) = delta.try_normalize() else {
        tracing::warn!(index_a, index_b, "coincident circle centres, skipping pair");
        return None;
    };

    Some(Collision {
        body_a: index_a,
        body_b: index_b,
        normal,
        depth: radii - distance,
        contact_point: circle_a.center() + normal * circle_a.radius(),
    })
}
