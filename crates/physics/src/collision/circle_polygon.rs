//! Circle-polygon collision detection

use super::{sat, Collision};
use crate::shapes::{Circle, ConvexPolygon};

/// Detect collision between a circle and a convex polygon.
///
/// The circle is always body A, so the normal points from the circle into
/// the polygon. Besides the polygon's edge normals, the axis from the
/// circle centre to the nearest polygon vertex is tested; it is dropped
/// when the centre sits exactly on that vertex.
pub fn detect_circle_polygon_collision(
    circle_index: usize,
    circle: &Circle,
    polygon_index: usize,
    polygon: &ConvexPolygon,
) -> Option<Collision> {
    let center = circle.center();
    let nearest_vertex = polygon
        .vertices()
        .iter()
        .copied()
        .min_by(|a, b| {
            (*a - center)
                .length_squared()
                .total_cmp(&(*b - center).length_squared())
        })?;

    let axes = polygon
        .edge_normals()
        .chain((nearest_vertex - center).try_normalize());
    let result = sat(circle, polygon, axes)?;

    Some(Collision {
        body_a: circle_index,
        body_b: polygon_index,
        normal: result.normal,
        depth: result.depth,
        contact_point: center + result.normal * (circle.radius() - result.depth),
    })
}
