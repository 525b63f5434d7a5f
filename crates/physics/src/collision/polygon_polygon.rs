//! Polygon-polygon collision detection

use super::{sat, Collision};
use crate::shapes::ConvexPolygon;

/// Detect collision between two convex polygons using both polygons' edge
/// normals as candidate axes.
///
/// The contact point is the incident vertex: when the separating face
/// belongs to A it is the vertex of B deepest inside A, otherwise the vertex
/// of A deepest inside B.
pub fn detect_polygon_polygon_collision(
    index_a: usize,
    polygon_a: &ConvexPolygon,
    index_b: usize,
    polygon_b: &ConvexPolygon,
) -> Option<Collision> {
    let a_axes = polygon_a.vertices().len();
    let axes = polygon_a.edge_normals().chain(polygon_b.edge_normals());
    let result = sat(polygon_a, polygon_b, axes)?;

    let contact_point = if result.axis_index < a_axes {
        polygon_b.support(-result.normal)
    } else {
        polygon_a.support(result.normal)
    };

    Some(Collision {
        body_a: index_a,
        body_b: index_b,
        normal: result.normal,
        depth: result.depth,
        contact_point,
    })
}
