//! Narrow phase: routes each candidate pair to the exact test for its
//! shape combination.

use super::{
    detect_circle_circle_collision, detect_circle_polygon_collision,
    detect_polygon_polygon_collision, Collision,
};
use crate::body::Body;
use crate::shapes::Shape;

/// Turns candidate pairs into exact collisions.
pub trait NarrowPhase: Send + Sync {
    /// Exact test for a single pair of bodies.
    fn detect(&self, bodies: &[Body], index_a: usize, index_b: usize) -> Option<Collision>;

    /// Runs [`detect`](Self::detect) over every pair, preserving pair order.
    fn collisions(&self, bodies: &[Body], pairs: &[(usize, usize)]) -> Vec<Collision> {
        pairs
            .iter()
            .filter_map(|&(a, b)| self.detect(bodies, a, b))
            .collect()
    }
}

/// Separating Axis Theorem for every combination of circles and convex
/// polygons.
#[derive(Debug, Default, Clone, Copy)]
pub struct SatNarrowPhase;

impl NarrowPhase for SatNarrowPhase {
    fn detect(&self, bodies: &[Body], index_a: usize, index_b: usize) -> Option<Collision> {
        match (bodies[index_a].shape(), bodies[index_b].shape()) {
            (Shape::Circle(a), Shape::Circle(b)) => {
                detect_circle_circle_collision(index_a, a, index_b, b)
            }
            (Shape::Circle(circle), Shape::Polygon(polygon)) => {
                detect_circle_polygon_collision(index_a, circle, index_b, polygon)
            }
            (Shape::Polygon(polygon), Shape::Circle(circle)) => {
                detect_circle_polygon_collision(index_b, circle, index_a, polygon)
            }
            (Shape::Polygon(a), Shape::Polygon(b)) => {
                detect_polygon_polygon_collision(index_a, a, index_b, b)
            }
        }
    }
}
