//! # Collision Detection and Response
//!
//! Detection runs in two phases: a broad phase that prunes pairs whose
//! bounding boxes are disjoint, and a narrow phase that runs the exact
//! separating-axis test on what is left. The response stage turns the
//! resulting [`Collision`] records into positional corrections and impulses.

mod broad_phase;
mod circle_circle;
mod circle_polygon;
mod dispatcher;
mod polygon_polygon;
mod response;
mod sat;

pub use broad_phase::*;
pub use circle_circle::*;
pub use circle_polygon::*;
pub use dispatcher::*;
pub use polygon_polygon::*;
pub use response::*;
pub use sat::{sat, Projectable, Projection, SatResult};

use crate::body::Body;
use crate::types::Vector2;

/// One overlapping pair found during a step.
///
/// Bodies are referenced by their index into the world's body list, which
/// is only meaningful for the step that produced the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub body_a: usize,
    pub body_b: usize,
    /// Unit normal pointing from body A towards body B.
    pub normal: Vector2,
    /// Overlap along `normal`, always positive.
    pub depth: f64,
    pub contact_point: Vector2,
}

/// Mutable access to two distinct bodies of the same slice, in argument
/// order.
///
/// # Panics
///
/// Panics if `a == b` or either index is out of bounds.
pub fn pair_mut(bodies: &mut [Body], a: usize, b: usize) -> (&mut Body, &mut Body) {
    assert_ne!(a, b, "a collision pair must reference two distinct bodies");
    if a < b {
        let (head, tail) = bodies.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}
