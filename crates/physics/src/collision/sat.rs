//! Separating Axis Theorem over an arbitrary axis set.

use crate::shapes::{Circle, ConvexPolygon};
use crate::types::Vector2;

/// Extent of a shape projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
}

impl Projection {
    /// Length of the shared interval; zero or negative when the
    /// projections are disjoint or merely touch.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> f64 {
        self.max.min(other.max) - self.min.max(other.min)
    }
}

/// Anything the SAT routine can project and orient.
pub trait Projectable {
    /// Projects onto `axis`, scaled by `1 / |axis|`.
    fn project(&self, axis: Vector2) -> Projection;

    fn centroid(&self) -> Vector2;
}

impl Projectable for Circle {
    fn project(&self, axis: Vector2) -> Projection {
        let center = self.center().dot(axis) / axis.length();
        Projection {
            min: center - self.radius(),
            max: center + self.radius(),
        }
    }

    fn centroid(&self) -> Vector2 {
        self.center()
    }
}

impl Projectable for ConvexPolygon {
    fn project(&self, axis: Vector2) -> Projection {
        let length = axis.length();
        self.vertices().iter().fold(
            Projection {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |p, v| {
                let d = v.dot(axis) / length;
                Projection {
                    min: p.min.min(d),
                    max: p.max.max(d),
                }
            },
        )
    }

    fn centroid(&self) -> Vector2 {
        ConvexPolygon::centroid(self)
    }
}

/// Minimum-overlap axis found by [`sat`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatResult {
    /// Unit normal oriented from `a` towards `b`.
    pub normal: Vector2,
    pub depth: f64,
    /// Position of the winning axis in the input sequence.
    pub axis_index: usize,
}

/// Runs the separating-axis test of `a` against `b` over `axes`.
///
/// Returns `None` as soon as one axis separates the shapes (touching counts
/// as separated) or when no usable axis was supplied. Otherwise the axis of
/// least overlap is returned, flipped if needed so that it points from the
/// centroid of `a` towards the centroid of `b`. Ties keep the earliest axis.
pub fn sat<A, B, I>(a: &A, b: &B, axes: I) -> Option<SatResult>
where
    A: Projectable + ?Sized,
    B: Projectable + ?Sized,
    I: IntoIterator<Item = Vector2>,
{
    let mut best: Option<SatResult> = None;

    for (axis_index, axis) in axes.into_iter().enumerate() {
        let Some(axis) = axis.try_normalize() else {
            continue;
        };
        let depth = a.project(axis).overlap(&b.project(axis));
        if depth <= 0.0 || depth.is_nan() {
            return None;
        }
        if best.map_or(true, |current| depth < current.depth) {
            best = Some(SatResult {
                normal: axis,
                depth,
                axis_index,
            });
        }
    }

    best.map(|mut result| {
        let direction = b.centroid() - a.centroid();
        if direction.dot(result.normal) < 0.0 {
            result.normal = -result.normal;
        }
        result
    })
}
