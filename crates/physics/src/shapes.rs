//! # Shapes
//!
//! Convex geometry owned by a [`Body`](crate::Body). Derived attributes
//! (centroid, area, bounding box) are recomputed eagerly whenever the
//! geometry is written, so reads are always plain field accesses.

use std::f64::consts::{PI, TAU};
use std::ops::{Range, RangeInclusive};

use rand::Rng;

use crate::collision::{Projectable, Projection};
use crate::error::PhysicsError;
use crate::types::{Aabb, Vector2};

/// Discriminant of a [`Shape`], handy for renderers and dispatch tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Polygon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: Vector2,
    radius: f64,
}

impl Circle {
    pub fn new(center: Vector2, radius: f64) -> Result<Self, PhysicsError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(PhysicsError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(PhysicsError::NonFiniteCoordinate);
        }
        Ok(Self { center, radius })
    }

    #[must_use]
    pub fn center(&self) -> Vector2 {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[must_use]
    pub fn aabb(&self) -> Aabb {
        let r = Vector2::new(self.radius, self.radius);
        Aabb::new(self.center - r, self.center + r)
    }

    pub fn translate(&mut self, delta: Vector2) {
        self.center += delta;
    }
}

/// Convex polygon with counter-clockwise winding.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Vector2>,
    centroid: Vector2,
    area: f64,
    aabb: Aabb,
}

impl ConvexPolygon {
    /// Validates and builds a polygon. Clockwise input is reversed so the
    /// stored winding is always counter-clockwise.
    pub fn new(mut vertices: Vec<Vector2>) -> Result<Self, PhysicsError> {
        if vertices.len() < 3 {
            return Err(PhysicsError::DegeneratePolygon(vertices.len()));
        }
        if !vertices.iter().all(|v| v.is_finite()) {
            return Err(PhysicsError::NonFiniteCoordinate);
        }
        if !is_convex(&vertices) {
            return Err(PhysicsError::NonConvexPolygon);
        }
        if signed_area(&vertices) < 0.0 {
            vertices.reverse();
        }

        let area = signed_area(&vertices);
        let centroid = polygon_centroid(&vertices, area);
        let aabb = Aabb::from_points(vertices.iter().copied()).ok_or(PhysicsError::DegeneratePolygon(0))?;
        Ok(Self {
            vertices,
            centroid,
            area,
            aabb,
        })
    }

    /// Axis-aligned rectangle centred on `center`.
    pub fn rectangle(center: Vector2, width: f64, height: f64) -> Result<Self, PhysicsError> {
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            return Err(PhysicsError::InvalidExtents { width, height });
        }
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::new(vec![
            center + Vector2::new(-hw, -hh),
            center + Vector2::new(hw, -hh),
            center + Vector2::new(hw, hh),
            center + Vector2::new(-hw, hh),
        ])
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Raw vertex data as `[x0, y0, x1, y1, ...]` in native-endian `f64`.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[must_use]
    pub fn centroid(&self) -> Vector2 {
        self.centroid
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[must_use]
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Outward unit normal of every edge `(v[i], v[i + 1])`, in vertex order.
    pub fn edge_normals(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.edges().filter_map(|(a, b)| (b - a).perp().try_normalize())
    }

    /// Vertex furthest along `direction`. Ties keep the first vertex.
    #[must_use]
    pub fn support(&self, direction: Vector2) -> Vector2 {
        self.vertices
            .iter()
            .copied()
            .fold((f64::NEG_INFINITY, self.vertices[0]), |(best, best_v), v| {
                let d = v.dot(direction);
                if d > best {
                    (d, v)
                } else {
                    (best, best_v)
                }
            })
            .1
    }

    pub fn translate(&mut self, delta: Vector2) {
        for v in &mut self.vertices {
            *v += delta;
        }
        self.centroid += delta;
        self.aabb = self.aabb.translated(delta);
    }

    /// Rotates every vertex about the centroid. The centroid and area are
    /// invariant under rotation; only the bounding box is recomputed.
    pub fn rotate(&mut self, angle: f64) {
        let c = self.centroid;
        for v in &mut self.vertices {
            *v = c + (*v - c).rotate(angle);
        }
        if let Some(aabb) = Aabb::from_points(self.vertices.iter().copied()) {
            self.aabb = aabb;
        }
    }

    fn edges(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// True when the cross products of consecutive edges are all strictly
/// positive or all strictly negative. Collinear runs fail the test.
#[must_use]
pub fn is_convex(vertices: &[Vector2]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let crosses = (0..n).map(|i| {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % n];
        let p3 = vertices[(i + 2) % n];
        (p2 - p1).cross(p3 - p2)
    });
    let (mut positive, mut negative) = (0_usize, 0_usize);
    for cross in crosses {
        if cross > 0.0 {
            positive += 1;
        } else if cross < 0.0 {
            negative += 1;
        }
    }
    positive == n || negative == n
}

/// Shoelace area; positive for counter-clockwise winding.
fn signed_area(vertices: &[Vector2]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].cross(vertices[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}

fn polygon_centroid(vertices: &[Vector2], area: f64) -> Vector2 {
    let n = vertices.len();
    let sum = (0..n).fold(Vector2::ZERO, |acc, i| {
        let (a, b) = (vertices[i], vertices[(i + 1) % n]);
        acc + (a + b) * a.cross(b)
    });
    sum / (6.0 * area)
}

/// Geometry of a body: a closed set of convex primitives.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(ConvexPolygon),
}

impl Shape {
    pub fn circle(center: Vector2, radius: f64) -> Result<Self, PhysicsError> {
        Circle::new(center, radius).map(Self::Circle)
    }

    pub fn polygon(vertices: Vec<Vector2>) -> Result<Self, PhysicsError> {
        ConvexPolygon::new(vertices).map(Self::Polygon)
    }

    pub fn rectangle(center: Vector2, width: f64, height: f64) -> Result<Self, PhysicsError> {
        ConvexPolygon::rectangle(center, width, height).map(Self::Polygon)
    }

    /// Circle with a uniformly drawn centre inside `position_bounds` and a
    /// radius drawn from `radius`.
    pub fn random_circle<R: Rng + ?Sized>(
        rng: &mut R,
        position_bounds: Aabb,
        radius: Range<f64>,
    ) -> Result<Self, PhysicsError> {
        if radius.is_empty() || radius.start <= 0.0 {
            return Err(PhysicsError::InvalidRange("radius range must be non-empty and positive"));
        }
        let center = random_point(rng, position_bounds)?;
        Self::circle(center, rng.gen_range(radius))
    }

    /// Random convex polygon: vertices spread around an ellipse whose
    /// diameters are drawn from `extent`, jittered by at most half the
    /// angular spacing so their order (and therefore convexity) survives,
    /// then rotated by a random angle.
    pub fn random_polygon<R: Rng + ?Sized>(
        rng: &mut R,
        position_bounds: Aabb,
        extent: Range<f64>,
        vertex_count: RangeInclusive<usize>,
    ) -> Result<Self, PhysicsError> {
        if extent.is_empty() || extent.start <= 0.0 {
            return Err(PhysicsError::InvalidRange("extent range must be non-empty and positive"));
        }
        if vertex_count.is_empty() || *vertex_count.start() < 3 {
            return Err(PhysicsError::InvalidRange("vertex count range must start at 3 or more"));
        }

        let n = rng.gen_range(vertex_count);
        let semi_a = rng.gen_range(extent.clone()) / 2.0;
        let semi_b = rng.gen_range(extent) / 2.0;

        #[allow(clippy::cast_precision_loss)]
        let spacing = TAU / n as f64;
        let jitter = spacing / 2.0;
        let center = random_point(rng, position_bounds)?;

        let vertices = (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = i as f64 * spacing + rng.gen_range(-jitter..jitter);
                center + Vector2::new(semi_a * t.cos(), semi_b * t.sin())
            })
            .collect();

        let mut shape = Self::polygon(vertices)?;
        shape.rotate(rng.gen_range(0.0..TAU));
        Ok(shape)
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Polygon(_) => ShapeKind::Polygon,
        }
    }

    #[must_use]
    pub fn centroid(&self) -> Vector2 {
        match self {
            Self::Circle(c) => c.center(),
            Self::Polygon(p) => p.centroid(),
        }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Circle(c) => c.area(),
            Self::Polygon(p) => p.area(),
        }
    }

    #[must_use]
    pub fn aabb(&self) -> Aabb {
        match self {
            Self::Circle(c) => c.aabb(),
            Self::Polygon(p) => p.aabb(),
        }
    }

    /// Outward edge normals; circles have none.
    #[must_use]
    pub fn edge_normals(&self) -> Vec<Vector2> {
        match self {
            Self::Circle(_) => Vec::new(),
            Self::Polygon(p) => p.edge_normals().collect(),
        }
    }

    #[must_use]
    pub fn project(&self, axis: Vector2) -> Projection {
        match self {
            Self::Circle(c) => c.project(axis),
            Self::Polygon(p) => p.project(axis),
        }
    }

    pub fn translate(&mut self, delta: Vector2) {
        match self {
            Self::Circle(c) => c.translate(delta),
            Self::Polygon(p) => p.translate(delta),
        }
    }

    /// Rotates about the centroid. A no-op for circles.
    pub fn rotate(&mut self, angle: f64) {
        if let Self::Polygon(p) = self {
            p.rotate(angle);
        }
    }

    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(c) => Some(c),
            Self::Polygon(_) => None,
        }
    }

    #[must_use]
    pub fn as_polygon(&self) -> Option<&ConvexPolygon> {
        match self {
            Self::Polygon(p) => Some(p),
            Self::Circle(_) => None,
        }
    }
}

fn random_point<R: Rng + ?Sized>(rng: &mut R, bounds: Aabb) -> Result<Vector2, PhysicsError> {
    if !(bounds.min.x <= bounds.max.x && bounds.min.y <= bounds.max.y) {
        return Err(PhysicsError::InvalidRange("position bounds are inverted"));
    }
    Ok(Vector2::new(
        rng.gen_range(bounds.min.x..=bounds.max.x),
        rng.gen_range(bounds.min.y..=bounds.max.y),
    ))
}
