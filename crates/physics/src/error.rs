use thiserror::Error;

use crate::body::BodyId;

/// Errors reported by constructors, mutators and the simulation step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),
    #[error("polygon vertices are not convex")]
    NonConvexPolygon,
    #[error("restitution must lie in [0, 1], got {0}")]
    InvalidRestitution(f64),
    #[error("friction coefficient must be finite and non-negative, got {0}")]
    InvalidFriction(f64),
    #[error("shape coordinates must be finite")]
    NonFiniteCoordinate,
    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
    #[error("rectangle extents must be finite and positive, got {width} x {height}")]
    InvalidExtents { width: f64, height: f64 },
    #[error("mass must be positive, got {0}")]
    InvalidMass(f64),
    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f64),
    #[error("invalid range: {0}")]
    InvalidRange(&'static str),
    #[error("no body with id {0} in this world")]
    UnknownBody(BodyId),
}
