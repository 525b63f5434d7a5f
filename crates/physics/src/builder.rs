//! # World Builder
//!
//! Shortcuts for adding bodies with default properties to a [`World`].

use crate::body::{Body, BodyId};
use crate::error::PhysicsError;
use crate::types::Vector2;
use crate::World;

impl World {
    /// Add a dynamic circle with default mass and material.
    pub fn add_circle(&mut self, center: Vector2, radius: f64) -> Result<BodyId, PhysicsError> {
        Ok(self.add_body(Body::circle(center, radius)?))
    }

    /// Add a dynamic axis-aligned rectangle with default mass and material.
    pub fn add_rectangle(
        &mut self,
        center: Vector2,
        width: f64,
        height: f64,
    ) -> Result<BodyId, PhysicsError> {
        Ok(self.add_body(Body::rectangle(center, width, height)?))
    }

    /// Add a dynamic convex polygon with default mass and material.
    pub fn add_polygon(&mut self, vertices: Vec<Vector2>) -> Result<BodyId, PhysicsError> {
        Ok(self.add_body(Body::polygon(vertices)?))
    }
}
