//! # Rigid Bodies
//!
//! A [`Body`] couples one exclusively owned [`Shape`] with its physical
//! state. Angular velocity and acceleration are tracked but never rotate the
//! shape on their own; only an explicit [`Body::rotate`] changes
//! orientation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::PhysicsError;
use crate::shapes::Shape;
use crate::types::Vector2;

static NEXT_BODY_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique body identity, stable for the lifetime of the body.
///
/// Renderers key their per-body style tables by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(u64);

impl BodyId {
    fn next() -> Self {
        Self(NEXT_BODY_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Surface properties of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    friction: f64,
    restitution: f64,
}

impl Material {
    pub fn new(friction: f64, restitution: f64) -> Result<Self, PhysicsError> {
        Ok(Self {
            friction: validate_friction(friction)?,
            restitution: validate_restitution(restitution)?,
        })
    }

    /// Perfectly elastic, frictionless.
    #[must_use]
    pub fn bouncy() -> Self {
        Self {
            friction: 0.0,
            restitution: 1.0,
        }
    }

    /// Perfectly inelastic.
    #[must_use]
    pub fn inelastic() -> Self {
        Self {
            friction: 0.5,
            restitution: 0.0,
        }
    }

    /// Stored for callers; the impulse solver does not apply friction.
    #[must_use]
    pub fn friction(&self) -> f64 {
        self.friction
    }

    #[must_use]
    pub fn restitution(&self) -> f64 {
        self.restitution
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::bouncy()
    }
}

fn validate_restitution(restitution: f64) -> Result<f64, PhysicsError> {
    if (0.0..=1.0).contains(&restitution) {
        Ok(restitution)
    } else {
        Err(PhysicsError::InvalidRestitution(restitution))
    }
}

fn validate_friction(friction: f64) -> Result<f64, PhysicsError> {
    if friction >= 0.0 && friction.is_finite() {
        Ok(friction)
    } else {
        Err(PhysicsError::InvalidFriction(friction))
    }
}

fn validate_mass(mass: f64) -> Result<f64, PhysicsError> {
    // Positive infinity is allowed and behaves as an immovable body.
    if mass > 0.0 {
        Ok(mass)
    } else {
        Err(PhysicsError::InvalidMass(mass))
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    name: String,
    shape: Shape,
    mass: f64,
    kinematic: bool,
    material: Material,
    pub velocity: Vector2,
    pub acceleration: Vector2,
    pub angular_velocity: f64,
    pub angular_acceleration: f64,
}

impl Body {
    /// Dynamic body with unit mass, at rest, with the default material.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        let id = BodyId::next();
        Self {
            id,
            name: format!("body-{id}"),
            shape,
            mass: 1.0,
            kinematic: false,
            material: Material::default(),
            velocity: Vector2::ZERO,
            acceleration: Vector2::ZERO,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
        }
    }

    pub fn circle(center: Vector2, radius: f64) -> Result<Self, PhysicsError> {
        Shape::circle(center, radius).map(Self::new)
    }

    pub fn rectangle(center: Vector2, width: f64, height: f64) -> Result<Self, PhysicsError> {
        Shape::rectangle(center, width, height).map(Self::new)
    }

    pub fn polygon(vertices: Vec<Vector2>) -> Result<Self, PhysicsError> {
        Shape::polygon(vertices).map(Self::new)
    }

    pub fn with_mass(mut self, mass: f64) -> Result<Self, PhysicsError> {
        self.set_mass(mass)?;
        Ok(self)
    }

    pub fn with_restitution(mut self, restitution: f64) -> Result<Self, PhysicsError> {
        self.set_restitution(restitution)?;
        Ok(self)
    }

    pub fn with_friction(mut self, friction: f64) -> Result<Self, PhysicsError> {
        self.set_friction(friction)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    #[must_use]
    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    #[must_use]
    pub fn with_acceleration(mut self, acceleration: Vector2) -> Self {
        self.acceleration = acceleration;
        self
    }

    #[must_use]
    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    #[must_use]
    pub fn with_angular_acceleration(mut self, angular_acceleration: f64) -> Self {
        self.angular_acceleration = angular_acceleration;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the body as immovable: infinite effective mass, skipped by the
    /// integrator and by positional correction.
    #[must_use]
    pub fn kinematic(mut self) -> Self {
        self.kinematic = true;
        self
    }

    #[must_use]
    pub fn id(&self) -> BodyId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f64) -> Result<(), PhysicsError> {
        self.mass = validate_mass(mass)?;
        Ok(())
    }

    /// `0` for kinematic bodies and bodies of infinite mass.
    #[must_use]
    pub fn inverse_mass(&self) -> f64 {
        if self.kinematic {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    #[must_use]
    pub fn is_kinematic(&self) -> bool {
        self.kinematic
    }

    pub fn set_kinematic(&mut self, kinematic: bool) {
        self.kinematic = kinematic;
    }

    #[must_use]
    pub fn material(&self) -> Material {
        self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    #[must_use]
    pub fn restitution(&self) -> f64 {
        self.material.restitution
    }

    pub fn set_restitution(&mut self, restitution: f64) -> Result<(), PhysicsError> {
        self.material.restitution = validate_restitution(restitution)?;
        Ok(())
    }

    #[must_use]
    pub fn friction(&self) -> f64 {
        self.material.friction
    }

    pub fn set_friction(&mut self, friction: f64) -> Result<(), PhysicsError> {
        self.material.friction = validate_friction(friction)?;
        Ok(())
    }

    #[must_use]
    pub fn position(&self) -> Vector2 {
        self.shape.centroid()
    }

    pub fn translate(&mut self, delta: Vector2) {
        self.shape.translate(delta);
    }

    pub fn rotate(&mut self, angle: f64) {
        self.shape.rotate(angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball() -> Body {
        Body::circle(Vector2::ZERO, 1.0).unwrap()
    }

    #[test]
    fn defaults_match_a_unit_bouncy_body() {
        let body = ball();
        assert_eq!(body.mass(), 1.0);
        assert_eq!(body.restitution(), 1.0);
        assert_eq!(body.friction(), 0.0);
        assert!(!body.is_kinematic());
        assert_eq!(body.name(), format!("body-{}", body.id()));
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(ball().id(), ball().id());
    }

    #[test]
    fn restitution_outside_unit_interval_is_rejected() {
        assert_eq!(
            ball().with_restitution(1.5).unwrap_err(),
            PhysicsError::InvalidRestitution(1.5)
        );
        assert!(ball().with_restitution(-0.1).is_err());
        assert!(ball().with_restitution(f64::NAN).is_err());
        let mut body = ball();
        assert!(body.set_restitution(0.3).is_ok());
        assert!(body.set_restitution(2.0).is_err());
        assert_eq!(body.restitution(), 0.3);
    }

    #[test]
    fn zero_mass_is_rejected() {
        assert_eq!(ball().with_mass(0.0).unwrap_err(), PhysicsError::InvalidMass(0.0));
        assert!(ball().with_mass(-2.0).is_err());
        assert!(ball().with_mass(f64::NAN).is_err());
    }

    #[test]
    fn infinite_mass_has_zero_inverse() {
        let body = ball().with_mass(f64::INFINITY).unwrap();
        assert_eq!(body.inverse_mass(), 0.0);
    }

    #[test]
    fn kinematic_body_has_zero_inverse_mass() {
        let body = ball().with_mass(3.0).unwrap().kinematic();
        assert_eq!(body.inverse_mass(), 0.0);
        assert_eq!(body.mass(), 3.0);
    }

    #[test]
    fn material_validates_both_coefficients() {
        assert!(Material::new(0.2, 0.5).is_ok());
        assert_eq!(Material::new(-1.0, 0.5).unwrap_err(), PhysicsError::InvalidFriction(-1.0));
        assert_eq!(Material::new(0.2, 1.01).unwrap_err(), PhysicsError::InvalidRestitution(1.01));
    }
}
