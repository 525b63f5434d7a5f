//! # Physics Integration
//!
//! This module advances bodies through time once collisions have been
//! resolved.

use crate::body::Body;

/// Advances a single body by `dt`.
pub trait Integrator: Send + Sync {
    fn integrate(&self, body: &mut Body, dt: f64);
}

/// Semi-implicit (symplectic) Euler: velocity is updated first and the new
/// velocity moves the body. Kinematic bodies are left untouched.
///
/// Angular velocity accumulates angular acceleration, but the shape is not
/// rotated by it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn integrate(&self, body: &mut Body, dt: f64) {
        if body.is_kinematic() {
            return;
        }
        body.velocity += body.acceleration * dt;
        body.angular_velocity += body.angular_acceleration * dt;
        let delta = body.velocity * dt;
        body.translate(delta);
    }
}
