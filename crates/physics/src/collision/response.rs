//! Impulse-based collision response

use super::{pair_mut, Collision};
use crate::body::Body;
use crate::error::PhysicsError;

/// Resolves the collisions of one step by mutating the involved bodies.
///
/// Collisions are processed in slice order; a later collision sees the
/// positions and velocities left behind by earlier ones.
pub trait Solver: Send + Sync {
    fn solve(&self, bodies: &mut [Body], collisions: &[Collision], dt: f64);
}

/// Impulse solver tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Fraction of the penetration depth removed per collision, in `(0, 1]`.
    pub position_correction: f64,
}

impl SolverConfig {
    pub fn new(position_correction: f64) -> Result<Self, PhysicsError> {
        if !(position_correction > 0.0 && position_correction <= 1.0) {
            return Err(PhysicsError::InvalidRange(
                "position correction must lie in (0, 1]",
            ));
        }
        Ok(Self {
            position_correction,
        })
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            position_correction: 1.0,
        }
    }
}

/// Separates overlapping bodies along the contact normal, then exchanges a
/// normal impulse scaled by the mean restitution of the pair. Tangential
/// velocity is left untouched: friction coefficients are not consumed here.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImpulseSolver {
    config: SolverConfig,
}

impl ImpulseSolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Resolves a single collision between `a` and `b`.
    pub fn resolve(&self, a: &mut Body, b: &mut Body, collision: &Collision) {
        if a.is_kinematic() && b.is_kinematic() {
            tracing::warn!(
                body_a = collision.body_a,
                body_b = collision.body_b,
                "collision between two kinematic bodies reached the solver, skipping"
            );
            return;
        }

        let normal = collision.normal;

        // Move bodies so that they no longer overlap.
        let correction = normal * (collision.depth * self.config.position_correction);
        match (a.is_kinematic(), b.is_kinematic()) {
            (false, false) => {
                a.translate(-correction * 0.5);
                b.translate(correction * 0.5);
            }
            (true, _) => b.translate(correction),
            (_, true) => a.translate(-correction),
        }

        let inv_mass_a = a.inverse_mass();
        let inv_mass_b = b.inverse_mass();
        let inv_mass_sum = inv_mass_a + inv_mass_b;
        if inv_mass_sum <= 0.0 {
            return;
        }

        let restitution = (a.restitution() + b.restitution()) / 2.0;
        let impulse = -(1.0 + restitution) * (a.velocity - b.velocity).dot(normal) / inv_mass_sum;

        if !a.is_kinematic() {
            a.velocity += normal * (impulse * inv_mass_a);
        }
        if !b.is_kinematic() {
            b.velocity -= normal * (impulse * inv_mass_b);
        }

        tracing::trace!(
            body_a = collision.body_a,
            body_b = collision.body_b,
            depth = collision.depth,
            impulse,
            "resolved collision"
        );
    }
}

impl Solver for ImpulseSolver {
    fn solve(&self, bodies: &mut [Body], collisions: &[Collision], _dt: f64) {
        for collision in collisions {
            let (a, b) = pair_mut(bodies, collision.body_a, collision.body_b);
            self.resolve(a, b, collision);
        }
    }
}
