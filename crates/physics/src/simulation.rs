//! # Physics Simulation Core
//!
//! [`World`] owns the bodies and one instance of each pipeline stage. A
//! call to [`World::step`] runs, in order: broad phase, narrow phase,
//! collision response, integration, bounds culling and finally the
//! dispatch of collision events to subscribers. Bodies culled in a step
//! still receive that step's events before their subscriptions are
//! dropped.
//!
//! Bodies are processed in insertion order throughout, so identical worlds
//! stepped with identical time steps end in identical states.

use crate::body::{Body, BodyId};
use crate::collision::{
    AabbBroadPhase, BroadPhase, Collision, ImpulseSolver, NarrowPhase, SatNarrowPhase, Solver,
};
use crate::error::PhysicsError;
use crate::events::{CollisionEvent, Subscribers, SubscriptionId};
use crate::integrator::{Integrator, SemiImplicitEuler};
use crate::types::Aabb;

/// World-level settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldConfig {
    /// Bodies whose centroid leaves this region are removed after a step.
    pub bounds: Option<Aabb>,
}

pub struct World {
    config: WorldConfig,
    bodies: Vec<Body>,
    broad_phase: Box<dyn BroadPhase>,
    narrow_phase: Box<dyn NarrowPhase>,
    solver: Box<dyn Solver>,
    integrator: Box<dyn Integrator>,
    subscribers: Subscribers,
}

impl World {
    /// Create an empty world with the default pipeline and no bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    #[must_use]
    pub fn with_config(config: WorldConfig) -> Self {
        Self::with_strategies(
            config,
            Box::new(AabbBroadPhase),
            Box::new(SatNarrowPhase),
            Box::new(ImpulseSolver::new()),
            Box::new(SemiImplicitEuler),
        )
    }

    /// Create an empty world with custom pipeline stages.
    #[must_use]
    pub fn with_strategies(
        config: WorldConfig,
        broad_phase: Box<dyn BroadPhase>,
        narrow_phase: Box<dyn NarrowPhase>,
        solver: Box<dyn Solver>,
        integrator: Box<dyn Integrator>,
    ) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            broad_phase,
            narrow_phase,
            solver,
            integrator,
            subscribers: Subscribers::default(),
        }
    }

    /// Append a body; it is processed after every body already present.
    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = body.id();
        self.bodies.push(body);
        id
    }

    /// Remove a body along with its collision subscriptions.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let index = self.index_of(id)?;
        self.subscribers.remove_body(id);
        Some(self.bodies.remove(index))
    }

    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id() == id)
    }

    /// Bodies in insertion order.
    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> WorldConfig {
        self.config
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        self.config.bounds
    }

    pub fn set_bounds(&mut self, bounds: Option<Aabb>) {
        self.config.bounds = bounds;
    }

    /// Register `callback` to run for every collision involving `body`.
    pub fn subscribe<F>(&mut self, body: BodyId, callback: F) -> Result<SubscriptionId, PhysicsError>
    where
        F: FnMut(&CollisionEvent) + Send + 'static,
    {
        if self.index_of(body).is_none() {
            return Err(PhysicsError::UnknownBody(body));
        }
        Ok(self.subscribers.insert(body, Box::new(callback)))
    }

    /// Returns `false` if the subscription did not exist.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Broad-phase candidate pairs for the current state.
    #[must_use]
    pub fn candidate_pairs(&self) -> Vec<(usize, usize)> {
        self.broad_phase.candidate_pairs(&self.bodies)
    }

    /// Collisions the next step would resolve, without resolving them.
    #[must_use]
    pub fn detect(&self) -> Vec<Collision> {
        let pairs = self.candidate_pairs();
        self.narrow_phase.collisions(&self.bodies, &pairs)
    }

    /// Advance the world by `dt` seconds.
    ///
    /// With `dt == 0` nothing is integrated, but bodies that already
    /// overlap are still separated and exchange impulses.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidTimeStep`] if `dt` is negative or not
    /// finite; the world is left untouched in that case.
    pub fn step(&mut self, dt: f64) -> Result<Vec<CollisionEvent>, PhysicsError> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(PhysicsError::InvalidTimeStep(dt));
        }

        // 1. Detect
        let pairs = self.broad_phase.candidate_pairs(&self.bodies);
        let collisions = self.narrow_phase.collisions(&self.bodies, &pairs);
        let events: Vec<_> = collisions
            .iter()
            .map(|c| CollisionEvent::from_collision(c, &self.bodies))
            .collect();

        // 2. Resolve
        self.solver.solve(&mut self.bodies, &collisions, dt);

        // 3. Integrate
        for body in &mut self.bodies {
            self.integrator.integrate(body, dt);
        }

        // 4. Cull
        let culled = self.cull_out_of_bounds();

        tracing::debug!(
            dt,
            bodies = self.bodies.len(),
            candidates = pairs.len(),
            collisions = collisions.len(),
            culled = culled.len(),
            "world step"
        );

        // Culled bodies still hear about the collisions of their last step.
        self.subscribers.dispatch(&events);
        for &id in &culled {
            self.subscribers.remove_body(id);
        }
        Ok(events)
    }

    fn cull_out_of_bounds(&mut self) -> Vec<BodyId> {
        let Some(bounds) = self.config.bounds else {
            return Vec::new();
        };

        let mut removed = Vec::new();
        self.bodies.retain(|body| {
            let inside = bounds.contains(body.position());
            if !inside {
                removed.push(body.id());
            }
            inside
        });
        if !removed.is_empty() {
            tracing::debug!(count = removed.len(), "culled bodies outside world bounds");
        }
        removed
    }

    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id() == id)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("config", &self.config)
            .field("bodies", &self.bodies)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}
