#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc, clippy::missing_panics_doc)]
//! # 2D Rigid-Body Physics
//!
//! A small, deterministic 2D physics core: circles and convex polygons,
//! collision detection with the Separating Axis Theorem, impulse-based
//! collision response and semi-implicit Euler integration.
//!
//! ## Key Components
//!
//! -   **Geometry:** [`Vector2`] and [`Aabb`] in [`types`]; [`Shape`],
//!     [`Circle`] and [`ConvexPolygon`] in [`shapes`].
//! -   **Bodies:** [`Body`] owns one shape plus its physical state and
//!     [`Material`].
//! -   **Pipeline:** the [`BroadPhase`], [`NarrowPhase`], [`Solver`] and
//!     [`Integrator`] traits, with [`AabbBroadPhase`], [`SatNarrowPhase`],
//!     [`ImpulseSolver`] and [`SemiImplicitEuler`] as the defaults.
//! -   **Simulation:** [`World`] owns the bodies and runs the pipeline once
//!     per [`World::step`], returning the [`CollisionEvent`]s it resolved.
//!
//! ## Usage
//!
//! ```rust
//! use physics2d::{Body, Vector2, World};
//!
//! let mut world = World::new();
//! world.add_body(Body::rectangle(Vector2::new(0.0, -1.0), 20.0, 1.0)?.kinematic());
//! let ball = world.add_body(
//!     Body::circle(Vector2::new(0.0, 2.0), 0.5)?
//!         .with_restitution(0.5)?
//!         .with_acceleration(Vector2::new(0.0, -9.81)),
//! );
//!
//! for _ in 0..120 {
//!     for event in world.step(1.0 / 60.0)? {
//!         assert!(event.depth > 0.0);
//!     }
//! }
//! assert!(world.body(ball).is_some());
//! # Ok::<(), physics2d::PhysicsError>(())
//! ```

pub mod body;
pub mod builder;
pub mod collision;
pub mod error;
pub mod events;
pub mod integrator;
pub mod shapes;
pub mod simulation;
pub mod types;

pub use body::{Body, BodyId, Material};
pub use collision::{
    AabbBroadPhase, BroadPhase, Collision, ImpulseSolver, NarrowPhase, SatNarrowPhase, Solver,
    SolverConfig,
};
pub use error::PhysicsError;
pub use events::{CollisionEvent, SubscriptionId};
pub use integrator::{Integrator, SemiImplicitEuler};
pub use shapes::{Circle, ConvexPolygon, Shape, ShapeKind};
pub use simulation::{World, WorldConfig};
pub use types::{Aabb, Vector2};
