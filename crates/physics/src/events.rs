//! Collision events handed back to the application after each step.

use std::fmt;

use crate::body::{Body, BodyId};
use crate::collision::Collision;
use crate::types::Vector2;

/// A resolved collision, addressed by body identity so it stays meaningful
/// after the step that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub normal: Vector2,
    pub depth: f64,
    pub contact_point: Vector2,
}

impl CollisionEvent {
    pub(crate) fn from_collision(collision: &Collision, bodies: &[Body]) -> Self {
        Self {
            body_a: bodies[collision.body_a].id(),
            body_b: bodies[collision.body_b].id(),
            normal: collision.normal,
            depth: collision.depth,
            contact_point: collision.contact_point,
        }
    }

    /// Whether `body` took part in this collision.
    #[must_use]
    pub fn involves(&self, body: BodyId) -> bool {
        self.body_a == body || self.body_b == body
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type CollisionCallback = Box<dyn FnMut(&CollisionEvent) + Send>;

struct Subscription {
    id: SubscriptionId,
    body: BodyId,
    callback: CollisionCallback,
}

/// Per-body collision callbacks, kept in registration order.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<Subscription>,
}

impl Subscribers {
    pub fn insert(&mut self, body: BodyId, callback: CollisionCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push(Subscription { id, body, callback });
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|s| s.id != id);
        self.entries.len() != before
    }

    pub fn remove_body(&mut self, body: BodyId) {
        self.entries.retain(|s| s.body != body);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Notifies the subscribers of body A, then those of body B, for every
    /// event in order.
    pub fn dispatch(&mut self, events: &[CollisionEvent]) {
        if self.entries.is_empty() {
            return;
        }
        for event in events {
            for body in [event.body_a, event.body_b] {
                for subscription in self.entries.iter_mut().filter(|s| s.body == body) {
                    (subscription.callback)(event);
                }
            }
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
