use crate::core::{BodyHandle, ConstraintHandle};
use crate::math::Vector2;
use std::collections::VecDeque;

/// A resolved contact between two bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// The first body in the collision (earlier in registry order)
    pub body_a: BodyHandle,

    /// The second body in the collision
    pub body_b: BodyHandle,

    /// Unit normal pointing from `body_a` to `body_b`
    pub normal: Vector2,

    /// Penetration depth before de-penetration
    pub overlap: f32,

    /// Normal impulse magnitude, zero when the bodies were already separating
    pub impulse: f32,
}

/// Types of body events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEventType {
    /// A body has been added to the registry
    Added,

    /// A body has been removed from the registry
    Removed,

    /// A body has been picked up by the pointer
    Grabbed,

    /// A grabbed body has been let go
    Released,

    /// A body has been made static
    Frozen,

    /// A static body has been made dynamic again
    Unfrozen,
}

/// An event related to a single body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyEvent {
    /// The type of body event
    pub event_type: BodyEventType,

    /// The body that the event refers to
    pub body: BodyHandle,
}

/// Types of constraint events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintEventType {
    Added,
    Removed,
}

/// An event related to a single constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintEvent {
    pub event_type: ConstraintEventType,
    pub constraint: ConstraintHandle,
}

/// A queue of simulation events.
///
/// Collision events are cleared at the start of every frame; body and
/// constraint events stay queued until drained.
#[derive(Debug, Default)]
pub struct EventQueue {
    collision_events: VecDeque<CollisionEvent>,
    body_events: VecDeque<BodyEvent>,
    constraint_events: VecDeque<ConstraintEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collision event to the queue
    pub fn add_collision_event(&mut self, event: CollisionEvent) {
        self.collision_events.push_back(event);
    }

    /// Adds a body event to the queue
    pub fn add_body_event(&mut self, event_type: BodyEventType, body: BodyHandle) {
        self.body_events.push_back(BodyEvent { event_type, body });
    }

    /// Adds a constraint event to the queue
    pub fn add_constraint_event(&mut self, event_type: ConstraintEventType, constraint: ConstraintHandle) {
        self.constraint_events.push_back(ConstraintEvent { event_type, constraint });
    }

    /// Gets the next collision event from the queue
    pub fn next_collision_event(&mut self) -> Option<CollisionEvent> {
        self.collision_events.pop_front()
    }

    /// Gets the next body event from the queue
    pub fn next_body_event(&mut self) -> Option<BodyEvent> {
        self.body_events.pop_front()
    }

    /// Gets the next constraint event from the queue
    pub fn next_constraint_event(&mut self) -> Option<ConstraintEvent> {
        self.constraint_events.pop_front()
    }

    /// Returns the queued collision events
    pub fn collision_events(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events.iter()
    }

    /// Returns the queued body events
    pub fn body_events(&self) -> impl Iterator<Item = &BodyEvent> {
        self.body_events.iter()
    }

    /// Returns the queued constraint events
    pub fn constraint_events(&self) -> impl Iterator<Item = &ConstraintEvent> {
        self.constraint_events.iter()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.collision_events.is_empty() && self.body_events.is_empty() && self.constraint_events.is_empty()
    }

    /// Drops the collision events of the previous frame
    pub fn clear_collisions(&mut self) {
        self.collision_events.clear();
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.collision_events.clear();
        self.body_events.clear();
        self.constraint_events.clear();
    }

    /// Gets all body events of a specific type
    pub fn get_body_events_of_type(&self, event_type: BodyEventType) -> Vec<&BodyEvent> {
        self.body_events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Gets all collision events involving a specific body
    pub fn get_collision_events_for_body(&self, body: BodyHandle) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.body_a == body || e.body_b == body)
            .collect()
    }
}
