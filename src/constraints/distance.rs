use crate::constraints::Constraint;
use crate::core::{BodyHandle, BodyStorage, Storage};
use crate::bodies::RigidBody;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Smallest stiffness a constraint can have; zero would never correct anything
pub const MIN_STIFFNESS: f32 = 1.0e-3;

/// Keeps the centers of two bodies at a rest distance.
///
/// Solved as a single position-based correction per sub-step, so a stiffness
/// below one behaves like a soft spring rather than a rigid rod.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DistanceConstraint {
    /// The first body in the constraint
    body_a: BodyHandle,

    /// The second body in the constraint
    body_b: BodyHandle,

    /// The bodies involved in the constraint (cached for quick lookup)
    bodies: [BodyHandle; 2],

    /// The desired distance between the body centers
    rest_length: f32,

    /// Fraction of the error corrected per sub-step, in `(0, 1]`
    stiffness: f32,
}

impl DistanceConstraint {
    /// Creates a new distance constraint
    pub fn new(body_a: BodyHandle, body_b: BodyHandle, rest_length: f32, stiffness: f32) -> Self {
        Self {
            body_a,
            body_b,
            bodies: [body_a, body_b],
            rest_length: rest_length.max(0.0),
            stiffness: stiffness.clamp(MIN_STIFFNESS, 1.0),
        }
    }

    /// Returns the first body
    pub fn body_a(&self) -> BodyHandle {
        self.body_a
    }

    /// Returns the second body
    pub fn body_b(&self) -> BodyHandle {
        self.body_b
    }

    /// Returns the desired distance
    pub fn get_rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Sets the desired distance
    pub fn set_rest_length(&mut self, rest_length: f32) {
        self.rest_length = rest_length.max(0.0);
    }

    /// Returns the stiffness
    pub fn get_stiffness(&self) -> f32 {
        self.stiffness
    }

    /// Sets the stiffness
    pub fn set_stiffness(&mut self, stiffness: f32) {
        self.stiffness = stiffness.clamp(MIN_STIFFNESS, 1.0);
    }

    /// Returns the current distance between the two bodies, if both exist
    pub fn current_length(&self, bodies: &BodyStorage<RigidBody>) -> Option<f32> {
        let a = bodies.get(self.body_a)?;
        let b = bodies.get(self.body_b)?;
        Some(a.get_position().distance(&b.get_position()))
    }
}

impl Constraint for DistanceConstraint {
    fn constraint_type(&self) -> &'static str {
        "Distance"
    }

    fn get_bodies(&self) -> &[BodyHandle] {
        &self.bodies
    }

    fn solve_position(&mut self, bodies: &mut BodyStorage<RigidBody>, velocity_kick: f32) {
        let [body_a, body_b] = match bodies.get_pair_mut(self.body_a, self.body_b) {
            Some(pair) => pair,
            None => return,
        };

        let delta = body_b.get_position() - body_a.get_position();
        let dist = delta.length();

        // Coincident centers give no direction to correct along
        if dist == 0.0 {
            return;
        }

        let correction_factor = (dist - self.rest_length) / dist;
        let correction = delta * (correction_factor * 0.5 * self.stiffness);

        if !body_a.is_static() {
            body_a.set_position(body_a.get_position() + correction);
            body_a.set_linear_velocity(body_a.get_linear_velocity() + correction * velocity_kick);
        }

        if !body_b.is_static() {
            body_b.set_position(body_b.get_position() - correction);
            body_b.set_linear_velocity(body_b.get_linear_velocity() - correction * velocity_kick);
        }
    }
}
