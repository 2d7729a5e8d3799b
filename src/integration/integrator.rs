use crate::bodies::RigidBody;
use crate::math::Vector2;

/// Per-body inputs for one integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepForces {
    /// Acceleration from the gravity field (zero when gravity is off)
    pub acceleration: Vector2,

    /// Multiplicative velocity damping in `[0, 1]` (zero when friction is off)
    pub damping: f32,

    /// Replaces the velocity update entirely, used for the grabbed body
    pub velocity_override: Option<Vector2>,
}

impl StepForces {
    /// Computes the velocity the body should have before moving
    pub fn updated_velocity(&self, body: &RigidBody, dt: f32) -> (Vector2, f32) {
        match self.velocity_override {
            Some(velocity) => (velocity, body.get_angular_velocity()),
            None => {
                let keep = 1.0 - self.damping;
                let velocity = (body.get_linear_velocity() + self.acceleration * dt) * keep;
                (velocity, body.get_angular_velocity() * keep)
            }
        }
    }
}

/// Trait for numerical integration schemes
pub trait Integrator: Send + Sync {
    /// Advances a dynamic body over a time step
    fn integrate(&self, body: &mut RigidBody, forces: &StepForces, dt: f32);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
