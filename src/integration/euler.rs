use crate::bodies::RigidBody;
use crate::integration::{Integrator, StepForces};

/// Simple forward Euler integrator
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerIntegrator;

impl EulerIntegrator {
    /// Creates a new Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for EulerIntegrator {
    fn integrate(&self, body: &mut RigidBody, forces: &StepForces, dt: f32) {
        if body.is_static() {
            return;
        }

        // A grabbed body moves with its target velocity right away
        let (moving_velocity, moving_angular) = match forces.velocity_override {
            Some(velocity) => (velocity, body.get_angular_velocity()),
            None => (body.get_linear_velocity(), body.get_angular_velocity()),
        };

        body.set_position(body.get_position() + moving_velocity * dt);
        body.set_rotation(body.get_rotation() + moving_angular * dt);

        let (velocity, angular_velocity) = forces.updated_velocity(body, dt);
        body.set_linear_velocity(velocity);
        body.set_angular_velocity(angular_velocity);
    }

    fn name(&self) -> &str {
        "Euler"
    }
}
