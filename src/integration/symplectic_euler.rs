use crate::bodies::RigidBody;
use crate::integration::{Integrator, StepForces};

/// Symplectic Euler integrator (semi-implicit Euler).
///
/// Velocity is updated first and the position moves with the new velocity,
/// which keeps orbits and pendulums from gaining energy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymplecticEulerIntegrator;

impl SymplecticEulerIntegrator {
    /// Creates a new Symplectic Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for SymplecticEulerIntegrator {
    fn integrate(&self, body: &mut RigidBody, forces: &StepForces, dt: f32) {
        if body.is_static() {
            return;
        }

        let (velocity, angular_velocity) = forces.updated_velocity(body, dt);
        body.set_linear_velocity(velocity);
        body.set_angular_velocity(angular_velocity);

        body.set_position(body.get_position() + velocity * dt);
        body.set_rotation(body.get_rotation() + angular_velocity * dt);
    }

    fn name(&self) -> &str {
        "SymplecticEuler"
    }
}
