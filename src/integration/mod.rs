mod integrator;
mod euler;
mod symplectic_euler;

pub use self::integrator::{Integrator, StepForces};
pub use self::euler::EulerIntegrator;
pub use self::symplectic_euler::SymplecticEulerIntegrator;

use crate::core::{FeatureFlags, IntegratorKind, SimulationContext, Storage};

impl IntegratorKind {
    /// Returns the integrator implementing this scheme
    pub fn integrator(self) -> &'static dyn Integrator {
        match self {
            IntegratorKind::SymplecticEuler => &SymplecticEulerIntegrator,
            IntegratorKind::Euler => &EulerIntegrator,
        }
    }
}

/// Advances every dynamic body by `dt`.
///
/// The grabbed body ignores gravity and damping; its velocity is steered
/// toward the pointer so it follows like a stiff spring.
pub fn integrate_bodies(ctx: &mut SimulationContext, dt: f32) {
    let config = &ctx.config;
    let integrator = config.integrator.integrator();
    let gravity_on = config.is_enabled(FeatureFlags::GRAVITY);
    let damping = if config.is_enabled(FeatureFlags::FRICTION) {
        config.air_friction.clamp(0.0, 1.0)
    } else {
        0.0
    };

    for (handle, body) in ctx.bodies.iter_mut() {
        if body.is_static() {
            continue;
        }

        let velocity_override = ctx.grab
            .filter(|grab| grab.body == handle)
            .map(|grab| (grab.pointer - body.get_position() + grab.offset) * config.grab_gain);

        let acceleration = if gravity_on {
            config.gravity.acceleration_at(body.get_position())
        } else {
            crate::math::Vector2::zero()
        };

        let forces = StepForces {
            acceleration,
            damping,
            velocity_override,
        };

        integrator.integrate(body, &forces, dt);
    }
}

/// Scales down any dynamic body moving faster than the configured ceiling
pub fn clamp_speeds(ctx: &mut SimulationContext) {
    let Some(max_speed) = ctx.config.max_speed else {
        return;
    };

    for (_, body) in ctx.bodies.iter_mut() {
        if !body.is_static() {
            let clamped = body.get_linear_velocity().clamp_length(max_speed);
            body.set_linear_velocity(clamped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BodyDesc, RigidBody};
    use crate::core::{GrabState, GravityType, SimulationConfig};
    use crate::math::Vector2;
    use crate::shapes::Shape;
    use approx::assert_relative_eq;

    fn context() -> SimulationContext {
        let mut config = SimulationConfig::default();
        config.gravity = GravityType::Uniform(Vector2::new(0.0, 10.0));
        config.set_feature(FeatureFlags::FRICTION, false);
        SimulationContext::new(config)
    }

    #[test]
    fn gravity_accelerates_then_moves() {
        let mut ctx = context();
        let handle = ctx.add_body(RigidBody::new_dynamic(Shape::ball(5.0), Vector2::zero()));

        integrate_bodies(&mut ctx, 0.5);

        let body = ctx.bodies.get(handle).unwrap();
        assert_relative_eq!(body.get_linear_velocity(), Vector2::new(0.0, 5.0));
        assert_relative_eq!(body.get_position(), Vector2::new(0.0, 2.5));
    }

    #[test]
    fn explicit_euler_moves_with_old_velocity() {
        let mut ctx = context();
        ctx.config.integrator = IntegratorKind::Euler;
        let handle = ctx.add_body(RigidBody::new_dynamic(Shape::ball(5.0), Vector2::zero()));

        integrate_bodies(&mut ctx, 0.5);

        let body = ctx.bodies.get(handle).unwrap();
        assert_relative_eq!(body.get_position(), Vector2::zero());
        assert_relative_eq!(body.get_linear_velocity(), Vector2::new(0.0, 5.0));
    }

    #[test]
    fn friction_damps_linear_and_angular_velocity() {
        let mut ctx = context();
        ctx.config.set_feature(FeatureFlags::GRAVITY, false);
        ctx.config.set_feature(FeatureFlags::FRICTION, true);
        ctx.config.air_friction = 0.1;
        let body = BodyDesc::dynamic(Shape::ball(5.0))
            .with_velocity(Vector2::new(100.0, 0.0))
            .with_angular_velocity(2.0)
            .build()
            .unwrap();
        let handle = ctx.add_body(body);

        integrate_bodies(&mut ctx, 0.01);

        let body = ctx.bodies.get(handle).unwrap();
        assert_relative_eq!(body.get_linear_velocity().x, 90.0, epsilon = 1e-4);
        assert_relative_eq!(body.get_angular_velocity(), 1.8, epsilon = 1e-6);
        assert_relative_eq!(body.get_rotation(), 0.018, epsilon = 1e-6);
    }

    #[test]
    fn grabbed_body_follows_pointer_instead_of_gravity() {
        let mut ctx = context();
        let handle = ctx.add_body(RigidBody::new_dynamic(Shape::ball(5.0), Vector2::zero()));
        ctx.grab = Some(GrabState {
            body: handle,
            pointer: Vector2::new(10.0, 0.0),
            offset: Vector2::zero(),
        });

        integrate_bodies(&mut ctx, 0.01);

        let body = ctx.bodies.get(handle).unwrap();
        assert_relative_eq!(body.get_linear_velocity(), Vector2::new(100.0, 0.0));
        assert_relative_eq!(body.get_position(), Vector2::new(1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn speed_ceiling_clamps_fast_bodies() {
        let mut ctx = context();
        ctx.config.max_speed = Some(50.0);
        let body = BodyDesc::dynamic(Shape::ball(5.0))
            .with_velocity(Vector2::new(300.0, 400.0))
            .build()
            .unwrap();
        let handle = ctx.add_body(body);

        clamp_speeds(&mut ctx);

        let velocity = ctx.bodies.get(handle).unwrap().get_linear_velocity();
        assert_relative_eq!(velocity, Vector2::new(30.0, 40.0), epsilon = 1e-4);
    }
}
