use crate::core::{FeatureFlags, SimulationContext, Storage};

/// Keeps dynamic bodies inside the world bounds.
///
/// A body crossing an edge is clamped back onto it and the velocity component
/// along that axis is reflected and scaled by the body's restitution. With
/// friction enabled, a bounce also scales the tangential component by
/// `1 - friction`.
pub fn apply_bounds(ctx: &mut SimulationContext) {
    let bounds = ctx.config.bounds;
    let friction_on = ctx.config.is_enabled(FeatureFlags::FRICTION);

    for (_, body) in ctx.bodies.iter_mut() {
        if body.is_static() {
            continue;
        }

        let radius = body.bounding_radius();
        let material = *body.get_material();
        let mut position = body.get_position();
        let mut velocity = body.get_linear_velocity();

        let (x, vx, bounced_x) = clamp_axis(
            position.x,
            velocity.x,
            bounds.min.x + radius,
            bounds.max.x - radius,
            material.restitution,
        );
        let (y, vy, bounced_y) = clamp_axis(
            position.y,
            velocity.y,
            bounds.min.y + radius,
            bounds.max.y - radius,
            material.restitution,
        );

        if !(bounced_x || bounced_y) {
            continue;
        }

        position.x = x;
        position.y = y;
        velocity.x = vx;
        velocity.y = vy;

        if friction_on {
            let keep = 1.0 - material.friction;
            if bounced_y {
                velocity.x *= keep;
            }
            if bounced_x {
                velocity.y *= keep;
            }
        }

        body.set_position(position);
        body.set_linear_velocity(velocity);
    }
}

/// Clamps one coordinate into `[low, high]`, reflecting the velocity on contact
fn clamp_axis(value: f32, velocity: f32, low: f32, high: f32, restitution: f32) -> (f32, f32, bool) {
    if value < low {
        (low, -velocity * restitution, true)
    } else if value > high {
        (high, -velocity * restitution, true)
    } else {
        (value, velocity, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BodyDesc, Material};
    use crate::core::SimulationConfig;
    use crate::math::Vector2;
    use crate::shapes::Shape;
    use approx::assert_relative_eq;

    #[test]
    fn floor_bounce_scales_by_restitution_and_friction() {
        let mut ctx = SimulationContext::new(SimulationConfig::default());
        let handle = ctx
            .create_body(
                BodyDesc::dynamic(Shape::ball(10.0))
                    .with_position(Vector2::new(400.0, 595.0))
                    .with_velocity(Vector2::new(100.0, 200.0))
                    .with_material(Material::new(1.0, 0.5, 0.5)),
            )
            .unwrap();

        apply_bounds(&mut ctx);

        let body = ctx.bodies.get(handle).unwrap();
        assert_relative_eq!(body.get_position(), Vector2::new(400.0, 590.0));
        assert_relative_eq!(body.get_linear_velocity(), Vector2::new(50.0, -100.0));
    }

    #[test]
    fn corner_bounce_reflects_both_axes() {
        let mut ctx = SimulationContext::new(SimulationConfig::default());
        ctx.config.set_feature(FeatureFlags::FRICTION, false);
        let handle = ctx
            .create_body(
                BodyDesc::dynamic(Shape::ball(10.0))
                    .with_position(Vector2::new(-5.0, -5.0))
                    .with_velocity(Vector2::new(-10.0, -20.0))
                    .with_material(Material::new(1.0, 0.5, 1.0)),
            )
            .unwrap();

        apply_bounds(&mut ctx);

        let body = ctx.bodies.get(handle).unwrap();
        assert_relative_eq!(body.get_position(), Vector2::new(10.0, 10.0));
        assert_relative_eq!(body.get_linear_velocity(), Vector2::new(10.0, 20.0));
    }

    #[test]
    fn static_bodies_may_sit_outside() {
        let mut ctx = SimulationContext::new(SimulationConfig::default());
        let handle = ctx
            .create_body(BodyDesc::fixed(Shape::ball(10.0)).with_position(Vector2::new(-50.0, 0.0)))
            .unwrap();

        apply_bounds(&mut ctx);

        assert_eq!(ctx.bodies.get(handle).unwrap().get_position(), Vector2::new(-50.0, 0.0));
    }
}
