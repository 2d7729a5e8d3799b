use crate::collision::collision_pair::{CollisionPair, Contact};
use crate::core::{CollisionEvent, SimulationContext, Storage};

/// Resolves every overlapping pair of bounding circles.
///
/// Pairs are visited in registry order without sorting, so a body touched by
/// several others is pushed by each in turn within the same sub-step.
pub fn resolve_collisions(ctx: &mut SimulationContext) {
    let handles = ctx.bodies.handles();

    for (i, &handle_a) in handles.iter().enumerate() {
        for &handle_b in &handles[i + 1..] {
            let pair = CollisionPair::new(handle_a, handle_b);
            if let Some(event) = resolve_pair(ctx, pair) {
                ctx.events.add_collision_event(event);
            }
        }
    }
}

/// Separates and bounces a single pair, returning the contact it resolved
fn resolve_pair(ctx: &mut SimulationContext, pair: CollisionPair) -> Option<CollisionEvent> {
    let [body_a, body_b] = ctx.bodies.get_pair_mut(pair.body_a, pair.body_b)?;

    if body_a.is_static() && body_b.is_static() {
        return None;
    }

    let Contact { normal, overlap } = Contact::between(body_a, body_b)?;

    // Inverse-mass split, equal to mB / (mA + mB) for two dynamic bodies.
    // Not the plain mass ratio: a static body has zero inverse mass, so it
    // stays put and the dynamic one takes the full overlap and bounce.
    let inv_mass_a = body_a.get_inverse_mass();
    let inv_mass_b = body_b.get_inverse_mass();
    let inv_mass_sum = inv_mass_a + inv_mass_b;
    if inv_mass_sum <= 0.0 {
        return None;
    }

    let correction = normal * overlap;
    body_a.set_position(body_a.get_position() - correction * (inv_mass_a / inv_mass_sum));
    body_b.set_position(body_b.get_position() + correction * (inv_mass_b / inv_mass_sum));

    let relative_velocity = body_b.get_linear_velocity() - body_a.get_linear_velocity();
    let vel_along_normal = relative_velocity.dot(&normal);

    let mut impulse = 0.0;
    if vel_along_normal <= 0.0 {
        let restitution = body_a
            .get_material()
            .restitution
            .min(body_b.get_material().restitution);

        impulse = -(1.0 + restitution) * vel_along_normal / inv_mass_sum;
        body_a.apply_impulse(-normal * impulse);
        body_b.apply_impulse(normal * impulse);
    }

    Some(CollisionEvent {
        body_a: pair.body_a,
        body_b: pair.body_b,
        normal,
        overlap,
        impulse,
    })
}
