mod constraint;
mod distance;

pub use self::constraint::Constraint;
pub use self::distance::{DistanceConstraint, MIN_STIFFNESS};

use crate::bodies::RigidBody;
use crate::core::{BodyStorage, ConstraintStorage, Storage};

/// Runs one correction pass over every constraint, in registry order
pub fn solve_constraints<C: Constraint>(
    constraints: &mut ConstraintStorage<C>,
    bodies: &mut BodyStorage<RigidBody>,
    velocity_kick: f32,
) {
    for (_, constraint) in constraints.iter_mut() {
        constraint.solve_position(bodies, velocity_kick);
    }
}
