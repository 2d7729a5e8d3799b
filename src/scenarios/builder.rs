use crate::bodies::{BodyDesc, RigidBody};
use crate::constraints::DistanceConstraint;
use crate::core::{BodyHandle, BodyStorage, ConstraintHandle, ConstraintStorage, GravityType, Storage};
use crate::error::SandboxError;
use crate::math::Aabb;
use crate::Result;

/// Collects the bodies and constraints of a scenario off to the side.
///
/// Nothing reaches the live world until [`ScenarioBuilder::finish`] hands the
/// complete sets over, so a failed build leaves the world untouched.
#[derive(Debug)]
pub struct ScenarioBuilder {
    bounds: Aabb,
    bodies: BodyStorage<RigidBody>,
    constraints: ConstraintStorage<DistanceConstraint>,
    gravity: Option<GravityType>,
    friction: bool,
}

/// The finished contents of a scenario
#[derive(Debug)]
pub struct ScenarioContents {
    pub bodies: BodyStorage<RigidBody>,
    pub constraints: ConstraintStorage<DistanceConstraint>,

    /// Gravity override, if the scenario needs one
    pub gravity: Option<GravityType>,

    /// Whether air and bounce friction stay enabled
    pub friction: bool,
}

impl ScenarioBuilder {
    /// Creates an empty builder laying bodies out inside `bounds`
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            bodies: BodyStorage::new(),
            constraints: ConstraintStorage::new(),
            gravity: None,
            friction: true,
        }
    }

    /// The area the scenario is laid out in
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Validates and adds a body
    pub fn body(&mut self, desc: BodyDesc) -> Result<BodyHandle> {
        Ok(self.bodies.add(desc.build()?))
    }

    /// Links two bodies at their current distance
    pub fn link(&mut self, body_a: BodyHandle, body_b: BodyHandle, stiffness: f32) -> Result<ConstraintHandle> {
        let a = self.bodies.get_body(body_a)?.get_position();
        let b = self.bodies.get_body(body_b)?.get_position();
        if body_a == body_b {
            return Err(SandboxError::InvalidConstraint(format!(
                "cannot constrain body {:?} to itself",
                body_a
            )));
        }
        Ok(self.constraints.add(DistanceConstraint::new(body_a, body_b, a.distance(&b), stiffness)))
    }

    /// Overrides the gravity field while the scenario is loaded
    pub fn gravity(&mut self, gravity: GravityType) {
        self.gravity = Some(gravity);
    }

    /// Turns friction off for frictionless scenarios
    pub fn disable_friction(&mut self) {
        self.friction = false;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn finish(self) -> ScenarioContents {
        ScenarioContents {
            bodies: self.bodies,
            constraints: self.constraints,
            gravity: self.gravity,
            friction: self.friction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;
    use crate::shapes::Shape;

    #[test]
    fn invalid_body_is_rejected() {
        let mut builder = ScenarioBuilder::new(Aabb::default());
        let result = builder.body(BodyDesc::dynamic(Shape::ball(0.0)));
        assert!(matches!(result, Err(SandboxError::InvalidParameter(_))));
        assert_eq!(builder.body_count(), 0);
    }

    #[test]
    fn link_uses_current_distance() {
        let mut builder = ScenarioBuilder::new(Aabb::default());
        let a = builder.body(BodyDesc::fixed(Shape::ball(5.0))).unwrap();
        let b = builder
            .body(BodyDesc::dynamic(Shape::ball(5.0)).with_position(Vector2::new(30.0, 40.0)))
            .unwrap();
        builder.link(a, b, 1.0).unwrap();
        assert!(builder.link(a, a, 1.0).is_err());

        let contents = builder.finish();
        let (_, constraint) = contents.constraints.iter().next().unwrap();
        assert_eq!(constraint.get_rest_length(), 50.0);
    }
}
