use crate::bodies::{Color, RigidBody};
use crate::constraints::Constraint;
use crate::core::{BodyHandle, ConstraintHandle, SimulationContext, Storage};
use crate::math::Vector2;
use crate::shapes::Shape;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Everything a renderer needs to draw one body
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodyView {
    pub handle: BodyHandle,
    pub shape: Shape,
    pub position: Vector2,
    pub rotation: f32,
    pub bounding_radius: f32,

    /// Outline in world space, counter-clockwise and unclosed
    pub outline: Vec<Vector2>,

    pub color: Color,
    pub is_static: bool,
    pub is_selected: bool,
    pub is_grabbed: bool,
}

/// A constraint drawn as a line between its endpoints
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ConstraintView {
    pub handle: ConstraintHandle,
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
    pub endpoints: [Vector2; 2],
    pub rest_length: f32,
    pub stiffness: f32,
}

/// An owned copy of the drawable state at the end of a frame
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RenderSnapshot {
    /// Bodies in registry order, bottom to top
    pub bodies: Vec<BodyView>,
    pub constraints: Vec<ConstraintView>,
}

impl RenderSnapshot {
    /// Copies the drawable state out of a context
    pub fn capture(ctx: &SimulationContext) -> Self {
        let grabbed = ctx.grabbed();

        let bodies = ctx
            .bodies
            .iter()
            .map(|(handle, body)| BodyView {
                handle,
                shape: *body.get_shape(),
                position: body.get_position(),
                rotation: body.get_rotation(),
                bounding_radius: body.bounding_radius(),
                outline: body.get_shape().world_outline(body.get_position(), body.get_rotation()),
                color: body.get_color(),
                is_static: body.is_static(),
                is_selected: ctx.selected == Some(handle),
                is_grabbed: grabbed == Some(handle),
            })
            .collect();

        let constraints = ctx
            .constraints
            .iter()
            .filter_map(|(handle, constraint)| {
                let a = ctx.bodies.get(constraint.body_a())?;
                let b = ctx.bodies.get(constraint.body_b())?;
                Some(ConstraintView {
                    handle,
                    body_a: constraint.body_a(),
                    body_b: constraint.body_b(),
                    endpoints: [a.get_position(), b.get_position()],
                    rest_length: constraint.get_rest_length(),
                    stiffness: constraint.get_stiffness(),
                })
            })
            .collect();

        Self { bodies, constraints }
    }

    /// Finds the view of a body
    pub fn body(&self, handle: BodyHandle) -> Option<&BodyView> {
        self.bodies.iter().find(|view| view.handle == handle)
    }
}

/// Read-only details of one body, for an inspector panel
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodySummary {
    pub handle: BodyHandle,
    pub shape_type: String,
    pub mass: f32,
    pub position: Vector2,
    pub velocity: Vector2,
    pub speed: f32,
    pub restitution: f32,
    pub friction: f32,
    pub is_static: bool,
    pub constraint_count: usize,
}

impl BodySummary {
    /// Summarizes a body
    pub fn new(handle: BodyHandle, body: &RigidBody, constraint_count: usize) -> Self {
        let velocity = body.get_linear_velocity();
        Self {
            handle,
            shape_type: body.get_shape().shape_type().to_string(),
            mass: body.get_mass(),
            position: body.get_position(),
            velocity,
            speed: velocity.length(),
            restitution: body.get_material().restitution,
            friction: body.get_material().friction,
            is_static: body.is_static(),
            constraint_count,
        }
    }

    /// Summarizes a body in a context, counting the constraints attached to it
    pub fn capture(ctx: &SimulationContext, handle: BodyHandle) -> Option<Self> {
        let body = ctx.bodies.get(handle)?;
        let constraint_count = ctx
            .constraints
            .iter()
            .filter(|(_, constraint)| constraint.involves_body(handle))
            .count();
        Some(Self::new(handle, body, constraint_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimulationConfig;

    #[test]
    fn snapshot_flags_selection_and_grab() {
        let mut ctx = SimulationContext::new(SimulationConfig::default());
        let a = ctx.add_body(RigidBody::new_dynamic(Shape::ball(10.0), Vector2::new(50.0, 50.0)));
        let b = ctx.add_body(RigidBody::new_static(Shape::rect(20.0, 10.0), Vector2::new(90.0, 50.0)));
        ctx.connect(a, b, 1.0).unwrap();
        ctx.selected = Some(b);
        ctx.grab_body(a, Vector2::new(50.0, 50.0)).unwrap();

        let snapshot = RenderSnapshot::capture(&ctx);

        assert_eq!(snapshot.bodies.len(), 2);
        assert!(snapshot.body(a).unwrap().is_grabbed);
        assert!(!snapshot.body(a).unwrap().is_selected);
        assert!(snapshot.body(b).unwrap().is_selected);
        assert!(snapshot.body(b).unwrap().is_static);
        let outline = &snapshot.body(b).unwrap().outline;
        assert_eq!(outline.len(), 4);
        assert_ne!(outline.first(), outline.last());

        let link = &snapshot.constraints[0];
        assert_eq!(link.endpoints, [Vector2::new(50.0, 50.0), Vector2::new(90.0, 50.0)]);
        assert_eq!(link.rest_length, 40.0);
    }

    #[test]
    fn summary_counts_attached_constraints() {
        let mut ctx = SimulationContext::new(SimulationConfig::default());
        let a = ctx.add_body(RigidBody::new_dynamic(Shape::ball(10.0), Vector2::zero()));
        let b = ctx.add_body(RigidBody::new_dynamic(Shape::ball(10.0), Vector2::new(30.0, 40.0)));
        ctx.connect(a, b, 0.5).unwrap();

        let summary = BodySummary::capture(&ctx, b).unwrap();
        assert_eq!(summary.constraint_count, 1);
        assert_eq!(summary.shape_type, "Ball");
        assert!(!summary.is_static);
    }
}
