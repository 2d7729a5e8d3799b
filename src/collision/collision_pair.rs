use crate::bodies::RigidBody;
use crate::core::BodyHandle;
use crate::math::Vector2;

/// A pair of bodies tested against each other, in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// The body that comes first in the registry
    pub body_a: BodyHandle,

    /// The body that comes second in the registry
    pub body_b: BodyHandle,
}

impl CollisionPair {
    /// Creates a new collision pair
    pub fn new(body_a: BodyHandle, body_b: BodyHandle) -> Self {
        Self { body_a, body_b }
    }

    /// Checks if this collision pair contains the specified body
    pub fn contains(&self, body: BodyHandle) -> bool {
        self.body_a == body || self.body_b == body
    }

    /// Returns the other body in the pair
    pub fn other(&self, body: BodyHandle) -> Option<BodyHandle> {
        if self.body_a == body {
            Some(self.body_b)
        } else if self.body_b == body {
            Some(self.body_a)
        } else {
            None
        }
    }
}

/// Overlap between two bounding circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the first center to the second
    pub normal: Vector2,

    /// How far the circles interpenetrate
    pub overlap: f32,
}

impl Contact {
    /// Tests two bodies' bounding circles for overlap.
    ///
    /// Coincident centers give no usable normal and report no contact.
    pub fn between(a: &RigidBody, b: &RigidBody) -> Option<Self> {
        let delta = b.get_position() - a.get_position();
        let dist_sq = delta.length_squared();
        let radius_sum = a.bounding_radius() + b.bounding_radius();

        if dist_sq >= radius_sum * radius_sum || dist_sq <= 0.0 {
            return None;
        }

        let dist = dist_sq.sqrt();
        Some(Self {
            normal: delta / dist,
            overlap: radius_sum - dist,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;
    use approx::assert_relative_eq;

    fn ball(x: f32, y: f32, radius: f32) -> RigidBody {
        RigidBody::new_dynamic(Shape::ball(radius), Vector2::new(x, y))
    }

    #[test]
    fn overlapping_circles_report_normal_and_depth() {
        let contact = Contact::between(&ball(0.0, 0.0, 10.0), &ball(0.0, 15.0, 10.0)).unwrap();
        assert_relative_eq!(contact.normal, Vector2::new(0.0, 1.0));
        assert_relative_eq!(contact.overlap, 5.0);
    }

    #[test]
    fn touching_and_coincident_circles_do_not_collide() {
        assert!(Contact::between(&ball(0.0, 0.0, 10.0), &ball(20.0, 0.0, 10.0)).is_none());
        assert!(Contact::between(&ball(5.0, 5.0, 10.0), &ball(5.0, 5.0, 10.0)).is_none());
    }
}
