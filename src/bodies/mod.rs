mod rigid_body;
mod material;
mod body_type;
mod color;

pub use self::rigid_body::{RigidBody, RigidBodyHandle};
pub use self::material::Material;
pub use self::body_type::RigidBodyType;
pub use self::color::Color;

use crate::core::config::CreationDefaults;
use crate::error::SandboxError;
use crate::math::Vector2;
use crate::shapes::Shape;
use crate::Result;

/// Parameters for creating a body.
///
/// Build with [`BodyDesc::dynamic`] or [`BodyDesc::fixed`], chain the `with_*`
/// setters and hand it to the registry, which validates it through
/// [`BodyDesc::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDesc {
    pub body_type: RigidBodyType,
    pub shape: Shape,
    pub position: Vector2,
    pub velocity: Vector2,
    pub rotation: f32,
    pub angular_velocity: f32,
    pub material: Material,
    pub color: Color,
}

impl BodyDesc {
    /// Describes a dynamic body with the given shape
    pub fn dynamic(shape: Shape) -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            shape,
            position: Vector2::zero(),
            velocity: Vector2::zero(),
            rotation: 0.0,
            angular_velocity: 0.0,
            material: Material::default(),
            color: Color::default(),
        }
    }

    /// Describes a static body with the given shape
    pub fn fixed(shape: Shape) -> Self {
        Self {
            body_type: RigidBodyType::Static,
            color: Color::ANCHOR,
            ..Self::dynamic(shape)
        }
    }

    /// Describes a dynamic body using the interactive creation defaults
    pub fn from_defaults(defaults: &CreationDefaults) -> Self {
        Self::dynamic(Shape::from_kind(defaults.shape, defaults.size))
            .with_material(Material::new(defaults.density, defaults.friction, defaults.restitution))
            .with_color(defaults.color)
    }

    pub fn with_position(mut self, position: Vector2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: f32) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Validates the description and creates the body.
    ///
    /// Fails if any value is non-finite or if a dynamic body would end up
    /// with a non-positive mass.
    pub fn build(self) -> Result<RigidBody> {
        if !self.position.is_finite() || !self.velocity.is_finite()
            || !self.rotation.is_finite() || !self.angular_velocity.is_finite()
        {
            return Err(SandboxError::InvalidParameter(format!(
                "non-finite body state: position {}, velocity {}",
                self.position, self.velocity
            )));
        }

        let radius = self.shape.bounding_radius();
        if !radius.is_finite() {
            return Err(SandboxError::InvalidParameter(format!(
                "non-finite bounding radius for {}",
                self.shape.shape_type()
            )));
        }

        let mut body = RigidBody::new(self.shape, self.position, self.body_type);
        body.set_material(self.material);
        body.set_color(self.color);
        body.set_rotation(self.rotation);

        if self.body_type == RigidBodyType::Dynamic {
            let mass = body.get_mass();
            if !(mass > 0.0 && mass.is_finite()) {
                return Err(SandboxError::InvalidParameter(format!(
                    "dynamic {} needs a positive mass, got {}",
                    self.shape.shape_type(),
                    mass
                )));
            }
            body.set_linear_velocity(self.velocity);
            body.set_angular_velocity(self.angular_velocity);
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_density_dynamic_body_is_rejected() {
        let desc = BodyDesc::dynamic(Shape::ball(10.0)).with_material(Material::new(0.0, 0.5, 0.5));
        assert!(matches!(desc.build(), Err(SandboxError::InvalidParameter(_))));
    }

    #[test]
    fn static_body_ignores_initial_velocity() {
        let body = BodyDesc::fixed(Shape::ball(10.0))
            .with_velocity(Vector2::new(10.0, 0.0))
            .build()
            .unwrap();
        assert!(body.is_static());
        assert!(body.get_linear_velocity().is_zero());
    }

    #[test]
    fn nan_position_is_rejected() {
        let desc = BodyDesc::dynamic(Shape::ball(10.0)).with_position(Vector2::new(f32::NAN, 0.0));
        assert!(desc.build().is_err());
    }
}
