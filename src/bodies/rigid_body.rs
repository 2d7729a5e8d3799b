use crate::bodies::{Color, Material, RigidBodyType};
use crate::core::BodyHandle;
use crate::math::Vector2;
use crate::shapes::Shape;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Type alias for a handle to a rigid body
pub type RigidBodyHandle = BodyHandle;

/// A simulated body.
///
/// Physics only ever looks at the bounding circle of the shape; rotation and
/// angular velocity are integrated but never produced by contacts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RigidBody {
    /// Position of the body's center in world space
    position: Vector2,

    /// Linear velocity in pixels per second
    velocity: Vector2,

    /// Rotation in radians
    rotation: f32,

    /// Angular velocity in radians per second
    angular_velocity: f32,

    /// The body's shape
    shape: Shape,

    /// The body's material properties
    material: Material,

    /// The body's type (dynamic or static)
    body_type: RigidBodyType,

    /// The body's mass (density times area)
    mass: f32,

    /// Inverse of the body's mass, zero for static bodies
    inv_mass: f32,

    /// Render color
    color: Color,
}

impl RigidBody {
    /// Creates a new body with the given shape, position and type
    pub fn new(shape: Shape, position: Vector2, body_type: RigidBodyType) -> Self {
        let mut body = Self {
            position,
            velocity: Vector2::zero(),
            rotation: 0.0,
            angular_velocity: 0.0,
            shape,
            material: Material::default(),
            body_type,
            mass: 1.0,
            inv_mass: 1.0,
            color: Color::default(),
        };

        body.update_mass_properties();

        body
    }

    /// Creates a new dynamic body with the given shape and position
    pub fn new_dynamic(shape: Shape, position: Vector2) -> Self {
        Self::new(shape, position, RigidBodyType::Dynamic)
    }

    /// Creates a new static body with the given shape and position
    pub fn new_static(shape: Shape, position: Vector2) -> Self {
        Self::new(shape, position, RigidBodyType::Static)
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Sets the body's position
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Returns the body's rotation in radians
    pub fn get_rotation(&self) -> f32 {
        self.rotation
    }

    /// Sets the body's rotation in radians
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    /// Returns the body's linear velocity
    pub fn get_linear_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the body's linear velocity
    pub fn set_linear_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Returns the body's angular velocity
    pub fn get_angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Sets the body's angular velocity
    pub fn set_angular_velocity(&mut self, velocity: f32) {
        self.angular_velocity = velocity;
    }

    /// Returns the body's material
    pub fn get_material(&self) -> &Material {
        &self.material
    }

    /// Sets the body's material
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
        self.update_mass_properties();
    }

    /// Returns the body's shape
    pub fn get_shape(&self) -> &Shape {
        &self.shape
    }

    /// Sets the body's shape
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
        self.update_mass_properties();
    }

    /// Returns the radius of the circle physics uses for this body
    pub fn bounding_radius(&self) -> f32 {
        self.shape.bounding_radius()
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Returns the body's inverse mass (zero for static bodies)
    pub fn get_inverse_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Returns the render color
    pub fn get_color(&self) -> Color {
        self.color
    }

    /// Sets the render color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Returns the body type
    pub fn get_body_type(&self) -> RigidBodyType {
        self.body_type
    }

    /// Returns whether the body is static
    pub fn is_static(&self) -> bool {
        self.body_type == RigidBodyType::Static
    }

    /// Sets the body type and updates mass properties accordingly
    pub fn set_body_type(&mut self, body_type: RigidBodyType) {
        self.body_type = body_type;
        self.update_mass_properties();

        if body_type == RigidBodyType::Static {
            self.stop();
        }
    }

    /// Zeroes linear and angular velocity
    pub fn stop(&mut self) {
        self.velocity = Vector2::zero();
        self.angular_velocity = 0.0;
    }

    /// Applies an instantaneous change of momentum
    pub fn apply_impulse(&mut self, impulse: Vector2) {
        if self.body_type == RigidBodyType::Dynamic {
            self.velocity += impulse * self.inv_mass;
        }
    }

    /// Returns whether `point` lies within the body's bounding circle
    pub fn contains_point(&self, point: Vector2) -> bool {
        let radius = self.bounding_radius();
        self.position.distance_squared(&point) <= radius * radius
    }

    /// Updates the body's mass properties based on its shape and material
    pub fn update_mass_properties(&mut self) {
        self.mass = self.shape.area() * self.material.density;

        if self.body_type == RigidBodyType::Dynamic && self.mass > 0.0 {
            self.inv_mass = 1.0 / self.mass;
        } else {
            self.inv_mass = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mass_is_density_times_area() {
        let mut body = RigidBody::new_dynamic(Shape::ball(10.0), Vector2::zero());
        body.set_material(Material::new(2.0, 0.0, 0.0));
        assert_relative_eq!(body.get_mass(), 2.0 * std::f32::consts::PI * 100.0, epsilon = 1e-3);
        assert_relative_eq!(body.get_inverse_mass(), 1.0 / body.get_mass());
    }

    #[test]
    fn freezing_zeroes_velocity_and_inverse_mass() {
        let mut body = RigidBody::new_dynamic(Shape::rect(10.0, 10.0), Vector2::zero());
        body.set_linear_velocity(Vector2::new(5.0, 5.0));
        body.set_angular_velocity(1.0);
        body.set_body_type(RigidBodyType::Static);

        assert!(body.is_static());
        assert!(body.get_linear_velocity().is_zero());
        assert_eq!(body.get_angular_velocity(), 0.0);
        assert_eq!(body.get_inverse_mass(), 0.0);
        assert!(body.get_mass() > 0.0);
    }

    #[test]
    fn impulses_ignore_static_bodies() {
        let mut body = RigidBody::new_static(Shape::ball(5.0), Vector2::zero());
        body.apply_impulse(Vector2::new(100.0, 0.0));
        assert!(body.get_linear_velocity().is_zero());
    }
}
