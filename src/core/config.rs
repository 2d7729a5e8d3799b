use bitflags::bitflags;
use crate::bodies::Color;
use crate::core::GravityType;
use crate::math::{Aabb, Vector2};
use crate::shapes::ShapeKind;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

bitflags! {
    /// Feature toggles exposed to the UI
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
    pub struct FeatureFlags: u32 {
        /// Dynamic bodies accelerate under the gravity field
        const GRAVITY = 0x01;

        /// Air drag while integrating, and tangential friction on bounces
        const FRICTION = 0x02;

        /// Bodies collide with each other
        const COLLISIONS = 0x04;

        /// Bodies bounce off the simulation bounds
        const BOUNDS = 0x08;
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Which integration scheme advances bodies each sub-step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum IntegratorKind {
    /// Semi-implicit Euler: velocity first, then position from the new velocity
    #[default]
    SymplecticEuler,

    /// Explicit Euler: position from the velocity at the start of the sub-step
    Euler,
}

/// Parameters used for bodies created by pointer gestures
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CreationDefaults {
    pub shape: ShapeKind,

    /// Bounding size in pixels (radius for balls, half-side for boxes)
    pub size: f32,

    pub density: f32,
    pub restitution: f32,
    pub friction: f32,
    pub color: Color,
}

impl Default for CreationDefaults {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Ball,
            size: 20.0,
            density: 1.0,
            restitution: 0.7,
            friction: 0.1,
            color: Color::default(),
        }
    }
}

/// Configuration parameters for the sandbox simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Number of sub-steps each frame is divided into
    pub sub_steps: u32,

    /// Multiplier applied to every sub-step delta
    pub time_scale: f32,

    /// The gravity field
    pub gravity: GravityType,

    /// Per-sub-step velocity damping factor in `[0, 1]`
    pub air_friction: f32,

    /// Enabled features
    pub features: FeatureFlags,

    /// Rectangle the bodies are kept inside when bounds are enabled
    pub bounds: Aabb,

    /// Speed ceiling applied to dynamic bodies after every sub-step
    pub max_speed: Option<f32>,

    /// The integration scheme
    pub integrator: IntegratorKind,

    /// Proportional gain of the pointer-follow velocity of a grabbed body
    pub grab_gain: f32,

    /// Minimum drag length, in pixels, for a created body to be launched
    pub launch_threshold: f32,

    /// Launch velocity per pixel of drag
    pub launch_velocity_gain: f32,

    /// Stiffness of constraints created by connect gestures
    pub connect_stiffness: f32,

    /// Velocity change per pixel of constraint correction
    pub constraint_velocity_kick: f32,

    /// Parameters for bodies created by pointer gestures
    pub creation: CreationDefaults,
}

impl SimulationConfig {
    /// Sets a uniform gravity from a magnitude and a direction angle in radians
    /// (0 points right, PI/2 points down)
    pub fn set_gravity_polar(&mut self, magnitude: f32, angle: f32) {
        self.gravity = GravityType::Uniform(Vector2::from_polar(magnitude.max(0.0), angle));
    }

    /// Sets a uniform gravity from its components
    pub fn set_gravity(&mut self, gravity: Vector2) {
        self.gravity = GravityType::Uniform(gravity);
    }

    /// Sets the air friction coefficient, clamped to `[0, 1]`
    pub fn set_air_friction(&mut self, air_friction: f32) {
        self.air_friction = air_friction.clamp(0.0, 1.0);
    }

    /// Sets the time scale, clamped to be non-negative
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale.max(0.0);
    }

    /// Resizes the bounds, keeping them anchored at the origin
    pub fn set_bounds_size(&mut self, width: f32, height: f32) {
        self.bounds = Aabb::from_size(width.max(0.0), height.max(0.0));
    }

    /// Turns a feature on or off
    pub fn set_feature(&mut self, feature: FeatureFlags, enabled: bool) {
        self.features.set(feature, enabled);
    }

    /// Returns whether every flag in `feature` is enabled
    pub fn is_enabled(&self, feature: FeatureFlags) -> bool {
        self.features.contains(feature)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sub_steps: 4,
            time_scale: 1.0,
            gravity: GravityType::default(),
            air_friction: 0.001,
            features: FeatureFlags::default(),
            bounds: Aabb::default(),
            max_speed: Some(10_000.0),
            integrator: IntegratorKind::default(),
            grab_gain: 10.0,
            launch_threshold: 20.0,
            launch_velocity_gain: 3.0,
            connect_stiffness: 0.2,
            constraint_velocity_kick: 10.0,
            creation: CreationDefaults::default(),
        }
    }
}
