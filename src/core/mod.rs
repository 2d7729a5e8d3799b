pub mod world;
pub mod config;
pub mod storage;
pub mod events;
pub mod context;
pub mod snapshot;

pub use self::world::SandboxWorld;
pub use self::config::{SimulationConfig, FeatureFlags, CreationDefaults, IntegratorKind};
pub use self::storage::{BodyStorage, ConstraintStorage, Storage};
pub use self::events::{
    EventQueue, CollisionEvent, BodyEvent, BodyEventType, ConstraintEvent, ConstraintEventType,
};
pub use self::context::{SimulationContext, GrabState};
pub use self::snapshot::{RenderSnapshot, BodyView, ConstraintView, BodySummary};

use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

slotmap::new_key_type! {
    /// A stable handle to a body in the registry.
    ///
    /// Handles of removed bodies never resolve again, even if the slot is reused.
    pub struct BodyHandle;

    /// A stable handle to a constraint in the constraint set
    pub struct ConstraintHandle;
}

/// The gravity field acting on dynamic bodies
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum GravityType {
    /// No gravity
    None,

    /// Constant acceleration in a direction (screen space, +y is down)
    Uniform(Vector2),

    /// Point gravity source (e.g. a sun)
    Point {
        /// The position of the gravity source
        position: Vector2,

        /// Acceleration at unit distance; falls off with the squared distance
        strength: f32,
    },
}

impl GravityType {
    /// Returns the acceleration experienced by a body at `position`
    pub fn acceleration_at(&self, position: Vector2) -> Vector2 {
        match *self {
            GravityType::None => Vector2::zero(),
            GravityType::Uniform(gravity) => gravity,
            GravityType::Point { position: source, strength } => {
                let to_source = source - position;
                let distance_sq = to_source.length_squared();
                if distance_sq > 0.0 {
                    to_source * (strength / (distance_sq * distance_sq.sqrt()))
                } else {
                    Vector2::zero()
                }
            }
        }
    }
}

impl Default for GravityType {
    fn default() -> Self {
        // 9.8 m/s^2 at 100 px per meter
        Self::Uniform(Vector2::new(0.0, 980.0))
    }
}
