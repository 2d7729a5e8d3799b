pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod constraints;
pub mod integration;
pub mod interaction;
pub mod scenarios;

/// Re-export common types for easier usage
pub use crate::core::{BodyHandle, ConstraintHandle, GravityType, SandboxWorld, SimulationConfig, RenderSnapshot};
pub use crate::bodies::{BodyDesc, RigidBody, RigidBodyType, Material, Color};
pub use crate::interaction::{InputEvent, InteractionMode};
pub use crate::scenarios::ScenarioKind;
pub use crate::shapes::{Shape, ShapeKind};
pub use crate::math::Vector2;

/// Error types for the sandbox
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum SandboxError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Unknown scenario: {0}")]
        UnknownScenario(String),

        #[error("Invalid constraint: {0}")]
        InvalidConstraint(String),
    }
}

/// Result type for sandbox operations
pub type Result<T> = std::result::Result<T, error::SandboxError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
