#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Type of body, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum RigidBodyType {
    /// Dynamic bodies are integrated and respond to constraints, collisions and bounds
    #[default]
    Dynamic,

    /// Static bodies never move; they act as immovable anchors and obstacles
    Static,
}

impl RigidBodyType {
    /// Returns the opposite type, used when freezing or thawing a body
    pub fn toggled(self) -> Self {
        match self {
            Self::Dynamic => Self::Static,
            Self::Static => Self::Dynamic,
        }
    }
}
