#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Material properties for simulated bodies
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// Coefficient of restitution (bounciness), 0-1
    pub restitution: f32,

    /// Coefficient of friction against the bounds, 0-1
    pub friction: f32,

    /// Mass per square pixel
    pub density: f32,
}

impl Material {
    /// Creates a new material, clamping the coefficients into `[0, 1]`
    pub fn new(density: f32, friction: f32, restitution: f32) -> Self {
        Self {
            density,
            friction: friction.clamp(0.0, 1.0),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    /// Creates a material for rubber (medium friction, high restitution)
    pub fn rubber() -> Self {
        Self::new(1.2, 0.8, 0.85)
    }

    /// Creates a material for wood (medium friction, low restitution)
    pub fn wood() -> Self {
        Self::new(0.7, 0.6, 0.2)
    }

    /// Creates a material for metal (heavy, medium restitution)
    pub fn metal() -> Self {
        Self::new(7.8, 0.4, 0.5)
    }

    /// Creates a material for ice (low friction, medium restitution)
    pub fn ice() -> Self {
        Self::new(0.9, 0.05, 0.4)
    }

    /// Creates a material for stone (heavy, high friction, low restitution)
    pub fn stone() -> Self {
        Self::new(2.4, 0.9, 0.1)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: 1.0,
            friction: 0.1,
            restitution: 0.7,
        }
    }
}
