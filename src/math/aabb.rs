use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-aligned rectangle, used for the simulation bounds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner of the rectangle
    pub min: Vector2,

    /// Maximum corner of the rectangle
    pub max: Vector2,
}

impl Aabb {
    /// Creates a new AABB from minimum and maximum points
    #[inline]
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    /// Creates an AABB anchored at the origin with the given width and height
    #[inline]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Vector2::zero(),
            max: Vector2::new(width, height),
        }
    }

    /// Creates an AABB centered at a position with the given half extents
    #[inline]
    pub fn from_center_half_extents(center: Vector2, half_extents: Vector2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Returns the center of the AABB
    #[inline]
    pub fn center(&self) -> Vector2 {
        (self.min + self.max) * 0.5
    }

    /// Returns the extents of the AABB in each dimension
    #[inline]
    pub fn extents(&self) -> Vector2 {
        self.max - self.min
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns whether the point lies inside the AABB (inclusive)
    #[inline]
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y
    }

    /// Returns whether a circle lies completely inside the AABB
    #[inline]
    pub fn contains_circle(&self, center: Vector2, radius: f32) -> bool {
        center.x - radius >= self.min.x && center.x + radius <= self.max.x &&
        center.y - radius >= self.min.y && center.y + radius <= self.max.y
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::from_size(800.0, 600.0)
    }
}
