use crate::math::Vector2;
use nalgebra as na;
use std::f32::consts::PI;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Number of segments used when outlining a ball for the renderer
const BALL_OUTLINE_SEGMENTS: usize = 24;

/// The kind of shape a new body is created with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    Ball,
    Box,
    Polygon,
    Star,
}

impl ShapeKind {
    /// All shape kinds, in menu order
    pub const ALL: [ShapeKind; 4] = [ShapeKind::Ball, ShapeKind::Box, ShapeKind::Polygon, ShapeKind::Star];
}

/// Visual shape of a body.
///
/// Physics treats every variant as a circle of [`Shape::bounding_radius`];
/// the remaining fields only matter for mass (through [`Shape::area`]) and
/// for the outline handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    /// A circle
    Ball {
        radius: f32,
    },

    /// An axis-aligned (in local space) rectangle
    Box {
        width: f32,
        height: f32,
    },

    /// A regular polygon inscribed in a circle of `radius`
    Polygon {
        radius: f32,
        sides: u32,
    },

    /// A star with `points` tips alternating between the two radii
    Star {
        outer_radius: f32,
        inner_radius: f32,
        points: u32,
    },
}

impl Shape {
    /// Creates a ball
    pub fn ball(radius: f32) -> Self {
        Self::Ball { radius: radius.max(0.0) }
    }

    /// Creates a box
    pub fn rect(width: f32, height: f32) -> Self {
        Self::Box {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Creates a regular polygon (at least a triangle)
    pub fn polygon(radius: f32, sides: u32) -> Self {
        Self::Polygon {
            radius: radius.max(0.0),
            sides: sides.max(3),
        }
    }

    /// Creates a star (at least three points)
    pub fn star(outer_radius: f32, inner_radius: f32, points: u32) -> Self {
        let outer_radius = outer_radius.max(0.0);
        Self::Star {
            outer_radius,
            inner_radius: inner_radius.clamp(0.0, outer_radius),
            points: points.max(3),
        }
    }

    /// Creates a shape of the given kind whose bounding circle is roughly `size`
    pub fn from_kind(kind: ShapeKind, size: f32) -> Self {
        match kind {
            ShapeKind::Ball => Self::ball(size),
            ShapeKind::Box => Self::rect(size * 2.0, size * 2.0),
            ShapeKind::Polygon => Self::polygon(size, 6),
            ShapeKind::Star => Self::star(size, size * 0.5, 5),
        }
    }

    /// Returns the kind of this shape
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Ball { .. } => ShapeKind::Ball,
            Self::Box { .. } => ShapeKind::Box,
            Self::Polygon { .. } => ShapeKind::Polygon,
            Self::Star { .. } => ShapeKind::Star,
        }
    }

    /// Returns the type name of the shape
    pub fn shape_type(&self) -> &'static str {
        match self {
            Self::Ball { .. } => "Ball",
            Self::Box { .. } => "Box",
            Self::Polygon { .. } => "Polygon",
            Self::Star { .. } => "Star",
        }
    }

    /// Radius of the circle used for collision, bounds and picking
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Self::Ball { radius } => radius,
            Self::Box { width, height } => 0.5 * (width * width + height * height).sqrt(),
            Self::Polygon { radius, .. } => radius,
            Self::Star { outer_radius, .. } => outer_radius,
        }
    }

    /// Area of the shape, used to derive mass from density
    pub fn area(&self) -> f32 {
        match *self {
            Self::Ball { radius } => PI * radius * radius,
            Self::Box { width, height } => width * height,
            Self::Polygon { radius, sides } => {
                let n = sides as f32;
                0.5 * n * radius * radius * (2.0 * PI / n).sin()
            }
            Self::Star { outer_radius, inner_radius, points } => {
                // 2n triangles fanned from the center, each spanning PI/n
                let n = points as f32;
                n * outer_radius * inner_radius * (PI / n).sin()
            }
        }
    }

    /// Returns the shape outline in local space (counter-clockwise, unclosed)
    pub fn local_outline(&self) -> Vec<Vector2> {
        match *self {
            Self::Ball { radius } => regular_outline(radius, BALL_OUTLINE_SEGMENTS),
            Self::Box { width, height } => {
                let hw = width * 0.5;
                let hh = height * 0.5;
                vec![
                    Vector2::new(-hw, -hh),
                    Vector2::new(hw, -hh),
                    Vector2::new(hw, hh),
                    Vector2::new(-hw, hh),
                ]
            }
            Self::Polygon { radius, sides } => regular_outline(radius, sides as usize),
            Self::Star { outer_radius, inner_radius, points } => {
                let count = points as usize * 2;
                (0..count)
                    .map(|i| {
                        let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
                        let angle = -PI / 2.0 + i as f32 * PI / points as f32;
                        Vector2::from_polar(radius, angle)
                    })
                    .collect()
            }
        }
    }

    /// Returns the outline placed at `position` and rotated by `rotation`
    pub fn world_outline(&self, position: Vector2, rotation: f32) -> Vec<Vector2> {
        let isometry = na::Isometry2::new(position.to_nalgebra(), rotation);
        self.local_outline()
            .iter()
            .map(|p| Vector2::from_point(&(isometry * p.to_point())))
            .collect()
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::ball(20.0)
    }
}

fn regular_outline(radius: f32, segments: usize) -> Vec<Vector2> {
    (0..segments)
        .map(|i| {
            let angle = -PI / 2.0 + i as f32 * 2.0 * PI / segments as f32;
            Vector2::from_polar(radius, angle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ball_and_box_areas_match_closed_forms() {
        assert_relative_eq!(Shape::ball(10.0).area(), PI * 100.0);
        assert_relative_eq!(Shape::rect(4.0, 5.0).area(), 20.0);
    }

    #[test]
    fn box_bounding_radius_is_half_diagonal() {
        assert_relative_eq!(Shape::rect(6.0, 8.0).bounding_radius(), 5.0);
    }

    #[test]
    fn hexagon_area_approaches_circle_from_below() {
        let hex = Shape::polygon(10.0, 6).area();
        assert!(hex < Shape::ball(10.0).area());
        assert_relative_eq!(hex, 1.5 * 3f32.sqrt() * 100.0, epsilon = 1e-3);
    }

    #[test]
    fn star_outline_alternates_radii() {
        let star = Shape::star(10.0, 4.0, 5);
        let outline = star.local_outline();
        assert_eq!(outline.len(), 10);
        assert_relative_eq!(outline[0].length(), 10.0, epsilon = 1e-4);
        assert_relative_eq!(outline[1].length(), 4.0, epsilon = 1e-4);
    }

    #[test]
    fn world_outline_applies_rotation_then_translation() {
        let square = Shape::rect(2.0, 2.0);
        let outline = square.world_outline(Vector2::new(10.0, 0.0), PI / 2.0);
        // (-1, -1) rotated by 90 degrees is (1, -1)
        assert_relative_eq!(outline[0], Vector2::new(11.0, -1.0), epsilon = 1e-5);
    }

    #[test]
    fn constructors_clamp_negative_sizes() {
        assert_eq!(Shape::ball(-3.0).bounding_radius(), 0.0);
        assert_eq!(Shape::polygon(5.0, 1), Shape::Polygon { radius: 5.0, sides: 3 });
    }
}
