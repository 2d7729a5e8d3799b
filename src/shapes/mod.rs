mod shape;

pub use self::shape::{Shape, ShapeKind};
