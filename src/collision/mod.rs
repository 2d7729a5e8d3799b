mod collision_pair;
mod resolver;
mod boundary;

pub use self::collision_pair::{CollisionPair, Contact};
pub use self::resolver::resolve_collisions;
pub use self::boundary::apply_bounds;
