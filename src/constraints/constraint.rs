use crate::core::{BodyHandle, BodyStorage};
use crate::bodies::RigidBody;

/// Base trait for constraints between bodies
pub trait Constraint: Send + Sync + 'static {
    /// Returns the type name of the constraint
    fn constraint_type(&self) -> &'static str;

    /// Returns the bodies involved in the constraint
    fn get_bodies(&self) -> &[BodyHandle];

    /// Checks if the constraint involves a specific body
    fn involves_body(&self, body: BodyHandle) -> bool {
        self.get_bodies().contains(&body)
    }

    /// Checks whether every referenced body still exists
    fn is_valid(&self, bodies: &BodyStorage<RigidBody>) -> bool {
        use crate::core::Storage;
        self.get_bodies().iter().all(|&handle| bodies.contains(handle))
    }

    /// Applies one position correction pass.
    ///
    /// `velocity_kick` converts the positional correction into a velocity
    /// change so the correction is not undone by the next integration.
    fn solve_position(&mut self, bodies: &mut BodyStorage<RigidBody>, velocity_kick: f32);
}
