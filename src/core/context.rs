use log::debug;

use crate::bodies::{BodyDesc, RigidBody, RigidBodyType};
use crate::constraints::{Constraint, DistanceConstraint};
use crate::core::events::{BodyEventType, ConstraintEventType};
use crate::core::{
    BodyHandle, BodyStorage, ConstraintHandle, ConstraintStorage, EventQueue, SimulationConfig,
    Storage,
};
use crate::error::SandboxError;
use crate::interaction::InteractionMode;
use crate::math::Vector2;
use crate::Result;

/// The body currently following the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrabState {
    /// The grabbed body
    pub body: BodyHandle,

    /// Latest pointer position
    pub pointer: Vector2,

    /// Body position relative to the pointer at the moment of the grab
    pub offset: Vector2,
}

/// All mutable simulation state, passed explicitly to each phase.
///
/// Every handle stored here (selection, grab, pending connection) is cleared
/// as soon as the body it names is removed, so phases never meet a dangling
/// reference.
#[derive(Debug)]
pub struct SimulationContext {
    pub bodies: BodyStorage<RigidBody>,
    pub constraints: ConstraintStorage<DistanceConstraint>,
    pub config: SimulationConfig,
    pub events: EventQueue,
    pub mode: InteractionMode,
    pub selected: Option<BodyHandle>,
    pub grab: Option<GrabState>,
    pub connect_pending: Option<BodyHandle>,

    /// Friction setting in effect before a frictionless scenario switched it off
    pub saved_friction: Option<bool>,
}

impl SimulationContext {
    /// Creates an empty context with the given configuration
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            bodies: BodyStorage::new(),
            constraints: ConstraintStorage::new(),
            config,
            events: EventQueue::new(),
            mode: InteractionMode::default(),
            selected: None,
            grab: None,
            connect_pending: None,
            saved_friction: None,
        }
    }

    /// Adds an already built body and returns its handle
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = self.bodies.add(body);
        self.events.add_body_event(BodyEventType::Added, handle);
        debug!("added body {:?}", handle);
        handle
    }

    /// Validates and creates a body from a description
    pub fn create_body(&mut self, desc: BodyDesc) -> Result<BodyHandle> {
        let body = desc.build()?;
        Ok(self.add_body(body))
    }

    /// Removes a body together with every constraint that references it.
    ///
    /// Removing a handle that no longer resolves is a no-op.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        let body = self.bodies.remove(handle)?;

        let removed = self.constraints.retain(|constraint| !constraint.involves_body(handle));
        for constraint in &removed {
            self.events.add_constraint_event(ConstraintEventType::Removed, *constraint);
        }

        if self.selected == Some(handle) {
            self.selected = None;
        }
        if self.grab.map(|grab| grab.body) == Some(handle) {
            self.grab = None;
        }
        if self.connect_pending == Some(handle) {
            self.connect_pending = None;
        }

        self.events.add_body_event(BodyEventType::Removed, handle);
        debug!("removed body {:?} and {} constraint(s)", handle, removed.len());

        Some(body)
    }

    /// Gets a body by handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable body by handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies.get_body_mut(handle)
    }

    /// Links two distinct, existing bodies with a distance constraint
    pub fn add_constraint(
        &mut self,
        body_a: BodyHandle,
        body_b: BodyHandle,
        rest_length: f32,
        stiffness: f32,
    ) -> Result<ConstraintHandle> {
        if body_a == body_b {
            return Err(SandboxError::InvalidConstraint(format!(
                "cannot constrain body {:?} to itself",
                body_a
            )));
        }
        self.bodies.get_body(body_a)?;
        self.bodies.get_body(body_b)?;

        let handle = self.constraints.add(DistanceConstraint::new(body_a, body_b, rest_length, stiffness));
        self.events.add_constraint_event(ConstraintEventType::Added, handle);
        debug!("linked {:?} and {:?} with rest length {}", body_a, body_b, rest_length);
        Ok(handle)
    }

    /// Links two bodies at their current distance
    pub fn connect(&mut self, body_a: BodyHandle, body_b: BodyHandle, stiffness: f32) -> Result<ConstraintHandle> {
        let a = self.bodies.get_body(body_a)?.get_position();
        let b = self.bodies.get_body(body_b)?.get_position();
        self.add_constraint(body_a, body_b, a.distance(&b), stiffness)
    }

    /// Removes a single constraint
    pub fn remove_constraint(&mut self, handle: ConstraintHandle) -> Option<DistanceConstraint> {
        let constraint = self.constraints.remove(handle)?;
        self.events.add_constraint_event(ConstraintEventType::Removed, handle);
        Some(constraint)
    }

    /// Returns the topmost body whose bounding circle contains `point`.
    ///
    /// Later bodies are drawn on top, so the search runs in reverse registry
    /// order.
    pub fn body_at(&self, point: Vector2) -> Option<BodyHandle> {
        self.bodies
            .handles()
            .into_iter()
            .rev()
            .find(|&handle| {
                self.bodies
                    .get(handle)
                    .is_some_and(|body| body.contains_point(point))
            })
    }

    /// Returns the grabbed body, if any
    pub fn grabbed(&self) -> Option<BodyHandle> {
        self.grab.map(|grab| grab.body)
    }

    /// Starts dragging `handle`, releasing any body grabbed before.
    ///
    /// The body's velocity is zeroed so leftover motion does not fight the drag.
    pub fn grab_body(&mut self, handle: BodyHandle, pointer: Vector2) -> Result<()> {
        let body = self.bodies.get_body_mut(handle)?;
        body.stop();
        let offset = body.get_position() - pointer;

        self.release_grab();
        self.grab = Some(GrabState { body: handle, pointer, offset });
        self.events.add_body_event(BodyEventType::Grabbed, handle);
        Ok(())
    }

    /// Lets go of the grabbed body, if any
    pub fn release_grab(&mut self) {
        if let Some(grab) = self.grab.take() {
            self.events.add_body_event(BodyEventType::Released, grab.body);
        }
    }

    /// Toggles a body between static and dynamic, zeroing its velocity
    pub fn toggle_frozen(&mut self, handle: BodyHandle) -> Result<RigidBodyType> {
        let body = self.bodies.get_body_mut(handle)?;
        let body_type = body.get_body_type().toggled();
        if body_type == RigidBodyType::Dynamic && body.get_mass() <= 0.0 {
            return Err(SandboxError::InvalidParameter(format!(
                "body {:?} has no mass and cannot become dynamic",
                handle
            )));
        }
        body.set_body_type(body_type);
        body.stop();

        let event = match body_type {
            RigidBodyType::Static => BodyEventType::Frozen,
            RigidBodyType::Dynamic => BodyEventType::Unfrozen,
        };
        self.events.add_body_event(event, handle);
        Ok(body_type)
    }

    /// Clears interaction references (selection, grab, pending connection)
    pub fn clear_interaction(&mut self) {
        self.selected = None;
        self.grab = None;
        self.connect_pending = None;
    }

    /// Replaces bodies and constraints in one move.
    ///
    /// Callers build the new sets separately, so no observer ever sees a mix
    /// of old and new entries.
    pub fn replace_contents(
        &mut self,
        bodies: BodyStorage<RigidBody>,
        constraints: ConstraintStorage<DistanceConstraint>,
    ) {
        self.bodies = bodies;
        self.constraints = constraints;
        self.clear_interaction();
    }

    /// Removes every body and constraint
    pub fn clear(&mut self) {
        self.replace_contents(BodyStorage::new(), ConstraintStorage::new());
    }
}

impl Default for SimulationContext {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
