use log::{debug, trace, warn};
use rand::Rng;

use crate::bodies::{BodyDesc, RigidBody, RigidBodyType};
use crate::collision::{apply_bounds, resolve_collisions};
use crate::constraints::{solve_constraints, DistanceConstraint};
use crate::core::{
    BodyHandle, BodySummary, ConstraintHandle, EventQueue, FeatureFlags, RenderSnapshot,
    SimulationConfig, SimulationContext, Storage,
};
use crate::integration::{clamp_speeds, integrate_bodies};
use crate::interaction::{InputEvent, InputQueue, InteractionController, InteractionMode};
use crate::math::Vector2;
use crate::scenarios::{load_scenario, ScenarioKind};
use crate::Result;

/// The sandbox: simulation state, pointer interaction and the frame loop.
///
/// Hosts call [`SandboxWorld::step`] once per rendered frame and read the
/// result back through [`SandboxWorld::snapshot`].
#[derive(Debug, Default)]
pub struct SandboxWorld {
    /// Bodies, constraints, settings and interaction references
    context: SimulationContext,

    /// Pointer gesture state
    controller: InteractionController,

    /// Input queued by the host for the next frame
    input: InputQueue,

    /// When set, `step` leaves the simulation untouched
    paused: bool,

    /// Total scaled simulation time
    time: f32,
}

impl SandboxWorld {
    /// Creates a new empty world with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a new empty world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            context: SimulationContext::new(config),
            controller: InteractionController::new(),
            input: InputQueue::new(),
            paused: false,
            time: 0.0,
        }
    }

    /// Returns the total simulated time in seconds
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flips the pause flag and returns the new state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Returns a reference to the simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.context.config
    }

    /// Returns a mutable reference to the simulation configuration
    pub fn config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.context.config
    }

    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SimulationContext {
        &mut self.context
    }

    pub fn events(&self) -> &EventQueue {
        &self.context.events
    }

    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.context.events
    }

    /// Advances the world by one rendered frame.
    ///
    /// Queued input is applied first. The frame is then split into
    /// `sub_steps` equal sub-steps, each scaled by `time_scale`.
    pub fn step(&mut self, frame_delta: f32) {
        self.context.events.clear_collisions();

        for event in self.input.drain() {
            self.controller.handle(&mut self.context, event);
        }

        if self.paused {
            return;
        }

        let sub_steps = self.context.config.sub_steps.max(1);
        let dt = frame_delta / sub_steps as f32 * self.context.config.time_scale;
        if !(dt > 0.0 && dt.is_finite()) {
            return;
        }

        for _ in 0..sub_steps {
            self.step_simulation(dt);
        }

        self.time += dt * sub_steps as f32;
        trace!(
            "frame {:.4}s: {} bodies, {} constraints, {} contacts",
            frame_delta,
            self.context.bodies.len(),
            self.context.constraints.len(),
            self.context.events.collision_events().count()
        );
    }

    /// Performs a single sub-step of the physics simulation
    fn step_simulation(&mut self, dt: f32) {
        let ctx = &mut self.context;

        integrate_bodies(ctx, dt);

        if !ctx.constraints.is_empty() {
            let kick = ctx.config.constraint_velocity_kick;
            solve_constraints(&mut ctx.constraints, &mut ctx.bodies, kick);
        }

        if ctx.config.is_enabled(FeatureFlags::COLLISIONS) {
            resolve_collisions(ctx);
        }

        if ctx.config.is_enabled(FeatureFlags::BOUNDS) {
            apply_bounds(ctx);
        }

        clamp_speeds(ctx);
    }

    pub fn pointer_down(&mut self, point: Vector2) {
        self.controller.pointer_down(&mut self.context, point);
    }

    pub fn pointer_move(&mut self, point: Vector2) {
        self.controller.pointer_move(&mut self.context, point);
    }

    pub fn pointer_up(&mut self, point: Vector2) {
        self.controller.pointer_up(&mut self.context, point);
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        self.context.mode
    }

    pub fn set_interaction_mode(&mut self, mode: InteractionMode) {
        self.controller.set_mode(&mut self.context, mode);
    }

    /// Applies an input event immediately
    pub fn handle_input(&mut self, event: InputEvent) {
        self.controller.handle(&mut self.context, event);
    }

    /// Queues an input event for the start of the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Returns the start of the create gesture in progress, for drawing a launch guide
    pub fn drag_origin(&self) -> Option<Vector2> {
        self.controller.drag_origin()
    }

    /// Resets the world to a scenario, jittered with the thread-local RNG
    pub fn load_scenario(&mut self, kind: ScenarioKind) -> Result<()> {
        self.load_scenario_with_rng(kind, &mut rand::thread_rng())
    }

    /// Resets the world to a scenario, jittered with the given RNG
    pub fn load_scenario_with_rng<R: Rng + ?Sized>(&mut self, kind: ScenarioKind, rng: &mut R) -> Result<()> {
        load_scenario(&mut self.context, kind, rng)?;
        self.controller = InteractionController::new();
        Ok(())
    }

    /// Returns an owned copy of everything a renderer draws
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.context)
    }

    pub fn selected(&self) -> Option<BodyHandle> {
        self.context.selected
    }

    /// Returns inspector details of the selected body
    pub fn selected_summary(&self) -> Option<BodySummary> {
        BodySummary::capture(&self.context, self.context.selected?)
    }

    /// Toggles the selected body between static and dynamic
    pub fn freeze_selected(&mut self) -> Option<RigidBodyType> {
        let handle = self.context.selected?;
        if self.context.grabbed() == Some(handle) {
            self.context.release_grab();
        }
        match self.context.toggle_frozen(handle) {
            Ok(body_type) => {
                debug!("body {:?} is now {:?}", handle, body_type);
                Some(body_type)
            }
            Err(err) => {
                warn!("could not toggle body {:?}: {}", handle, err);
                None
            }
        }
    }

    /// Removes the selected body, if any
    pub fn delete_selected(&mut self) -> Option<RigidBody> {
        let handle = self.context.selected?;
        self.context.remove_body(handle)
    }

    /// Validates and creates a body from a description
    pub fn create_body(&mut self, desc: BodyDesc) -> Result<BodyHandle> {
        self.context.create_body(desc)
    }

    /// Removes a body and every constraint attached to it
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        self.context.remove_body(handle)
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.context.get_body(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.context.get_body_mut(handle)
    }

    /// Iterates over bodies in registry order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> {
        self.context.bodies.iter()
    }

    pub fn body_count(&self) -> usize {
        self.context.bodies.len()
    }

    /// Links two bodies with a distance constraint
    pub fn add_constraint(
        &mut self,
        body_a: BodyHandle,
        body_b: BodyHandle,
        rest_length: f32,
        stiffness: f32,
    ) -> Result<ConstraintHandle> {
        self.context.add_constraint(body_a, body_b, rest_length, stiffness)
    }

    /// Gets a constraint by its handle
    pub fn get_constraint(&self, handle: ConstraintHandle) -> Result<&DistanceConstraint> {
        self.context.constraints.get_constraint(handle)
    }

    pub fn remove_constraint(&mut self, handle: ConstraintHandle) -> Option<DistanceConstraint> {
        self.context.remove_constraint(handle)
    }

    /// Iterates over constraints in registry order
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintHandle, &DistanceConstraint)> {
        self.context.constraints.iter()
    }

    pub fn constraint_count(&self) -> usize {
        self.context.constraints.len()
    }

    /// Removes every body and constraint
    pub fn clear(&mut self) {
        self.context.clear();
        self.controller = InteractionController::new();
        debug!("cleared world");
    }
}
