use log::{debug, warn};

use crate::bodies::BodyDesc;
use crate::core::{BodyHandle, SimulationContext};
use crate::interaction::{InputEvent, InteractionMode};
use crate::math::Vector2;
use crate::Result;

/// Turns pointer input into registry changes.
///
/// Each `(mode, event)` combination has its own handler. The controller only
/// tracks gesture state; everything a renderer needs to see (selection, grab,
/// pending connection) lives in the [`SimulationContext`].
#[derive(Debug, Default)]
pub struct InteractionController {
    /// Where the current create gesture started
    drag_origin: Option<Vector2>,

    /// Last known pointer position
    pointer: Vector2,
}

impl InteractionController {
    /// Creates a new controller with no gesture in progress
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last known pointer position
    pub fn pointer(&self) -> Vector2 {
        self.pointer
    }

    /// Returns the start of the drag in progress, if any
    pub fn drag_origin(&self) -> Option<Vector2> {
        self.drag_origin
    }

    /// Applies one input event
    pub fn handle(&mut self, ctx: &mut SimulationContext, event: InputEvent) {
        match event {
            InputEvent::PointerDown(point) => self.pointer_down(ctx, point),
            InputEvent::PointerMove(point) => self.pointer_move(ctx, point),
            InputEvent::PointerUp(point) => self.pointer_up(ctx, point),
            InputEvent::SetMode(mode) => self.set_mode(ctx, mode),
        }
    }

    pub fn pointer_down(&mut self, ctx: &mut SimulationContext, point: Vector2) {
        self.pointer = point;
        let hit = ctx.body_at(point);

        if ctx.mode != InteractionMode::Create && hit.is_none() {
            ctx.selected = None;
        }

        match ctx.mode {
            InteractionMode::Create => self.drag_origin = Some(point),
            InteractionMode::Grab => {
                if let Some(handle) = hit {
                    self.grab(ctx, handle, point);
                }
            }
            InteractionMode::Delete => {
                if let Some(handle) = hit {
                    ctx.remove_body(handle);
                }
            }
            InteractionMode::Connect => self.connect_click(ctx, hit),
        }
    }

    pub fn pointer_move(&mut self, ctx: &mut SimulationContext, point: Vector2) {
        self.pointer = point;
        if let Some(grab) = ctx.grab.as_mut() {
            grab.pointer = point;
        }
    }

    pub fn pointer_up(&mut self, ctx: &mut SimulationContext, point: Vector2) {
        self.pointer = point;

        match ctx.mode {
            InteractionMode::Create => {
                // A release without a matching press spawns nothing
                if let Some(origin) = self.drag_origin.take() {
                    if let Err(err) = spawn_from_drag(ctx, origin, point) {
                        warn!("could not create body: {}", err);
                    }
                }
            }
            InteractionMode::Grab => ctx.release_grab(),
            InteractionMode::Delete | InteractionMode::Connect => {}
        }
    }

    /// Switches tools, abandoning any gesture in progress
    pub fn set_mode(&mut self, ctx: &mut SimulationContext, mode: InteractionMode) {
        self.drag_origin = None;
        ctx.release_grab();
        ctx.selected = None;
        ctx.connect_pending = None;

        if ctx.mode != mode {
            debug!("interaction mode {} -> {}", ctx.mode, mode);
        }
        ctx.mode = mode;
    }

    fn grab(&mut self, ctx: &mut SimulationContext, handle: BodyHandle, point: Vector2) {
        match ctx.grab_body(handle, point) {
            Ok(()) => ctx.selected = Some(handle),
            Err(err) => warn!("could not grab body: {}", err),
        }
    }

    fn connect_click(&mut self, ctx: &mut SimulationContext, hit: Option<BodyHandle>) {
        let Some(handle) = hit else {
            ctx.connect_pending = None;
            return;
        };

        match ctx.connect_pending {
            None => {
                ctx.connect_pending = Some(handle);
                ctx.selected = Some(handle);
            }
            Some(pending) if pending == handle => {}
            Some(pending) => {
                let stiffness = ctx.config.connect_stiffness;
                if let Err(err) = ctx.connect(pending, handle, stiffness) {
                    warn!("could not connect bodies: {}", err);
                }
                ctx.connect_pending = None;
                ctx.selected = Some(handle);
            }
        }
    }
}

/// Creates a body for a finished press-drag-release gesture.
///
/// Long drags launch the body from where the press started; short ones drop
/// it at rest under the release point.
fn spawn_from_drag(ctx: &mut SimulationContext, origin: Vector2, release: Vector2) -> Result<BodyHandle> {
    let drag = release - origin;
    let desc = BodyDesc::from_defaults(&ctx.config.creation);

    let desc = if drag.length() > ctx.config.launch_threshold {
        desc.with_position(origin)
            .with_velocity(drag * ctx.config.launch_velocity_gain)
    } else {
        desc.with_position(release)
    };

    ctx.create_body(desc)
}
