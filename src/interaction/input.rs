use crate::interaction::InteractionMode;
use crate::math::Vector2;

/// Pointer and mode input, in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch or click began
    PointerDown(Vector2),

    /// A touch or cursor moved
    PointerMove(Vector2),

    /// A touch or click ended
    PointerUp(Vector2),

    /// The host switched the active tool
    SetMode(InteractionMode),
}

/// Events queued by the host and applied at the start of the next frame
#[derive(Debug)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Queues an event
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Takes every pending event, leaving the queue empty
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterates over pending events without consuming them
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::SetMode(InteractionMode::Grab));
        queue.push(InputEvent::PointerDown(Vector2::new(1.0, 2.0)));
        assert_eq!(queue.len(), 2);

        let events = queue.drain();
        assert_eq!(events[0], InputEvent::SetMode(InteractionMode::Grab));
        assert_eq!(events[1], InputEvent::PointerDown(Vector2::new(1.0, 2.0)));
        assert!(queue.is_empty());
    }
}
