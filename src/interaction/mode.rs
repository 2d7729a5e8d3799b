use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// What a pointer press does on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum InteractionMode {
    /// Press and release spawns a body, launched if the pointer was dragged
    #[default]
    Create,

    /// Press drags the body under the pointer
    Grab,

    /// Press removes the body under the pointer
    Delete,

    /// Two presses on different bodies link them
    Connect,
}

impl InteractionMode {
    pub const ALL: [InteractionMode; 4] = [
        InteractionMode::Create,
        InteractionMode::Grab,
        InteractionMode::Delete,
        InteractionMode::Connect,
    ];

    /// Returns the lowercase name of the mode
    pub fn name(self) -> &'static str {
        match self {
            InteractionMode::Create => "create",
            InteractionMode::Grab => "grab",
            InteractionMode::Delete => "delete",
            InteractionMode::Connect => "connect",
        }
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
