mod mode;
mod input;
mod controller;

pub use self::mode::InteractionMode;
pub use self::input::{InputEvent, InputQueue};
pub use self::controller::InteractionController;
