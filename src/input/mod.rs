//! Player input: the core event types, key bindings, and the crossterm
//! translation layer.

pub mod bindings;
pub mod event;
pub mod handler;

pub use bindings::{Command, KeyBindings};
pub use event::{InputEvent, Key};
pub use handler::InputHandler;
