//! Keyboard input for the terminal front end

pub mod handler;

pub use handler::{InputHandler, KeyAction};
