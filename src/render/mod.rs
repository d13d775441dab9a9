//! Drawing the game state

pub mod renderer;
pub mod terminal;

pub use renderer::{Renderer, Surface};
pub use terminal::{PlayfieldView, TerminalSurface};
