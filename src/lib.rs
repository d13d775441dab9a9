//! Term Snake - the classic grid Snake game in a terminal
//!
//! This library provides:
//! - Core game logic (game module): movement, collisions, food placement,
//!   fixed-interval stepping
//! - Keyboard input mapping (input module)
//! - Rendering through a rectangle-filling surface, with a ratatui backend
//!   (render module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
