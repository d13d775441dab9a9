//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, KeyState};
pub use config::GameConfig;
pub use engine::{GameEngine, StepOutcome};
pub use food::FoodSpawner;
pub use grid::{Playfield, Position};
pub use state::{CollisionType, GameState, Phase, Snake};
