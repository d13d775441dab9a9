pub mod human;

pub use human::{HumanMode, MAX_FPS, MIN_FPS};
