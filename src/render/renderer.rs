use ratatui::style::Color;

use crate::game::GameState;

/// Something that can be cleared and filled with axis-aligned rectangles.
///
/// Coordinates are logical playfield units, origin at the bottom-left.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);
}

pub const BACKGROUND: Color = Color::Black;
pub const FOOD: Color = Color::Red;
pub const SNAKE: Color = Color::Green;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame: background, then food, then every segment
    pub fn draw<S: Surface>(&self, state: &GameState, surface: &mut S) {
        let size = state.playfield.grid_size;

        surface.clear(BACKGROUND);
        surface.fill_rect(state.food.x, state.food.y, size, size, FOOD);

        for segment in &state.snake.body {
            surface.fill_rect(segment.x, segment.y, size, size, SNAKE);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
