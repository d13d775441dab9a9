use super::action::Direction;

/// A cell on the playfield, in logical units aligned to the grid step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move one grid step in a direction
    pub fn stepped(&self, direction: Direction, grid_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * grid_size, dy * grid_size)
    }
}

/// Bounds of the drawing surface and the size of one grid cell.
///
/// The origin is the bottom-left corner and y grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    pub grid_size: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32, grid_size: i32) -> Self {
        Self {
            width,
            height,
            grid_size,
        }
    }

    /// Whether `pos` lies in `[0, width) x [0, height)`
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn columns(&self) -> i32 {
        self.width / self.grid_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.grid_size
    }

    /// Cell at a column/row index
    pub fn cell(&self, column: i32, row: i32) -> Position {
        Position::new(column * self.grid_size, row * self.grid_size)
    }

    /// Cell containing a continuous point
    pub fn snap(&self, x: f32, y: f32) -> Position {
        let grid = self.grid_size as f32;
        self.cell((x / grid).floor() as i32, (y / grid).floor() as i32)
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(1200, 800, 25)
    }
}
