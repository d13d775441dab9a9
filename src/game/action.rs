/// Heading the snake travels in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Unit delta (dx, dy) in a y-up world
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Picks the next heading from the keys held this frame.
    ///
    /// Keys are checked in the order Up, Down, Left, Right and the last one
    /// that does not reverse `self` wins. Every key is compared against the
    /// heading the call started with, so the result is never `self`'s
    /// opposite no matter which keys are held together.
    pub fn steer(self, keys: KeyState) -> Direction {
        let candidates = [
            (keys.up, Direction::Up),
            (keys.down, Direction::Down),
            (keys.left, Direction::Left),
            (keys.right, Direction::Right),
        ];

        candidates
            .into_iter()
            .filter(|&(pressed, direction)| pressed && !self.is_opposite(direction))
            .map(|(_, direction)| direction)
            .last()
            .unwrap_or(self)
    }
}

/// Directional keys held during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    pub fn none() -> Self {
        Self::default()
    }

    /// Only the key for `direction` held
    pub fn only(direction: Direction) -> Self {
        let mut keys = Self::default();
        keys.set(direction, true);
        keys
    }

    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}
