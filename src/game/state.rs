use std::time::Duration;

use super::action::Direction;
use super::grid::{Playfield, Position};

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty: `head` and the
    /// engine rely on a head being present.
    pub body: Vec<Position>,
    /// Current heading
    pub direction: Direction,
}

impl Snake {
    /// Create a one-cell snake
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
        }
    }

    /// Create a snake from explicit segments, head first.
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty.
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least a head");
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Whether any segment, head included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push a new head; the tail is dropped unless the snake grows
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionType {
    /// Snake left the playfield
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    /// Terminal. Movement and collision checks never run again.
    GameOver(CollisionType),
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub playfield: Playfield,
    pub phase: Phase,
    /// Time accumulated towards the next step
    pub elapsed: Duration,
}

impl GameState {
    pub fn new(snake: Snake, food: Position, playfield: Playfield) -> Self {
        Self {
            snake,
            food,
            playfield,
            phase: Phase::Running,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        !self.is_running()
    }
}
