use std::time::Duration;

use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;

use super::{
    action::{Direction, KeyState},
    config::GameConfig,
    food::FoodSpawner,
    grid::Position,
    state::{CollisionType, GameState, Phase, Snake},
};

/// What a single simulation step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head moved forward, tail followed
    Moved,
    /// Head reached the food; the snake grew by one and new food was placed
    Ate,
    /// The step ended the game
    Collided(CollisionType),
    /// The game was already over, nothing changed
    Frozen,
}

/// The game engine that handles all game logic
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    food: FoodSpawner<R>,
}

impl GameEngine<StdRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_spawner(config, FoodSpawner::from_entropy())
    }

    /// Engine whose food placement is reproducible
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_spawner(config, FoodSpawner::seeded(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_spawner(config: GameConfig, food: FoodSpawner<R>) -> Self {
        Self { config, food }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Initial state: one-cell snake heading right, food placed
    pub fn new_game(&mut self) -> GameState {
        let playfield = self.config.playfield();
        let snake = Snake::new(self.config.start_position(), Direction::Right);
        let food = self.food.spawn(&playfield);

        GameState::new(snake, food, playfield)
    }

    /// Run one frame: apply the held keys, then let time pass.
    ///
    /// Input is applied in every phase, but the simulation only moves while
    /// the game is running.
    pub fn frame(
        &mut self,
        state: &mut GameState,
        delta: Duration,
        keys: KeyState,
    ) -> Option<StepOutcome> {
        state.snake.direction = state.snake.direction.steer(keys);
        self.advance(state, delta)
    }

    /// Accumulate `delta` and step once the interval is reached.
    ///
    /// At most one step per call. The accumulator is reset to zero after a
    /// step, so time beyond the interval is dropped.
    pub fn advance(&mut self, state: &mut GameState, delta: Duration) -> Option<StepOutcome> {
        if !state.is_running() {
            return None;
        }

        state.elapsed += delta;
        if state.elapsed < self.config.step_interval() {
            return None;
        }

        let outcome = self.step(state);
        state.elapsed = Duration::ZERO;
        Some(outcome)
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState) -> StepOutcome {
        if !state.is_running() {
            return StepOutcome::Frozen;
        }

        let new_head = state
            .snake
            .head()
            .stepped(state.snake.direction, state.playfield.grid_size);

        if let Some(collision) = self.check_collision(state, new_head) {
            state.phase = Phase::GameOver(collision);
            info!(
                "game over: {:?} at ({}, {}), length {}",
                collision,
                new_head.x,
                new_head.y,
                state.snake.len()
            );
            return StepOutcome::Collided(collision);
        }

        let ate_food = new_head == state.food;
        state.snake.advance(new_head, ate_food);

        if ate_food {
            state.food = self.food.spawn(&state.playfield);
            debug!(
                "food eaten, length {}, next food at ({}, {})",
                state.snake.len(),
                state.food.x,
                state.food.y
            );
            StepOutcome::Ate
        } else {
            StepOutcome::Moved
        }
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.playfield.contains(pos) {
            return Some(CollisionType::Wall);
        }

        // The tail has not moved yet, so it still counts as body
        if state.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}
