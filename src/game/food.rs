use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grid::{Playfield, Position};

/// Places food on a uniformly random cell.
///
/// Occupancy is not checked: food can land under the snake and stays there
/// until the head reaches it.
pub struct FoodSpawner<R: Rng = StdRng> {
    rng: R,
}

impl FoodSpawner<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FoodSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn spawn(&mut self, playfield: &Playfield) -> Position {
        let column = self.rng.gen_range(0..playfield.columns());
        let row = self.rng.gen_range(0..playfield.rows());
        playfield.cell(column, row)
    }
}
