use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    ai,
    common::GameError,
    coord::Coordinate,
    game::Game,
    player::{Controller, Player},
};

/// Automated player that places and guesses uniformly at random.
///
/// Owns its randomness provider so tests can inject a seeded one.
pub struct AiPlayer<R: Rng = SmallRng> {
    rng: R,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl AiPlayer<SmallRng> {
    /// AI with a reproducible `SmallRng`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// AI seeded from the thread-local entropy source.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> Controller for AiPlayer<R> {
    fn place_ships(&mut self, player: &mut Player) -> Result<(), GameError> {
        let board = player.board_mut();
        loop {
            let Some(class) = board.unplaced().next() else {
                return Ok(());
            };
            let (anchor, orientation) = ai::random_placement(&mut self.rng, board, class)?;
            board.place(class, anchor, orientation)?;
        }
    }

    fn select_target(&mut self, _game: &Game) -> Result<Coordinate, GameError> {
        Ok(ai::random_coordinate(&mut self.rng))
    }
}
