//! Common types for Broadside: board errors and guess outcomes.

use thiserror::Error;

use crate::coord::Coordinate;
use crate::ship::ShipClass;

/// Outcome of resolving a single guess against the defender's fleet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GuessOutcome {
    /// Guess landed on open water.
    Miss,
    /// Guess struck a segment of the given ship.
    Hit(ShipClass),
}

impl GuessOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, GuessOutcome::Hit(_))
    }

    /// Class of the struck ship, if any.
    pub fn struck(&self) -> Option<ShipClass> {
        match self {
            GuessOutcome::Hit(class) => Some(*class),
            GuessOutcome::Miss => None,
        }
    }
}

/// Rejections returned by board and turn operations. None of them leave partial writes behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Row or column lies outside the board.
    #[error("coordinate (row {row}, col {col}) is off the board")]
    OutOfBounds { row: i64, col: i64 },
    /// Ship would extend past the edge of the board.
    #[error("{0} placement is out of bounds")]
    ShipOutOfBounds(ShipClass),
    /// Ship placement overlaps another ship.
    #[error("{0} placement overlaps with another ship")]
    ShipOverlaps(ShipClass),
    /// Attempted to place a ship that is already placed.
    #[error("{0} is already placed on the board")]
    ShipAlreadyPlaced(ShipClass),
    /// Play cannot start while a ship is still unplaced.
    #[error("{0} has not been placed yet")]
    ShipNotPlaced(ShipClass),
    /// Random placement gave up after exhausting its attempts.
    #[error("unable to place {0}")]
    UnableToPlaceShip(ShipClass),
    /// Guess was already made at this position.
    #[error("{0} was already guessed")]
    AlreadyGuessed(Coordinate),
    /// A guess was submitted after the game ended.
    #[error("the game is already over")]
    GameOver,
}

/// Errors surfaced by controllers and the game drivers.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The input source ran dry before a valid answer was read.
    #[error("input closed before a valid answer was entered")]
    InputClosed,
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
