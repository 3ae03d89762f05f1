// Random move generation for the automated opponent.
// Draws are memoryless: callers reject and resample repeated or invalid picks.

use log::debug;
use rand::Rng;

use crate::{
    board::{is_valid_placement, Board},
    common::BoardError,
    config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS},
    coord::Coordinate,
    ship::{Orientation, ShipClass},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Uniform draw over every cell of the board.
pub fn random_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    Coordinate::from_index(rng.random_range(0..GRID_SIZE * GRID_SIZE))
}

/// Uniform draw over both orientations.
pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Draw random anchors and orientations for `class` until one fits on `board`.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    class: ShipClass,
) -> Result<(Coordinate, Orientation), BoardError> {
    if board.ship(class).is_placed() {
        return Err(BoardError::ShipAlreadyPlaced(class));
    }
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let anchor = random_coordinate(rng);
        let orientation = random_orientation(rng);
        if is_valid_placement(board.fleet_grid(), class.length(), anchor, orientation) {
            debug!("random placement for {} found after {} attempts", class, attempt);
            return Ok((anchor, orientation));
        }
    }
    Err(BoardError::UnableToPlaceShip(class))
}
