//! Per-player board: fleet grid, guess grid, and the ships placed on them.
//!
//! Placement validation is a pure predicate kept apart from the commit step, so a rejected
//! placement never leaves partial writes. `resolve_guess` is the only code that writes hit
//! flags or guess cells.

use core::fmt;

use log::debug;

use crate::common::{BoardError, GuessOutcome};
use crate::config::{FLEET, NUM_SHIPS};
use crate::coord::{Coordinate, Grid};
use crate::ship::{footprint, Orientation, Ship, ShipClass};

/// One cell of a player's own grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FleetCell {
    pub occupant: Option<ShipClass>,
    pub is_hit: bool,
}

/// What a player knows about one cell of the opponent's grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GuessCell {
    #[default]
    Unknown,
    Miss,
    Hit,
}

const GUESS_GLYPHS: [char; 3] = [' ', 'o', '*'];

impl GuessCell {
    /// Marker drawn on the guess grid.
    pub const fn glyph(self) -> char {
        GUESS_GLYPHS[self as usize]
    }
}

impl FleetCell {
    /// Marker drawn on the owner's fleet grid: `*` once struck, else the ship's glyph.
    pub fn glyph(&self) -> char {
        match (self.is_hit, self.occupant) {
            (true, _) => GuessCell::Hit.glyph(),
            (false, Some(class)) => class.glyph(),
            (false, None) => ' ',
        }
    }
}

pub type FleetGrid = Grid<FleetCell>;
pub type GuessGrid = Grid<GuessCell>;

/// Returns `true` if a ship of `length` fits at `anchor` without leaving the board or
/// touching an occupied cell.
pub fn is_valid_placement(
    fleet_grid: &FleetGrid,
    length: usize,
    anchor: Coordinate,
    orientation: Orientation,
) -> bool {
    footprint(anchor, length, orientation)
        .all(|cell| cell.is_some_and(|c| fleet_grid[c].occupant.is_none()))
}

/// Returns `true` when every cell of a placed `ship` has been struck.
pub fn is_sunk(ship: &Ship, fleet_grid: &FleetGrid) -> bool {
    ship.is_placed() && ship.cells().all(|c| fleet_grid[c].is_hit)
}

/// Resolve `attacker`'s guess at `at` against `defender`'s fleet.
///
/// Rejects a coordinate the attacker has already guessed without touching either board.
pub fn resolve_guess(
    at: Coordinate,
    attacker: &mut Board,
    defender: &mut Board,
) -> Result<GuessOutcome, BoardError> {
    if attacker.has_guessed(at) {
        return Err(BoardError::AlreadyGuessed(at));
    }
    let cell = &mut defender.fleet_grid[at];
    let outcome = match cell.occupant {
        Some(class) => {
            cell.is_hit = true;
            attacker.guess_grid[at] = GuessCell::Hit;
            GuessOutcome::Hit(class)
        }
        None => {
            attacker.guess_grid[at] = GuessCell::Miss;
            GuessOutcome::Miss
        }
    };
    debug!("guess at {} -> {:?}", at, outcome);
    Ok(outcome)
}

/// A player's fleet plus both of their grids.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    fleet: [Ship; NUM_SHIPS],
    fleet_grid: FleetGrid,
    guess_grid: GuessGrid,
}

impl Board {
    /// Fresh board: empty grids and all five ships unplaced.
    pub fn new() -> Self {
        Self {
            fleet: FLEET.map(Ship::new),
            fleet_grid: Grid::default(),
            guess_grid: Grid::default(),
        }
    }

    pub fn fleet(&self) -> &[Ship; NUM_SHIPS] {
        &self.fleet
    }

    pub fn ship(&self, class: ShipClass) -> &Ship {
        &self.fleet[class.index()]
    }

    pub fn fleet_grid(&self) -> &FleetGrid {
        &self.fleet_grid
    }

    pub fn guess_grid(&self) -> &GuessGrid {
        &self.guess_grid
    }

    /// Ships still waiting for a position, in fleet order.
    pub fn unplaced(&self) -> impl Iterator<Item = ShipClass> + '_ {
        self.fleet
            .iter()
            .filter(|s| !s.is_placed())
            .map(|s| s.class())
    }

    pub fn is_fleet_placed(&self) -> bool {
        self.fleet.iter().all(|s| s.is_placed())
    }

    /// Validate a placement, reporting which rule it breaks.
    pub fn check_placement(
        &self,
        class: ShipClass,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if self.ship(class).is_placed() {
            return Err(BoardError::ShipAlreadyPlaced(class));
        }
        for cell in footprint(anchor, class.length(), orientation) {
            let cell = cell.ok_or(BoardError::ShipOutOfBounds(class))?;
            if self.fleet_grid[cell].occupant.is_some() {
                return Err(BoardError::ShipOverlaps(class));
            }
        }
        Ok(())
    }

    /// Returns `true` if `class` could be placed at `anchor` right now.
    pub fn can_place(&self, class: ShipClass, anchor: Coordinate, orientation: Orientation) -> bool {
        !self.ship(class).is_placed()
            && is_valid_placement(&self.fleet_grid, class.length(), anchor, orientation)
    }

    /// Place `class` at `anchor` with `orientation`, or leave the board untouched on rejection.
    pub fn place(
        &mut self,
        class: ShipClass,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        self.check_placement(class, anchor, orientation)?;
        let ship = &mut self.fleet[class.index()];
        ship.set_position(anchor, orientation);
        for cell in ship.cells() {
            self.fleet_grid[cell] = FleetCell {
                occupant: Some(class),
                is_hit: false,
            };
        }
        debug!("placed {} at {} ({:?})", class, anchor, orientation);
        Ok(())
    }

    /// Returns `true` once this player has a guess recorded at `at`.
    pub fn has_guessed(&self, at: Coordinate) -> bool {
        self.guess_grid[at] != GuessCell::Unknown
    }

    pub fn is_sunk(&self, class: ShipClass) -> bool {
        is_sunk(self.ship(class), &self.fleet_grid)
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.fleet.iter().all(|s| is_sunk(s, &self.fleet_grid))
    }

    /// Number of ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.fleet
            .iter()
            .filter(|s| !is_sunk(s, &self.fleet_grid))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("fleet", &self.fleet)
            .field("afloat", &self.ships_afloat())
            .finish()
    }
}
