use alloc::string::String;

use crate::{
    board::Board,
    common::{BoardError, GameError},
    coord::Coordinate,
    game::{Game, TurnReport},
};

/// Who supplies a player's placements and guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum PlayerKind {
    Human,
    Automated,
}

/// Seat at the table. `One` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// A participant: their kind, display name, and the board they own exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    kind: PlayerKind,
    name: String,
    board: Board,
}

impl Player {
    pub fn new(kind: PlayerKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            board: Board::new(),
        }
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for ship placement during setup.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// Interface implemented by the different sources of moves.
pub trait Controller {
    /// Place every unplaced ship onto `player`'s board.
    fn place_ships(&mut self, player: &mut Player) -> Result<(), GameError>;

    /// Choose the next coordinate for the active player of `game`.
    fn select_target(&mut self, game: &Game) -> Result<Coordinate, GameError>;

    /// The last coordinate from `select_target` was already guessed; another will be requested.
    fn guess_rejected(&mut self, _coord: Coordinate) {}

    /// Inform the controller of the result of its own guess.
    fn handle_guess_result(&mut self, _game: &Game, _report: &TurnReport) {}

    /// Inform the controller of an opponent guess against its board.
    fn handle_opponent_guess(&mut self, _game: &Game, _report: &TurnReport) {}
}

/// Run `controller`'s placement for `player`, then confirm the whole fleet is down.
pub fn setup_player(player: &mut Player, controller: &mut dyn Controller) -> Result<(), GameError> {
    controller.place_ships(player)?;
    match player.board().unplaced().next() {
        Some(class) => Err(BoardError::ShipNotPlaced(class).into()),
        None => Ok(()),
    }
}
