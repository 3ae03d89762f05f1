//! Turn engine: alternates the active player, resolves guesses, detects sinks and victory.

use log::{debug, info};

use crate::{
    board::resolve_guess,
    common::{BoardError, GameError, GuessOutcome},
    coord::Coordinate,
    player::{Controller, Player, PlayerId},
    ship::ShipClass,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    /// Waiting for the given player to submit a guess.
    AwaitingGuess(PlayerId),
    /// Terminal: the given player sank the whole enemy fleet.
    GameOver(PlayerId),
}

/// Everything that happened during one resolved guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnReport {
    pub attacker: PlayerId,
    pub coordinate: Coordinate,
    pub outcome: GuessOutcome,
    /// Set when this guess sank the struck ship.
    pub sunk: Option<ShipClass>,
    /// Set when this guess sank the defender's last ship.
    pub winner: Option<PlayerId>,
}

/// One game between two players with fully placed fleets.
pub struct Game {
    players: [Player; 2],
    status: GameStatus,
    turns: usize,
}

impl Game {
    /// Start a game. `player1` moves first; both fleets must already be placed.
    pub fn new(player1: Player, player2: Player) -> Result<Self, BoardError> {
        for player in [&player1, &player2] {
            if let Some(class) = player.board().unplaced().next() {
                return Err(BoardError::ShipNotPlaced(class));
            }
        }
        Ok(Self {
            players: [player1, player2],
            status: GameStatus::AwaitingGuess(PlayerId::One),
            turns: 0,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player whose turn it is, or the winner once the game is over.
    pub fn active(&self) -> PlayerId {
        match self.status {
            GameStatus::AwaitingGuess(id) | GameStatus::GameOver(id) => id,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::GameOver(id) => Some(id),
            GameStatus::AwaitingGuess(_) => None,
        }
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn active_player(&self) -> &Player {
        self.player(self.active())
    }

    /// The player on the receiving end of the active player's guesses.
    pub fn opponent(&self) -> &Player {
        self.player(self.active().other())
    }

    /// Number of resolved guesses so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Hand both players back, e.g. to inspect final boards.
    pub fn into_players(self) -> [Player; 2] {
        self.players
    }

    /// Submit the active player's guess at `at`.
    ///
    /// A repeated guess is rejected with no side effects and the turn does not pass.
    /// Otherwise the guess is resolved, sinks and victory are checked, and the turn passes
    /// to the other player unless the game just ended.
    pub fn submit_guess(&mut self, at: Coordinate) -> Result<TurnReport, BoardError> {
        let GameStatus::AwaitingGuess(attacker) = self.status else {
            return Err(BoardError::GameOver);
        };
        let [one, two] = &mut self.players;
        let (active, other) = match attacker {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        };

        let outcome = resolve_guess(at, active.board_mut(), other.board_mut())?;
        self.turns += 1;

        let sunk = outcome.struck().filter(|&class| other.board().is_sunk(class));
        if let Some(class) = sunk {
            info!("{} sank {}'s {}", active.name(), other.name(), class);
        }

        let winner = if other.board().all_sunk() {
            info!("{} wins after {} turns", active.name(), self.turns);
            self.status = GameStatus::GameOver(attacker);
            Some(attacker)
        } else {
            self.status = GameStatus::AwaitingGuess(attacker.other());
            None
        };

        Ok(TurnReport {
            attacker,
            coordinate: at,
            outcome,
            sunk,
            winner,
        })
    }

    /// Ask `controller` for guesses until one is accepted, then resolve it.
    ///
    /// A finished game is rejected before the controller is consulted.
    pub fn play_turn(&mut self, controller: &mut dyn Controller) -> Result<TurnReport, GameError> {
        if self.is_over() {
            return Err(BoardError::GameOver.into());
        }
        loop {
            let at = controller.select_target(self)?;
            match self.submit_guess(at) {
                Ok(report) => return Ok(report),
                Err(BoardError::AlreadyGuessed(at)) => {
                    debug!("{} repeated guess {}", self.active_player().name(), at);
                    controller.guess_rejected(at);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Drive both controllers until one fleet is sunk and return the winner.
    pub fn run(
        &mut self,
        controllers: [&mut dyn Controller; 2],
    ) -> Result<PlayerId, GameError> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            let attacker = self.active();
            let report = self.play_turn(&mut *controllers[attacker.index()])?;
            controllers[attacker.index()].handle_guess_result(self, &report);
            controllers[attacker.other().index()].handle_opponent_guess(self, &report);
        }
    }
}
