#![cfg(feature = "std")]

use std::io::{self, Write};

use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    ai,
    common::GameError,
    coord::Coordinate,
    game::{Game, TurnReport},
    player::{Controller, Player, PlayerKind},
    ship::Orientation,
    ui::{clear_screen, render_player_view, wait_for_key, LineSource},
};

pub const INPUT_ERROR: &str = "Input Error! Please try again.";
const POSITION_PROMPT: &str = "Please input a position (row A-J, column 1-10, e.g. B7): ";
const ORIENTATION_PROMPT: &str =
    "Please choose an orientation (H) for Horizontal or (V) for Vertical: ";

/// Parse a position such as `B7`, `b 7` or `J10`: row letter first, then the 1-based column.
pub fn parse_coordinate(input: &str) -> Option<Coordinate> {
    let input = input.trim();
    let mut chars = input.chars();
    let row_ch = chars.next()?.to_ascii_uppercase();
    if !row_ch.is_ascii_uppercase() {
        return None;
    }
    let row = (row_ch as u8 - b'A') as usize;
    let col: usize = chars.as_str().trim().parse().ok()?;
    if col == 0 {
        return None;
    }
    Coordinate::new(row, col - 1).ok()
}

pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Some(Orientation::Horizontal),
        "v" | "vertical" => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Parse the opponent menu choice: `1` for a human, `2` for the AI.
pub fn parse_opponent(input: &str) -> Option<PlayerKind> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "human" => Some(PlayerKind::Human),
        "2" | "ai" => Some(PlayerKind::Automated),
        _ => None,
    }
}

pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask `question` until `parse` accepts the answer. End of input is `GameError::InputClosed`.
pub fn prompt<I, W, T>(
    input: &mut I,
    out: &mut W,
    question: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, GameError>
where
    I: LineSource,
    W: Write,
{
    loop {
        write!(out, "{}", question)?;
        out.flush()?;
        let line = input.next_line()?.ok_or(GameError::InputClosed)?;
        if let Some(value) = parse(&line) {
            return Ok(value);
        }
        writeln!(out, "{}", INPUT_ERROR)?;
    }
}

pub fn prompt_opponent_kind<I: LineSource, W: Write>(
    input: &mut I,
    out: &mut W,
) -> Result<PlayerKind, GameError> {
    prompt(
        input,
        out,
        "Who would you like to play against?\n1. Human\n2. AI\n\nWhat is your choice? ",
        parse_opponent,
    )
}

pub fn prompt_play_again<I: LineSource, W: Write>(
    input: &mut I,
    out: &mut W,
) -> Result<bool, GameError> {
    prompt(
        input,
        out,
        "Would you like to play again? (y/n): ",
        parse_yes_no,
    )
}

/// Human player at a terminal.
pub struct CliPlayer<I: LineSource, W: Write> {
    input: I,
    output: W,
    rng: SmallRng,
    redraw: bool,
}

impl CliPlayer<io::Stdin, io::Stdout> {
    /// Player reading stdin and writing stdout.
    pub fn stdio(rng: SmallRng) -> Self {
        Self::new(io::stdin(), io::stdout(), rng)
    }
}

impl<I: LineSource, W: Write> CliPlayer<I, W> {
    /// `rng` backs the random placement offered when a position is left blank.
    pub fn new(input: I, output: W, rng: SmallRng) -> Self {
        Self {
            input,
            output,
            rng,
            redraw: true,
        }
    }

    pub fn seeded(input: I, output: W, seed: u64) -> Self {
        Self::new(input, output, SmallRng::seed_from_u64(seed))
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn show(&mut self, player: &Player) -> io::Result<()> {
        clear_screen(&mut self.output)?;
        write!(self.output, "{}", render_player_view(player))
    }

    fn pause(&mut self) -> io::Result<()> {
        wait_for_key(&mut self.input, &mut self.output)
    }

    fn report_own_guess(&mut self, game: &Game, report: &TurnReport) -> io::Result<()> {
        let me = game.player(report.attacker);
        let them = game.player(report.attacker.other());
        self.show(me)?;
        let verdict = if report.outcome.is_hit() { "hit" } else { "miss" };
        writeln!(self.output, "You guessed {}: {}.", report.coordinate, verdict)?;
        if let Some(class) = report.sunk {
            writeln!(self.output, "You sunk {}'s {}!", them.name(), class)?;
        }
        self.pause()
    }

    fn report_ai_guess(&mut self, game: &Game, report: &TurnReport) -> io::Result<()> {
        let attacker = game.player(report.attacker);
        self.show(game.player(report.attacker.other()))?;
        writeln!(
            self.output,
            "{} chose row {} and column {}",
            attacker.name(),
            report.coordinate.row_label(),
            report.coordinate.col_label()
        )?;
        if let Some(class) = report.sunk {
            writeln!(self.output, "{} sunk your {}!", attacker.name(), class)?;
        }
        self.pause()
    }
}

impl<I: LineSource, W: Write> Controller for CliPlayer<I, W> {
    fn place_ships(&mut self, player: &mut Player) -> Result<(), GameError> {
        loop {
            let Some(class) = player.board().unplaced().next() else {
                break;
            };
            self.show(player)?;
            writeln!(
                self.output,
                "{} please set the position and orientation for your {} (length {}).",
                player.name(),
                class,
                class.length()
            )?;
            writeln!(self.output, "Press enter for a random placement.")?;
            let position = prompt(&mut self.input, &mut self.output, POSITION_PROMPT, |line| {
                if line.trim().is_empty() {
                    Some(None)
                } else {
                    parse_coordinate(line).map(Some)
                }
            })?;
            let (anchor, orientation) = match position {
                Some(anchor) => {
                    let orientation = prompt(
                        &mut self.input,
                        &mut self.output,
                        ORIENTATION_PROMPT,
                        parse_orientation,
                    )?;
                    (anchor, orientation)
                }
                None => ai::random_placement(&mut self.rng, player.board(), class)?,
            };
            if let Err(e) = player.board_mut().place(class, anchor, orientation) {
                writeln!(
                    self.output,
                    "That was not a valid placement ({}). Please try again.",
                    e
                )?;
                self.pause()?;
            }
        }
        self.show(player)?;
        self.pause()?;
        Ok(())
    }

    fn select_target(&mut self, game: &Game) -> Result<Coordinate, GameError> {
        let me = game.active_player();
        if self.redraw {
            self.show(me)?;
        }
        self.redraw = true;
        writeln!(self.output, "{} what is your guess?", me.name())?;
        prompt(
            &mut self.input,
            &mut self.output,
            POSITION_PROMPT,
            parse_coordinate,
        )
    }

    fn guess_rejected(&mut self, _coord: Coordinate) {
        self.redraw = false;
        let _ = writeln!(
            self.output,
            "That was not a valid guess! Please try again."
        );
    }

    fn handle_guess_result(&mut self, game: &Game, report: &TurnReport) {
        let _ = self.report_own_guess(game, report);
    }

    fn handle_opponent_guess(&mut self, game: &Game, report: &TurnReport) {
        if game.player(report.attacker).kind() == PlayerKind::Automated {
            let _ = self.report_ai_guess(game, report);
        }
    }
}
