#![cfg(feature = "std")]

//! Text rendering of a player's two grids and the small terminal helpers around it.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::{
    config::BOARD_SIZE,
    coord::Grid,
    player::Player,
};

const N: usize = BOARD_SIZE as usize;
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

fn push_columns_row(out: &mut String) {
    out.push_str("  ");
    for c in 1..=N {
        let _ = write!(out, " {:<3}", c);
    }
}

fn push_separator(out: &mut String) {
    out.push(' ');
    for _ in 0..N {
        out.push_str("+---");
    }
    out.push('+');
}

fn push_grid_row<T>(out: &mut String, grid: &Grid<T>, row: usize, glyph: impl Fn(&T) -> char) {
    out.push((b'A' + row as u8) as char);
    out.push('|');
    for cell in grid.row(row).into_iter().flatten() {
        let _ = write!(out, " {} |", glyph(cell));
    }
}

/// Fleet grid (left) and guess grid (right) side by side.
pub fn render_player_view(player: &Player) -> String {
    let board = player.board();
    let mut out = String::new();
    push_columns_row(&mut out);
    out.push(' ');
    push_columns_row(&mut out);
    out.push('\n');
    for row in 0..N {
        push_separator(&mut out);
        out.push(' ');
        push_separator(&mut out);
        out.push('\n');
        push_grid_row(&mut out, board.fleet_grid(), row, |cell| cell.glyph());
        out.push(' ');
        push_grid_row(&mut out, board.guess_grid(), row, |cell| cell.glyph());
        out.push('\n');
    }
    push_separator(&mut out);
    out.push(' ');
    push_separator(&mut out);
    out.push('\n');
    out
}

/// Clear the terminal and move the cursor home.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    out.flush()
}

/// Line-oriented input. Each instance over `Stdin` locks per call, so several readers can share
/// the terminal in a hot-seat game.
pub trait LineSource {
    /// Next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

fn read_trimmed<R: io::BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(Some(line))
}

impl LineSource for io::Stdin {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        read_trimmed(&mut self.lock())
    }
}

impl<T: AsRef<[u8]>> LineSource for io::Cursor<T> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        read_trimmed(self)
    }
}

/// Print a pause prompt and block until a line is entered.
pub fn wait_for_key<I: LineSource, W: Write>(input: &mut I, out: &mut W) -> io::Result<()> {
    write!(out, "Press enter to continue...")?;
    out.flush()?;
    input.next_line()?;
    writeln!(out)
}
