//! Board addressing: a bounds-checked `Coordinate` and the fixed-size `Grid` it indexes.
//!
//! Every cell access in the engine goes through a `Coordinate`, so the only place a raw
//! row/column pair is checked is at construction time.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

const N: usize = BOARD_SIZE as usize;
const CELLS: usize = N * N;

/// A cell on the board, `row` and `col` both in `[0, BOARD_SIZE)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Build a coordinate, rejecting anything past the board edge.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= N || col >= N {
            return Err(BoardError::OutOfBounds {
                row: row as i64,
                col: col as i64,
            });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// The cell `k` steps from `self` along `orientation`, or `None` once it leaves the board.
    pub fn step(&self, orientation: Orientation, k: usize) -> Option<Self> {
        let (row, col) = match orientation {
            Orientation::Horizontal => (self.row(), self.col().checked_add(k)?),
            Orientation::Vertical => (self.row().checked_add(k)?, self.col()),
        };
        Self::new(row, col).ok()
    }

    /// Row label as shown to players, `'A'` for the first row.
    pub fn row_label(&self) -> char {
        (b'A' + self.row) as char
    }

    /// One-based column number as shown to players.
    pub fn col_label(&self) -> usize {
        self.col() + 1
    }

    /// Cell at row-major position `index`, wrapping past the last cell.
    pub(crate) const fn from_index(index: usize) -> Self {
        let index = index % CELLS;
        Self {
            row: (index / N) as u8,
            col: (index % N) as u8,
        }
    }

    /// Iterator over all cells in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..CELLS).map(Coordinate::from_index)
    }
}

impl TryFrom<(i32, i32)> for Coordinate {
    type Error = BoardError;

    /// Signed construction, rejecting negative components as well as the upper edge.
    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        let out = BoardError::OutOfBounds {
            row: row as i64,
            col: col as i64,
        };
        let row = usize::try_from(row).map_err(|_| out)?;
        let col = usize::try_from(col).map_err(|_| out)?;
        Self::new(row, col).map_err(|_| out)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_label(), self.col_label())
    }
}

/// An owned `BOARD_SIZE × BOARD_SIZE` grid of cells, indexed by `Coordinate`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<T> {
    cells: [[T; N]; N],
}

impl<T: Copy> Grid<T> {
    /// Grid with every cell set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            cells: [[value; N]; N],
        }
    }
}

impl<T> Grid<T> {
    /// One row of the grid. `None` if `row` is past the last row.
    pub fn row(&self, row: usize) -> Option<&[T; N]> {
        self.cells.get(row)
    }

    /// Iterator over `(coordinate, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        Coordinate::all().map(move |c| (c, &self[c]))
    }
}

impl<T: Copy + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}

impl<T> Index<Coordinate> for Grid<T> {
    type Output = T;

    fn index(&self, at: Coordinate) -> &T {
        &self.cells[at.row()][at.col()]
    }
}

impl<T> IndexMut<Coordinate> for Grid<T> {
    fn index_mut(&mut self, at: Coordinate) -> &mut T {
        &mut self.cells[at.row()][at.col()]
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}
