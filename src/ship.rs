//! Fleet definitions: ship classes, orientation, and a ship's footprint on the board.

use core::fmt;

use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The five ship classes making up every fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShipClass {
    AircraftCarrier,
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
}

const LENGTHS: [usize; 5] = [5, 4, 3, 3, 2];
const NAMES: [&str; 5] = [
    "Aircraft Carrier",
    "Battleship",
    "Cruiser",
    "Destroyer",
    "Submarine",
];
const GLYPHS: [char; 5] = ['A', 'B', 'C', 'D', 'S'];

impl ShipClass {
    /// Every class, in fleet order.
    pub const ALL: [ShipClass; 5] = [
        ShipClass::AircraftCarrier,
        ShipClass::Battleship,
        ShipClass::Cruiser,
        ShipClass::Destroyer,
        ShipClass::Submarine,
    ];

    /// Position of this class within a fleet.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        LENGTHS[self.index()]
    }

    /// Display name, e.g. `"Aircraft Carrier"`.
    pub const fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Single-character marker drawn on the owner's fleet grid.
    pub const fn glyph(self) -> char {
        GLYPHS[self.index()]
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cells a ship of `length` would cover from `anchor`. A step that leaves the board yields `None`.
pub fn footprint(
    anchor: Coordinate,
    length: usize,
    orientation: Orientation,
) -> impl Iterator<Item = Option<Coordinate>> {
    (0..length).map(move |k| anchor.step(orientation, k))
}

/// A ship of a given class together with where it sits on its owner's board.
///
/// Hit state lives on the fleet grid, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    anchor: Coordinate,
    placed: bool,
}

impl Ship {
    /// An unplaced ship: anchored at the origin, horizontal.
    pub fn new(class: ShipClass) -> Self {
        Self {
            class,
            orientation: Orientation::Horizontal,
            anchor: Coordinate::default(),
            placed: false,
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn length(&self) -> usize {
        self.class.length()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Lowest-index cell the ship occupies.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Occupied cells, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        footprint(self.anchor, self.length(), self.orientation).flatten()
    }

    /// Whether the ship covers `at`.
    pub fn contains(&self, at: Coordinate) -> bool {
        self.cells().any(|c| c == at)
    }

    /// Record the committed position. Only the placement engine calls this, after validation.
    pub(crate) fn set_position(&mut self, anchor: Coordinate, orientation: Orientation) {
        self.anchor = anchor;
        self.orientation = orientation;
        self.placed = true;
    }
}
