use broadside::{
    is_sunk, is_valid_placement, resolve_guess, Board, BoardError, Coordinate, FleetCell,
    GuessCell, GuessOutcome, Orientation, ShipClass, BOARD_SIZE,
};

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

#[test]
fn test_submarine_fits_against_right_edge() {
    let mut board = Board::new();
    assert!(is_valid_placement(
        board.fleet_grid(),
        ShipClass::Submarine.length(),
        at(0, 8),
        Orientation::Horizontal
    ));
    board
        .place(ShipClass::Submarine, at(0, 8), Orientation::Horizontal)
        .unwrap();

    let cells: Vec<_> = board.ship(ShipClass::Submarine).cells().collect();
    assert_eq!(cells, vec![at(0, 8), at(0, 9)]);
    assert_eq!(
        board.fleet_grid()[at(0, 9)],
        FleetCell {
            occupant: Some(ShipClass::Submarine),
            is_hit: false
        }
    );
}

#[test]
fn test_submarine_past_right_edge_rejected() {
    let mut board = Board::new();
    assert!(!is_valid_placement(
        board.fleet_grid(),
        2,
        at(0, 9),
        Orientation::Horizontal
    ));
    assert_eq!(
        board.place(ShipClass::Submarine, at(0, 9), Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds(ShipClass::Submarine))
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_vertical_past_bottom_edge_rejected() {
    let mut board = Board::new();
    let last = BOARD_SIZE as usize - 1;
    assert_eq!(
        board.place(
            ShipClass::AircraftCarrier,
            at(last - 3, 0),
            Orientation::Vertical
        ),
        Err(BoardError::ShipOutOfBounds(ShipClass::AircraftCarrier))
    );
    board
        .place(
            ShipClass::AircraftCarrier,
            at(last - 4, 0),
            Orientation::Vertical
        )
        .unwrap();
    assert!(board.ship(ShipClass::AircraftCarrier).contains(at(last, 0)));
}

#[test]
fn test_overlap_rejected_and_grid_unchanged() {
    let mut board = Board::new();
    board
        .place(ShipClass::Battleship, at(4, 2), Orientation::Horizontal)
        .unwrap();
    let before = board.clone();

    // Crosses the battleship at (4, 4).
    assert_eq!(
        board.place(ShipClass::Cruiser, at(2, 4), Orientation::Vertical),
        Err(BoardError::ShipOverlaps(ShipClass::Cruiser))
    );
    assert_eq!(board.fleet_grid(), before.fleet_grid());
    assert_eq!(board, before);
    assert!(!board.ship(ShipClass::Cruiser).is_placed());
}

#[test]
fn test_ship_cannot_be_placed_twice() {
    let mut board = Board::new();
    board
        .place(ShipClass::Destroyer, at(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board.place(ShipClass::Destroyer, at(5, 5), Orientation::Vertical),
        Err(BoardError::ShipAlreadyPlaced(ShipClass::Destroyer))
    );
    assert_eq!(board.ship(ShipClass::Destroyer).anchor(), at(0, 0));
}

#[test]
fn test_unplaced_ship_is_placeholder() {
    let board = Board::new();
    let ship = board.ship(ShipClass::Battleship);
    assert!(!ship.is_placed());
    assert_eq!(ship.anchor(), at(0, 0));
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert!(!board.is_sunk(ShipClass::Battleship));
    assert!(!board.all_sunk());
    assert_eq!(board.unplaced().count(), 5);
}

#[test]
fn test_hit_then_repeat_guess_rejected() {
    let mut attacker = Board::new();
    let mut defender = Board::new();
    defender
        .place(ShipClass::Destroyer, at(3, 3), Orientation::Horizontal)
        .unwrap();

    assert_eq!(
        resolve_guess(at(3, 3), &mut attacker, &mut defender),
        Ok(GuessOutcome::Hit(ShipClass::Destroyer))
    );
    assert!(defender.fleet_grid()[at(3, 3)].is_hit);
    assert_eq!(attacker.guess_grid()[at(3, 3)], GuessCell::Hit);

    let (a, d) = (attacker.clone(), defender.clone());
    assert_eq!(
        resolve_guess(at(3, 3), &mut attacker, &mut defender),
        Err(BoardError::AlreadyGuessed(at(3, 3)))
    );
    assert_eq!((attacker, defender), (a, d));
}

#[test]
fn test_miss_marks_only_guess_grid() {
    let mut attacker = Board::new();
    let mut defender = Board::new();
    defender
        .place(ShipClass::Destroyer, at(3, 3), Orientation::Horizontal)
        .unwrap();
    let fleet_before = *defender.fleet_grid();

    assert_eq!(
        resolve_guess(at(7, 7), &mut attacker, &mut defender),
        Ok(GuessOutcome::Miss)
    );
    assert_eq!(attacker.guess_grid()[at(7, 7)], GuessCell::Miss);
    assert_eq!(*defender.fleet_grid(), fleet_before);
    assert!(attacker.has_guessed(at(7, 7)));
    assert!(!defender.has_guessed(at(7, 7)));
}

#[test]
fn test_destroyer_sinks_on_third_hit() {
    let mut attacker = Board::new();
    let mut defender = Board::new();
    defender
        .place(ShipClass::Destroyer, at(3, 3), Orientation::Horizontal)
        .unwrap();

    for col in 3..5 {
        resolve_guess(at(3, col), &mut attacker, &mut defender).unwrap();
        assert!(!defender.is_sunk(ShipClass::Destroyer));
    }
    resolve_guess(at(3, 5), &mut attacker, &mut defender).unwrap();
    assert!(defender.is_sunk(ShipClass::Destroyer));
    assert!(is_sunk(
        defender.ship(ShipClass::Destroyer),
        defender.fleet_grid()
    ));
}

#[test]
fn test_all_sunk_requires_every_ship() {
    let mut attacker = Board::new();
    let mut defender = Board::new();
    for (row, class) in ShipClass::ALL.into_iter().enumerate() {
        defender
            .place(class, at(row * 2, 0), Orientation::Horizontal)
            .unwrap();
    }
    assert_eq!(defender.ships_afloat(), 5);

    let targets: Vec<Coordinate> = defender
        .fleet()
        .iter()
        .flat_map(|s| s.cells())
        .collect();
    let (last, rest) = targets.split_last().unwrap();
    for &cell in rest {
        resolve_guess(cell, &mut attacker, &mut defender).unwrap();
        assert!(!defender.all_sunk());
    }
    assert_eq!(defender.ships_afloat(), 1);
    resolve_guess(*last, &mut attacker, &mut defender).unwrap();
    assert!(defender.all_sunk());
    assert_eq!(defender.ships_afloat(), 0);
}

#[test]
fn test_coordinate_bounds() {
    let n = BOARD_SIZE as usize;
    assert!(Coordinate::new(n - 1, n - 1).is_ok());
    assert_eq!(
        Coordinate::new(n, 0),
        Err(BoardError::OutOfBounds {
            row: n as i64,
            col: 0
        })
    );
    assert_eq!(
        Coordinate::try_from((-1, 4)),
        Err(BoardError::OutOfBounds { row: -1, col: 4 })
    );
    assert_eq!(Coordinate::try_from((2, 6)), Ok(at(2, 6)));
    assert_eq!(at(1, 6).to_string(), "B7");
    assert_eq!(at(0, 0).step(Orientation::Vertical, 9), Some(at(9, 0)));
    assert_eq!(at(0, 0).step(Orientation::Horizontal, 10), None);
}

#[test]
fn test_cell_glyphs() {
    assert_eq!(GuessCell::Unknown.glyph(), ' ');
    assert_eq!(GuessCell::Miss.glyph(), 'o');
    assert_eq!(GuessCell::Hit.glyph(), '*');
    let cruiser = FleetCell {
        occupant: Some(ShipClass::Cruiser),
        is_hit: false,
    };
    assert_eq!(cruiser.glyph(), 'C');
    assert_eq!(FleetCell { is_hit: true, ..cruiser }.glyph(), '*');
    assert_eq!(FleetCell::default().glyph(), ' ');
}
