use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::AircraftCarrier,
    ShipClass::Battleship,
    ShipClass::Cruiser,
    ShipClass::Destroyer,
    ShipClass::Submarine,
];

/// Total number of ship segments in a full fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

/// Upper bound on random candidates drawn per ship during automated setup.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

const fn fleet_cells(fleet: &[ShipClass]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}
