mod details;
pub use details::*;

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// The number of tiles around the board.
pub const BOARD_SIZE: u8 = 40;

/// The position of 'Go'.
pub const GO_POSITION: u8 = 0;

/// The position of the jail corner.
pub const JAIL_POSITION: u8 = 10;

/// The position of the 'Go To Jail' corner.
pub const GO_TO_JAIL_POSITION: u8 = 30;

/// The number of cards in each deck, including a get out of jail free card held by the player.
pub const DECK_SIZE: usize = 16;

/// The number of turns a player waits in jail before being released regardless of the dice.
pub const MAX_JAIL_TURNS: u8 = 3;

/// The number of consecutive doubles that sends a player to jail.
pub const DOUBLES_TO_JAIL: u8 = 3;

/// Positions of the railroads, going clockwise from 'Go'.
pub const RAILROAD_POSITIONS: [u8; 4] = [5, 15, 25, 35];

/// Positions of the utilities, going clockwise from 'Go'.
pub const UTILITY_POSITIONS: [u8; 2] = [12, 28];

/// The name of every tile, indexed by position.
pub const TILE_NAMES: [&str; BOARD_SIZE as usize] = [
    "Go",
    "Mediterranean Avenue",
    "Community Chest",
    "Baltic Avenue",
    "Income Tax",
    "Reading Railroad",
    "Oriental Avenue",
    "Chance",
    "Vermont Avenue",
    "Connecticut Avenue",
    "Jail",
    "St. Charles Place",
    "Electric Company",
    "States Avenue",
    "Virginia Avenue",
    "Pennsylvania Railroad",
    "St. James Place",
    "Community Chest",
    "Tennessee Avenue",
    "New York Avenue",
    "Free Parking",
    "Kentucky Avenue",
    "Chance",
    "Indiana Avenue",
    "Illinois Avenue",
    "B. & O. Railroad",
    "Atlantic Avenue",
    "Ventnor Avenue",
    "Water Works",
    "Marvin Gardens",
    "Go To Jail",
    "Pacific Avenue",
    "North Carolina Avenue",
    "Community Chest",
    "Pennsylvania Avenue",
    "Short Line",
    "Chance",
    "Park Place",
    "Luxury Tax",
    "Boardwalk",
];

lazy_static! {
    /// Positions of the chance tiles on the game board.
    pub static ref CHANCE_POSITIONS: HashSet<u8> = HashSet::from([7, 22, 36]);

    /// Positions of the community chest tiles on the game board.
    pub static ref COMMUNITY_CHEST_POSITIONS: HashSet<u8> = HashSet::from([2, 17, 33]);

    /// Every tile with an effect, in the form `HashMap<position, tile>`.
    pub static ref SPECIAL_TILES: HashMap<u8, Tile> = {
        let mut tiles = HashMap::with_capacity(8);

        for &pos in CHANCE_POSITIONS.iter() {
            tiles.insert(pos, Tile::Chance);
        }
        for &pos in COMMUNITY_CHEST_POSITIONS.iter() {
            tiles.insert(pos, Tile::CommunityChest);
        }
        tiles.insert(JAIL_POSITION, Tile::Jail);
        tiles.insert(GO_TO_JAIL_POSITION, Tile::GoToJail);

        tiles
    };
}

/// Return the first of `targets` strictly ahead of `position`,
/// wrapping around to the first target past 'Go'.
/// `targets` must be sorted in ascending order.
pub fn next_of(targets: &[u8], position: u8) -> u8 {
    targets
        .iter()
        .copied()
        .find(|&target| target > position)
        .unwrap_or(targets[0])
}
