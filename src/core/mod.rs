pub mod constants;
pub mod grid;

pub use constants::{DEFAULT_LEVELS, EARTH_RADIUS, GRID_SIZE, GRID_SYMBOLS, MAX_LAT};
pub use grid::{child_cell, locate, symbol_at, symbol_position, world_bounds};
