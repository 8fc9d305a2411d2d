/// Spherical earth radius used by Web Mercator (EPSG:3857), in meters
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Maximum latitude representable in Web Mercator, in degrees
pub const MAX_LAT: f64 = 85.05112878;

/// Subdivision radix per axis; each level splits a cell into GRID_SIZE^2 children
pub const GRID_SIZE: usize = 6;

/// Symbol table for the 6x6 grid.
///
/// Row 0 is the northernmost band, column 0 the westernmost. The table is a
/// binary contract: symbols are case-sensitive (`R` and `r` are different
/// cells) and any reordering changes every produced code.
pub const GRID_SYMBOLS: [[char; 6]; 6] = [
    ['I', 'A', 'B', 'C', 'D', 'E'],
    ['G', 'H', 'J', 'K', 'L', 'M'],
    ['N', 'P', 'Q', 'R', 'S', 'T'],
    ['U', 'r', 'W', 'X', 'Y', 'Z'],
    ['a', 'b', '9', 'd', 'V', 'F'],
    ['2', '3', '4', '5', '6', '7'],
];

/// Default number of subdivision levels for encoding
pub const DEFAULT_LEVELS: u32 = 10;

/// Number of symbols per dash-separated group in a formatted code
pub(crate) const GROUP_SIZE: usize = 4;

/// Cosmetic group separator; stripped before decoding
pub(crate) const SEPARATOR: char = '-';

/// Inward nudge from the world edges, in meters, so points exactly on the
/// boundary still resolve to a row/column inside the grid
pub(crate) const EDGE_EPSILON: f64 = 1e-9;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbol_table_has_36_distinct_symbols() {
        let symbols: HashSet<char> = GRID_SYMBOLS.iter().flatten().copied().collect();
        assert_eq!(symbols.len(), GRID_SIZE * GRID_SIZE);
    }

    #[test]
    fn test_symbol_table_is_case_sensitive() {
        // Both cases of R and B are present, in different cells
        let symbols: Vec<char> = GRID_SYMBOLS.iter().flatten().copied().collect();
        assert!(symbols.contains(&'R') && symbols.contains(&'r'));
        assert!(symbols.contains(&'B') && symbols.contains(&'b'));
    }

    #[test]
    fn test_separator_is_not_a_symbol() {
        assert!(!GRID_SYMBOLS.iter().flatten().any(|&c| c == SEPARATOR));
    }
}
