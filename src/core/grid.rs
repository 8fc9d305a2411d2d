use crate::core::constants::{EARTH_RADIUS, GRID_SIZE, GRID_SYMBOLS, MAX_LAT};
use geo_types::{Point, Rect, coord};
use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_4, PI};
use std::sync::LazyLock;

// Reverse lookup (symbol -> row, col) built once; decode is O(1) per symbol.
static SYMBOL_INDEX: LazyLock<HashMap<char, (usize, usize)>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(GRID_SIZE * GRID_SIZE);
    for (row, symbols) in GRID_SYMBOLS.iter().enumerate() {
        for (col, &symbol) in symbols.iter().enumerate() {
            index.insert(symbol, (row, col));
        }
    }
    index
});

/// Returns the Web Mercator world rectangle derived from the earth radius and
/// the latitude clamp.
///
/// X spans [-PI*R, PI*R]. Y is bounded by the projection of `MAX_LAT`, which
/// is close to but not exactly PI*R, so it is computed rather than assumed.
pub fn world_bounds() -> Rect<f64> {
    let max_x = PI * EARTH_RADIUS;
    let max_y = EARTH_RADIUS * (FRAC_PI_4 + MAX_LAT.to_radians() / 2.0).tan().ln();

    Rect::new(
        coord! { x: -max_x, y: -max_y },
        coord! { x: max_x, y: max_y },
    )
}

/// Returns the symbol at the given grid position.
pub fn symbol_at(row: usize, col: usize) -> char {
    GRID_SYMBOLS[row][col]
}

/// Returns the `(row, col)` grid position of a symbol, or `None` if the
/// character is not part of the symbol table.
pub fn symbol_position(symbol: char) -> Option<(usize, usize)> {
    SYMBOL_INDEX.get(&symbol).copied()
}

/// Returns the `(row, col)` of the child cell of `bounds` containing `point`.
///
/// Row 0 is the northernmost band, column 0 the westernmost. Indices are
/// clamped to the grid so floating-point rounding at the outer edges cannot
/// select a cell outside it.
pub fn locate(point: &Point<f64>, bounds: &Rect<f64>) -> (usize, usize) {
    let x_div = bounds.width() / GRID_SIZE as f64;
    let y_div = bounds.height() / GRID_SIZE as f64;

    let row_raw = (GRID_SIZE - 1) as f64 - ((point.y() - bounds.min().y) / y_div).floor();
    let col_raw = ((point.x() - bounds.min().x) / x_div).floor();

    let row = row_raw.clamp(0.0, (GRID_SIZE - 1) as f64) as usize;
    let col = col_raw.clamp(0.0, (GRID_SIZE - 1) as f64) as usize;

    (row, col)
}

/// Returns the sub-rectangle of `bounds` at the given `(row, col)`.
///
/// Both the encoder and the decoder narrow through this one function, so the
/// bounds they walk are bit-identical and center-of-cell re-encoding is exact.
pub fn child_cell(bounds: &Rect<f64>, row: usize, col: usize) -> Rect<f64> {
    let x_div = bounds.width() / GRID_SIZE as f64;
    let y_div = bounds.height() / GRID_SIZE as f64;

    let min_x = bounds.min().x + x_div * col as f64;
    let min_y = bounds.min().y + y_div * (GRID_SIZE - 1 - row) as f64;

    Rect::new(
        coord! { x: min_x, y: min_y },
        coord! { x: min_x + x_div, y: min_y + y_div },
    )
}
