use crate::core::constants::{EARTH_RADIUS, EDGE_EPSILON, GRID_SIZE, GROUP_SIZE, SEPARATOR};
use crate::core::grid::{child_cell, locate, symbol_at, symbol_position, world_bounds};
use crate::util::coord::to_mercator;
use crate::util::error::GdaError;
use geo_types::{Point, Rect};
use std::f64::consts::PI;

/// Encodes a WGS84 lat/lon into a grid code of `levels` symbols.
///
/// The latitude is clamped to ±85.05112878 degrees and the longitude
/// normalized to [-180, 180) before projection, so poles and antimeridian
/// crossings encode rather than fail. The output is grouped into
/// dash-separated chunks of four symbols.
///
/// # Example
/// ```
/// let code = gda_rs::encode(28.6139, 77.2090, 10)?;
/// assert_eq!(code, "SrDA-TYAV-PT");
/// # Ok::<(), gda_rs::GdaError>(())
/// ```
pub fn encode(lat: f64, lon: f64, levels: u32) -> Result<String, GdaError> {
    let (raw, _) = encode_cell(lat, lon, levels)?;
    Ok(group_symbols(&raw))
}

/// Decodes a grid code to the center of its cell.
///
/// Group separators are stripped first; every remaining character must be one
/// of the 36 grid symbols (case-sensitive). The returned point has
/// x = longitude and y = latitude, in degrees. Precision is limited by the
/// code's depth: the result is the center of the smallest cell the code
/// names.
///
/// # Example
/// ```
/// let center = gda_rs::decode("SrDA-TYAV-PT")?;
/// assert!((center.y() - 28.6139).abs() < 1e-3);
/// assert!((center.x() - 77.2090).abs() < 1e-3);
/// # Ok::<(), gda_rs::GdaError>(())
/// ```
pub fn decode(code: &str) -> Result<Point<f64>, GdaError> {
    let (_, bounds) = decode_cell(code)?;
    let center = Point::new(bounds.center().x, bounds.center().y);
    Ok(crate::util::coord::from_mercator(&center))
}

/// Approximate linear cell size in meters at the given subdivision depth.
///
/// Divides the equatorial circumference by 6^levels. The true width and
/// height vary with latitude under Mercator, so this is an
/// order-of-magnitude indicator, not an exact measure.
///
/// # Example
/// ```
/// let meters = gda_rs::approx_cell_size_meters(10)?;
/// assert!(meters < 1.0);
/// # Ok::<(), gda_rs::GdaError>(())
/// ```
pub fn approx_cell_size_meters(levels: u32) -> Result<f64, GdaError> {
    if levels == 0 {
        return Err(GdaError::InvalidLevels(levels));
    }

    let circumference = 2.0 * PI * EARTH_RADIUS;
    Ok(circumference / (GRID_SIZE as f64).powf(levels as f64))
}

/// Runs the subdivision walk for an encode, returning the raw (ungrouped)
/// symbols and the final cell bounds in Web Mercator meters.
pub(crate) fn encode_cell(lat: f64, lon: f64, levels: u32) -> Result<(String, Rect<f64>), GdaError> {
    if levels == 0 {
        return Err(GdaError::InvalidLevels(levels));
    }

    let world = world_bounds();
    let projected = to_mercator(lat, lon)?;

    // Nudge points on the world edge strictly inside, so the first
    // subdivision picks a real row/column instead of falling off the grid.
    let point = Point::new(
        projected
            .x()
            .clamp(world.min().x + EDGE_EPSILON, world.max().x - EDGE_EPSILON),
        projected
            .y()
            .clamp(world.min().y + EDGE_EPSILON, world.max().y - EDGE_EPSILON),
    );

    let mut bounds = world;
    let mut raw = String::with_capacity(levels as usize);

    for _ in 0..levels {
        let (row, col) = locate(&point, &bounds);
        raw.push(symbol_at(row, col));
        bounds = child_cell(&bounds, row, col);
    }

    Ok((raw, bounds))
}

/// Runs the subdivision walk for a decode, returning the depth and the final
/// cell bounds in Web Mercator meters.
pub(crate) fn decode_cell(code: &str) -> Result<(u32, Rect<f64>), GdaError> {
    let stripped: String = code.chars().filter(|&c| c != SEPARATOR).collect();
    if stripped.is_empty() {
        return Err(GdaError::InvalidCode);
    }

    let mut bounds = world_bounds();

    for symbol in stripped.chars() {
        let (row, col) = symbol_position(symbol).ok_or(GdaError::UnknownSymbol(symbol))?;
        bounds = child_cell(&bounds, row, col);
    }

    Ok((stripped.chars().count() as u32, bounds))
}

/// Groups raw symbols into dash-separated chunks of four. The last chunk may
/// be shorter; there is never a trailing separator.
pub(crate) fn group_symbols(raw: &str) -> String {
    let mut grouped = String::with_capacity(raw.len() + raw.len() / GROUP_SIZE);
    for (i, symbol) in raw.chars().enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            grouped.push(SEPARATOR);
        }
        grouped.push(symbol);
    }
    grouped
}
