use crate::api::codec::{decode_cell, encode_cell, group_symbols};
use crate::core::constants::SEPARATOR;
use crate::util::coord::from_mercator;
use crate::util::error::GdaError;
use geo_types::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A single cell in the hierarchical 6x6 Web Mercator grid.
///
/// Each `GridCell` pairs a grid code with the cell it names: the center in
/// WGS84 degrees, the subdivision depth, and the cell rectangle in Web
/// Mercator meters.
///
/// # Example
///
/// ```
/// use gda_rs::GridCell;
///
/// # fn main() -> Result<(), gda_rs::GdaError> {
/// let cell = GridCell::from_lat_lon(28.6139, 77.2090, 10)?;
/// assert_eq!(cell.code, "SrDA-TYAV-PT");
///
/// let restored = GridCell::from_code(&cell.code)?;
/// assert_eq!(cell, restored);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// Grouped grid code naming this cell
    pub code: String,
    /// Cell center in WGS84 degrees (x = longitude, y = latitude)
    pub center: Point<f64>,
    /// Subdivision depth; one code symbol per level
    pub levels: u32,
    /// Cell rectangle in Web Mercator meters (EPSG:3857)
    pub bounds: Rect<f64>,
}

impl GridCell {
    fn new(code: String, levels: u32, bounds: Rect<f64>) -> Self {
        let center = from_mercator(&Point::new(bounds.center().x, bounds.center().y));
        Self {
            code,
            center,
            levels,
            bounds,
        }
    }

    /// Create a GridCell from WGS84 coordinates at the given depth.
    ///
    /// # Example
    /// ```
    /// use gda_rs::{DEFAULT_LEVELS, GridCell};
    ///
    /// # fn main() -> Result<(), gda_rs::GdaError> {
    /// let cell = GridCell::from_lat_lon(51.5074, -0.1278, DEFAULT_LEVELS)?;
    /// assert_eq!(cell.levels, 10);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_lat_lon(lat: f64, lon: f64, levels: u32) -> Result<Self, GdaError> {
        let (raw, bounds) = encode_cell(lat, lon, levels)?;
        Ok(Self::new(group_symbols(&raw), levels, bounds))
    }

    /// Create a GridCell from an existing grid code.
    ///
    /// The stored code is regrouped into the canonical dash-separated form
    /// regardless of how the input was grouped.
    ///
    /// # Example
    /// ```
    /// use gda_rs::GridCell;
    ///
    /// # fn main() -> Result<(), gda_rs::GdaError> {
    /// let cell = GridCell::from_code("SrDA-TYAV-PT")?;
    /// assert_eq!(cell.levels, 10);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: &str) -> Result<Self, GdaError> {
        let (levels, bounds) = decode_cell(code)?;
        let raw: String = code.chars().filter(|&c| c != SEPARATOR).collect();
        Ok(Self::new(group_symbols(&raw), levels, bounds))
    }

    /// Returns the latitude of the cell center in degrees.
    pub fn lat(&self) -> f64 {
        self.center.y()
    }

    /// Returns the longitude of the cell center in degrees.
    pub fn lon(&self) -> f64 {
        self.center.x()
    }

    /// Approximate linear size of this cell in meters.
    pub fn approx_size_meters(&self) -> f64 {
        // levels is at least 1 for any constructed cell
        crate::api::codec::approx_cell_size_meters(self.levels).unwrap_or(f64::NAN)
    }
}
