//! # gda-rs
//!
//! Hierarchical 6x6 grid geocoding over the Web Mercator projection.
//! Latitude/longitude pairs are encoded into short alphanumeric codes by
//! recursively subdividing the projected world rectangle into a 6x6 grid,
//! one symbol per level; codes decode back to the center of their cell.
//!
//! There are two main entry points.
//!
//! ### 1. Plain functions - encode, decode, cell size
//!
//! ```
//! use gda_rs::{approx_cell_size_meters, decode, encode};
//!
//! # fn main() -> Result<(), gda_rs::GdaError> {
//! let code = encode(28.6139, 77.2090, 10)?;
//! assert_eq!(code, "SrDA-TYAV-PT");
//!
//! let center = decode(&code)?;
//! assert!((center.y() - 28.6139).abs() < 1e-3); // latitude
//! assert!((center.x() - 77.2090).abs() < 1e-3); // longitude
//!
//! // Ten levels resolve to well under a meter
//! assert!(approx_cell_size_meters(10)? < 1.0);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GridCell` - the cell as a value
//!
//! ```
//! use gda_rs::GridCell;
//!
//! # fn main() -> Result<(), gda_rs::GdaError> {
//! let cell = GridCell::from_lat_lon(51.5074, -0.1278, 10)?;
//! println!("{} covers ~{:.2} m", cell.code, cell.approx_size_meters());
//!
//! let restored = GridCell::from_code(&cell.code)?;
//! assert_eq!(cell, restored);
//! # Ok(())
//! # }
//! ```
//!
//! Latitude is clamped to ±85.05112878 degrees (the Mercator limit) and
//! longitude is normalized into [-180, 180), so poles and antimeridian
//! crossings encode without error. All operations are pure functions over
//! immutable constants and are safe to call from any number of threads.

pub mod api;
pub mod core;
pub mod util;

pub use api::{GridCell, approx_cell_size_meters, decode, encode};
pub use core::{DEFAULT_LEVELS, GRID_SYMBOLS, MAX_LAT};
pub use util::GdaError;

pub use geo_types;
