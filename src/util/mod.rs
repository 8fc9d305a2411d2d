pub mod coord;
pub mod error;

pub use coord::{clamp_lat, from_mercator, normalize_lon, to_mercator};
pub use error::GdaError;
