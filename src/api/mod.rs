pub mod cell;
pub mod codec;

pub use cell::GridCell;
pub use codec::{approx_cell_size_meters, decode, encode};
