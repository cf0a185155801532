pub mod dimensions;

pub use dimensions::{normalize_dimensions, parse_dimension};
