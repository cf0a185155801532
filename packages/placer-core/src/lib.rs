pub mod canvas;
pub mod constants;
pub mod errors;
pub mod validation;

// 公開API
pub use canvas::{Canvas, encode_jpeg, generate};
pub use constants::{FILL_COLOR, IMAGE_QUALITY, MAX_PIXELS};
pub use errors::ImageError;
pub use validation::{normalize_dimensions, parse_dimension};
