pub mod encode;
pub mod generate;

pub use encode::encode_jpeg;
pub use generate::{Canvas, generate};
