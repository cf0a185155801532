mod types;

pub use types::ImageError;
