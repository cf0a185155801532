use std::num::ParseIntError;

use thiserror::Error;

/// 画像生成のエラー型
///
/// `Display` の文字列はそのままクライアントに返される。
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("width and height values must be positive")]
    InvalidDimension,

    #[error("{0}")]
    InvalidValue(#[from] ParseIntError),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: i64, height: i64 },

    #[error("{0}")]
    EncodingFailed(String),
}
