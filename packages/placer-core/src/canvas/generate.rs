use image::{Rgba, RgbaImage};

use crate::constants::FILL_COLOR;
use crate::errors::ImageError;
use crate::validation::normalize_dimensions;

/// 単色で塗りつぶされたピクセルバッファ
pub type Canvas = RgbaImage;

/// 指定された寸法のプレースホルダー画像を生成する
///
/// 寸法の検証と正方形へのフォールバックは `normalize_dimensions` に従う。
pub fn generate(width: i64, height: i64) -> Result<Canvas, ImageError> {
    let (width, height) = normalize_dimensions(width, height)?;

    Ok(RgbaImage::from_pixel(width, height, Rgba(FILL_COLOR)))
}
