use crate::constants::MAX_PIXELS;
use crate::errors::ImageError;

/// URL から取り出した寸法の文字列を整数に変換する
///
/// 値がない場合は 0（未指定）として扱う。
pub fn parse_dimension(value: Option<&str>) -> Result<i64, ImageError> {
    match value {
        Some(v) => Ok(v.parse::<i64>()?),
        None => Ok(0),
    }
}

/// 寸法を検証し、キャンバスに使う幅・高さを返す
///
/// 片方が 0 の場合はもう片方の値を使う（正方形）。
/// 両方 0、またはどちらかが負の場合はエラー。
pub fn normalize_dimensions(width: i64, height: i64) -> Result<(u32, u32), ImageError> {
    if width < 0 || height < 0 {
        return Err(ImageError::InvalidDimension);
    }

    if width == 0 && height == 0 {
        return Err(ImageError::InvalidDimension);
    }

    let (width, height) = match (width, height) {
        (0, h) => (h, h),
        (w, 0) => (w, w),
        (w, h) => (w, h),
    };

    // 確保前にピクセル数を確認
    let too_large = || ImageError::ResolutionTooLarge { width, height };
    let total_pixels = (width as u64).checked_mul(height as u64).ok_or_else(too_large)?;
    if total_pixels > MAX_PIXELS {
        return Err(too_large());
    }

    let w = u32::try_from(width).map_err(|_| too_large())?;
    let h = u32::try_from(height).map_err(|_| too_large())?;

    Ok((w, h))
}
