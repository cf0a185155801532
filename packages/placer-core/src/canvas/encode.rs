use std::io::Cursor;

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;

use crate::canvas::Canvas;
use crate::errors::ImageError;

/// キャンバスを JPEG にエンコードする
///
/// JPEG はアルファを持たないため RGB8 に変換してからエンコードする。
pub fn encode_jpeg(canvas: Canvas, quality: u8) -> Result<Vec<u8>, ImageError> {
    let mut buf = Cursor::new(Vec::new());

    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    DynamicImage::ImageRgba8(canvas)
        .to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|e| ImageError::EncodingFailed(e.to_string()))?;

    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::generate;
    use crate::constants::IMAGE_QUALITY;

    #[test]
    fn test_encode_jpeg() {
        let data = encode_jpeg(generate(10, 10).unwrap(), IMAGE_QUALITY).unwrap();

        assert!(!data.is_empty());
        // JPEG マジックナンバー確認
        assert_eq!(&data[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_decode_dimensions() {
        let data = encode_jpeg(generate(220, 64).unwrap(), IMAGE_QUALITY).unwrap();

        let decoded = image::load_from_memory(&data).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (220, 64));

        // 非可逆圧縮のため色は近似で比較
        let center = decoded.get_pixel(110, 32);
        for channel in center.0 {
            assert!((channel as i16 - 0xCE).abs() <= 4, "channel {channel}");
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = encode_jpeg(generate(48, 16).unwrap(), IMAGE_QUALITY).unwrap();
        let b = encode_jpeg(generate(48, 16).unwrap(), IMAGE_QUALITY).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_exceeds_jpeg_limit() {
        // JPEG の辺の上限は 65535
        let canvas = generate(70000, 1).unwrap();
        let result = encode_jpeg(canvas, IMAGE_QUALITY);

        match result {
            Err(ImageError::EncodingFailed(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected EncodingFailed, got {other:?}"),
        }
    }
}
