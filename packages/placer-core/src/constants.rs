/// プレースホルダー画像の塗りつぶし色（RGBA、不透明なライトグレー）
pub const FILL_COLOR: [u8; 4] = [0xCE, 0xCE, 0xCE, 0xFF];

/// JPEG 品質（1-100、全リクエスト共通）
pub const IMAGE_QUALITY: u8 = 75;

/// キャンバスの最大ピクセル数（64Mi ピクセル = RGBA で 256MiB）
pub const MAX_PIXELS: u64 = 64 * 1024 * 1024;
