// --- 依存モジュール ---

use super::bounding_box::BoundingBox;
use super::source_image::SourceImage;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GenericImageView};
use std::fmt;
use std::fs;
use std::path::Path;

/// サムネイルの生成や保存時に発生する可能性のあるエラー。
#[derive(Debug)]
pub enum ThumbnailCreationError {
    /// JPEG へのエンコードに失敗した場合。
    Encode(String),
    /// エンコード済みの JPEG をディスクへ書き込めなかった場合。
    Save(std::io::Error),
}

impl fmt::Display for ThumbnailCreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThumbnailCreationError::Encode(detail) => {
                write!(f, "JPEGへのエンコードに失敗しました: {}", detail)
            }
            ThumbnailCreationError::Save(e) => write!(f, "サムネイルの保存に失敗しました: {}", e),
        }
    }
}

impl std::error::Error for ThumbnailCreationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThumbnailCreationError::Save(e) => Some(e),
            ThumbnailCreationError::Encode(_) => None,
        }
    }
}

/// 縮小済みの画像と、そのメモリ上の JPEG バイト列を保持する構造体。
///
/// エンコードはメモリ上で完結させ、保存時に一度だけ書き込みます。
/// そのため、縮小やエンコードに失敗した場合に出力ファイルが作られることはありません。
pub struct Thumbnail {
    image: DynamicImage,
    jpeg_data: Vec<u8>,
}

impl Thumbnail {
    /// `SourceImage` から、`bounding_box` に収まるサムネイルを生成します。
    ///
    /// # 引数
    /// - `source`: デコード済みの変換元画像。
    /// - `bounding_box`: サムネイルの最大サイズ。元画像がこれより小さい場合は拡大しません。
    /// - `jpeg_quality`: JPEG の品質 (1〜100)。
    ///
    /// # 戻り値
    /// - `Ok(Self)`: JPEG のバイト列まで生成できた場合。
    /// - `Err(ThumbnailCreationError::Encode)`: エンコードに失敗した場合。
    pub fn create(
        source: &SourceImage,
        bounding_box: &BoundingBox,
        jpeg_quality: u8,
    ) -> Result<Self, ThumbnailCreationError> {
        let (width, height) = source.dimensions();
        let (target_w, target_h) = bounding_box.fit(width, height);

        // STEP 1: 縮小 (枠内に収まっていればそのまま)
        let resized = if (target_w, target_h) == (width, height) {
            source.image().clone()
        } else {
            source
                .image()
                .resize_exact(target_w, target_h, FilterType::Lanczos3)
        };

        // STEP 2: JPEG が扱えるピクセル形式 (8bit グレースケールか 8bit RGB) に揃える
        // アルファチャンネルはここで捨てられる。
        let image = match resized.color() {
            ColorType::L8 => resized,
            ColorType::La8 | ColorType::L16 | ColorType::La16 => {
                DynamicImage::ImageLuma8(resized.into_luma8())
            }
            _ => DynamicImage::ImageRgb8(resized.into_rgb8()),
        };

        // STEP 3: メモリ上に JPEG としてエンコード
        let mut jpeg_data: Vec<u8> = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut jpeg_data, jpeg_quality);
        image
            .write_with_encoder(encoder)
            .map_err(|e| ThumbnailCreationError::Encode(e.to_string()))?;

        Ok(Self { image, jpeg_data })
    }

    /// (幅, 高さ) を返します。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn jpeg_data(&self) -> &[u8] {
        &self.jpeg_data
    }

    /// JPEG のバイト列を指定されたパスへ保存します。既存のファイルは上書きされます。
    pub fn save_to_path(&self, path: &Path) -> Result<(), ThumbnailCreationError> {
        fs::write(path, &self.jpeg_data).map_err(ThumbnailCreationError::Save)
    }
}
