//! 1 枚の画像を「読み込み → 縮小 → JPEG で保存」する処理をまとめたモジュール。

use super::bounding_box::BoundingBox;
use super::input_source::image_file_path::ImageFilePath;
use super::source_image::{DecodeError, SourceImage};
use super::thumbnail::{Thumbnail, ThumbnailCreationError};
use crate::error::ThumbnailError;
use image::ImageFormat;
use log::debug;
use std::path::{Path, PathBuf};

/// JPEG 品質の既定値 (一般的な JPEG ライブラリの既定値と同じ)。
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// サムネイル生成の設定。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailConfig {
    bounding_box: BoundingBox,
    jpeg_quality: u8,
}

impl ThumbnailConfig {
    pub fn new(bounding_box: BoundingBox) -> Self {
        Self {
            bounding_box,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// JPEG の品質を設定します。範囲外の値は 1〜100 に丸められます。
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self::new(BoundingBox::default())
    }
}

/// 成功した 1 回の変換の結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub source_format: ImageFormat,
    pub original: (u32, u32),
    pub thumbnail: (u32, u32),
}

/// 画像ファイルからサムネイル JPEG を生成する。
#[derive(Debug, Default, Clone)]
pub struct Thumbnailer {
    config: ThumbnailConfig,
}

impl Thumbnailer {
    pub fn new(config: ThumbnailConfig) -> Self {
        Self { config }
    }

    /// `input` の画像を縮小し、`output` に JPEG として書き出します。
    ///
    /// # 戻り値
    /// * `Ok(ThumbnailSummary)`: 出力ファイルの書き込みまで完了した場合。
    /// * `Err(ThumbnailError)`: 入力の読み込み・デコード・エンコード・書き込みのいずれかに失敗した場合。
    ///   書き込み以外の段階で失敗した場合、`output` には一切触れません。
    pub fn process(&self, input: &Path, output: &Path) -> Result<ThumbnailSummary, ThumbnailError> {
        // 1. 入力ファイルの検証と読み込み
        let input_file = ImageFilePath::new(input)?;
        let bytes = input_file.read_bytes()?;

        // 2. デコード
        // 内容から判定できない場合に備えて、拡張子からもフォーマットを推定しておく
        let hint = ImageFormat::from_path(input).ok();
        let source = SourceImage::decode_with_hint(&bytes, hint).map_err(|e| match e {
            DecodeError::UnsupportedFormat(detail) => ThumbnailError::UnsupportedFormat {
                path: input.to_path_buf(),
                detail,
            },
            DecodeError::Corrupt { format, detail } => ThumbnailError::DecodeFailed {
                path: input.to_path_buf(),
                detail: format!("{:?}: {}", format, detail),
            },
        })?;
        debug!(
            "{}: {:?} {}x{}",
            input_file,
            source.format(),
            source.dimensions().0,
            source.dimensions().1
        );

        // 3. 縮小とエンコード (メモリ上)
        let thumbnail = Thumbnail::create(
            &source,
            self.config.bounding_box(),
            self.config.jpeg_quality(),
        )
        .map_err(|e| to_output_error(e, output))?;
        debug!(
            "thumbnail {}x{} (bound {}), {} bytes",
            thumbnail.dimensions().0,
            thumbnail.dimensions().1,
            self.config.bounding_box(),
            thumbnail.jpeg_data().len()
        );

        // 4. 書き込み
        thumbnail
            .save_to_path(output)
            .map_err(|e| to_output_error(e, output))?;

        Ok(ThumbnailSummary {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            source_format: source.format(),
            original: source.dimensions(),
            thumbnail: thumbnail.dimensions(),
        })
    }
}

fn to_output_error(err: ThumbnailCreationError, output: &Path) -> ThumbnailError {
    match err {
        ThumbnailCreationError::Encode(detail) => ThumbnailError::EncodeFailed {
            path: output.to_path_buf(),
            detail,
        },
        ThumbnailCreationError::Save(source) => ThumbnailError::WriteFailed {
            path: output.to_path_buf(),
            source,
        },
    }
}
