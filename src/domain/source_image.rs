use image::{DynamicImage, GenericImageView, ImageError, ImageFormat};
use std::fmt;

/// デコード済みの変換元画像。
///
/// フォーマットはファイルの拡張子ではなく、先頭のマジックバイトから判定します。
#[derive(Debug)]
pub struct SourceImage {
    image: DynamicImage,
    format: ImageFormat,
}

/// 画像データのデコード時に発生するエラー。
#[derive(Debug, PartialEq)]
pub enum DecodeError {
    /// どのデコーダーも認識できない内容だった場合。
    UnsupportedFormat(String),
    /// フォーマットは判定できたが、デコードに失敗した場合 (破損データなど)。
    Corrupt { format: ImageFormat, detail: String },
}

impl SourceImage {
    /// バイト列からフォーマットを判定して画像をデコードします。
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with_hint(bytes, None)
    }

    /// `decode` と同じだが、内容からフォーマットを判定できない場合は `hint` を使う。
    ///
    /// TGA のようにマジックバイトを持たないフォーマットは、ファイルの拡張子から得た
    /// `hint` がないと読み込めない。
    pub fn decode_with_hint(
        bytes: &[u8],
        hint: Option<ImageFormat>,
    ) -> Result<Self, DecodeError> {
        let format = match (image::guess_format(bytes), hint) {
            (Ok(format), _) => format,
            (Err(_), Some(format)) => format,
            (Err(e), None) => return Err(DecodeError::UnsupportedFormat(e.to_string())),
        };

        let image = image::load_from_memory_with_format(bytes, format).map_err(|e| match e {
            ImageError::Unsupported(_) => DecodeError::UnsupportedFormat(e.to_string()),
            _ => DecodeError::Corrupt {
                format,
                detail: e.to_string(),
            },
        })?;

        Ok(Self { image, format })
    }

    /// (幅, 高さ) を返します。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnsupportedFormat(detail) => {
                write!(f, "対応していない画像フォーマットです: {}", detail)
            }
            DecodeError::Corrupt { format, detail } => {
                write!(f, "{:?} 画像のデコードに失敗しました: {}", format, detail)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::codecs::tga::TgaEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    fn create_dummy_png(width: u32, height: u32, color: u8) -> Vec<u8> {
        let buf = vec![color; (width * height * 3) as usize];
        let mut result = Vec::new();
        PngEncoder::new(&mut result)
            .write_image(&buf, width, height, ExtendedColorType::Rgb8)
            .expect("PNGのエンコードに失敗");
        result
    }

    #[test]
    fn decode_png_reports_format_and_dimensions() {
        let src = SourceImage::decode(&create_dummy_png(30, 20, 128)).unwrap();
        assert_eq!(src.format(), ImageFormat::Png);
        assert_eq!(src.dimensions(), (30, 20));
    }

    #[test]
    fn decode_plain_text_is_unsupported() {
        let res = SourceImage::decode(b"this is not an image");
        assert!(matches!(res, Err(DecodeError::UnsupportedFormat(_))));
    }

    #[test]
    fn decode_empty_input_is_unsupported() {
        assert!(matches!(
            SourceImage::decode(&[]),
            Err(DecodeError::UnsupportedFormat(_))
        ));
    }

    /// PNG のシグネチャだけ正しく、中身が途中で切れているデータは破損扱いになることをテストします。
    #[test]
    fn decode_truncated_png_is_corrupt() {
        let png = create_dummy_png(16, 16, 0);
        let truncated = &png[..png.len() / 2];
        match SourceImage::decode(truncated) {
            Err(DecodeError::Corrupt { format, .. }) => assert_eq!(format, ImageFormat::Png),
            other => panic!("予期せぬ結果が返されました: {:?}", other),
        }
    }

    fn create_dummy_tga(width: u32, height: u32) -> Vec<u8> {
        let buf = vec![64u8; (width * height * 3) as usize];
        let mut result = Vec::new();
        TgaEncoder::new(&mut result)
            .write_image(&buf, width, height, ExtendedColorType::Rgb8)
            .expect("TGAのエンコードに失敗");
        result
    }

    /// マジックバイトのない TGA は、拡張子由来のヒントがあればデコードできることをテストします。
    #[test]
    fn decode_tga_needs_extension_hint() {
        let tga = create_dummy_tga(30, 10);
        assert!(matches!(
            SourceImage::decode(&tga),
            Err(DecodeError::UnsupportedFormat(_))
        ));

        let src = SourceImage::decode_with_hint(&tga, Some(ImageFormat::Tga)).unwrap();
        assert_eq!(src.format(), ImageFormat::Tga);
        assert_eq!(src.dimensions(), (30, 10));
    }

    /// 内容から判定できた場合は、食い違うヒントより内容を優先することをテストします。
    #[test]
    fn decode_prefers_content_over_hint() {
        let png = create_dummy_png(8, 8, 0);
        let src = SourceImage::decode_with_hint(&png, Some(ImageFormat::Bmp)).unwrap();
        assert_eq!(src.format(), ImageFormat::Png);
    }
}
