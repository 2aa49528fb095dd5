use std::fmt;

/// サムネイルの既定の一辺の最大ピクセル数。
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 224;

// --- 構造体定義 ---

/// サムネイルが収まるべき最大の幅と高さ。
///
/// `new` を通じてのみ作成でき、幅と高さがどちらも 1 以上であることが保証されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    max_width: u32,
    max_height: u32,
}

/// `BoundingBox` の作成時に発生する検証エラー。
#[derive(Debug, PartialEq, Eq)]
pub enum BoundingBoxError {
    /// 幅または高さに 0 が指定された場合。
    ZeroDimension { max_width: u32, max_height: u32 },
}

// --- 実装ブロック ---

impl BoundingBox {
    pub fn new(max_width: u32, max_height: u32) -> Result<Self, BoundingBoxError> {
        if max_width == 0 || max_height == 0 {
            return Err(BoundingBoxError::ZeroDimension {
                max_width,
                max_height,
            });
        }
        Ok(Self {
            max_width,
            max_height,
        })
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// 元画像の (幅, 高さ) を、縦横比を保ったままこの枠に収まる寸法に変換します。
    ///
    /// - すでに枠内に収まっている場合はそのままの寸法を返します (拡大はしない)。
    /// - 縮小する場合は幅・高さそれぞれの縮小率の小さい方を両辺に掛け、
    ///   四捨五入した結果を `1..=上限` に丸めます。
    pub fn fit(&self, width: u32, height: u32) -> (u32, u32) {
        if width <= self.max_width && height <= self.max_height {
            return (width, height);
        }

        let scale = (self.max_width as f64 / width as f64)
            .min(self.max_height as f64 / height as f64);

        let scaled = |side: u32, bound: u32| -> u32 {
            ((side as f64 * scale).round() as u32).clamp(1, bound)
        };

        (scaled(width, self.max_width), scaled(height, self.max_height))
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_THUMBNAIL_SIZE,
            max_height: DEFAULT_THUMBNAIL_SIZE,
        }
    }
}

// --- トレイト実装 ---

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.max_width, self.max_height)
    }
}

impl fmt::Display for BoundingBoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundingBoxError::ZeroDimension {
                max_width,
                max_height,
            } => write!(
                f,
                "サムネイルの最大サイズには 1 以上を指定してください: {}x{}",
                max_width, max_height
            ),
        }
    }
}

impl std::error::Error for BoundingBoxError {}

// --- テストモジュール ---
