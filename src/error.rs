use crate::domain::input_source::path_error::PathError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 1 回のサムネイル生成で起こりうる失敗。どの変種も対象のパスを保持する。
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("入力ファイルが見つかりません: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("入力ファイルを読み込めません: {}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("対応していない画像フォーマットです: {}: {}", .path.display(), .detail)]
    UnsupportedFormat { path: PathBuf, detail: String },

    #[error("画像のデコードに失敗しました: {}: {}", .path.display(), .detail)]
    DecodeFailed { path: PathBuf, detail: String },

    #[error("JPEGへのエンコードに失敗しました: {}: {}", .path.display(), .detail)]
    EncodeFailed { path: PathBuf, detail: String },

    #[error("サムネイルを書き込めません: {}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThumbnailError {
    /// 入力側 (存在しない・読めない・画像でない) の失敗かどうか。
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            ThumbnailError::EncodeFailed { .. } | ThumbnailError::WriteFailed { .. }
        )
    }

    /// エラーが関係するパス。出力側の失敗では出力パスを返す。
    pub fn path(&self) -> &Path {
        match self {
            ThumbnailError::InputNotFound(path)
            | ThumbnailError::InputUnreadable { path, .. }
            | ThumbnailError::UnsupportedFormat { path, .. }
            | ThumbnailError::DecodeFailed { path, .. }
            | ThumbnailError::EncodeFailed { path, .. }
            | ThumbnailError::WriteFailed { path, .. } => path,
        }
    }
}

impl From<PathError> for ThumbnailError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::NotFound(path) => ThumbnailError::InputNotFound(path),
            PathError::NotAFile(path) => ThumbnailError::InputUnreadable {
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("'{}' は通常のファイルではありません", path.display()),
                ),
                path,
            },
            PathError::Io { path, source } => ThumbnailError::InputUnreadable { path, source },
        }
    }
}
