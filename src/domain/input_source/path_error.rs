use std::fmt;
use std::path::PathBuf;

// エラー型を定義
#[derive(Debug)]
pub enum PathError {
    NotFound(PathBuf),
    NotAFile(PathBuf),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NotFound(p) => write!(f, "パス '{}' は存在しません。", p.display()),
            PathError::NotAFile(p) => write!(f, "パス '{}' はファイルではありません。", p.display()),
            PathError::Io { path, source } => {
                write!(f, "'{}' の読み込みでI/Oエラー: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
