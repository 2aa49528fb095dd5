use super::path_error::PathError;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 変換元の画像ファイルへのパスを表現し、それが存在する通常ファイルであることを保証する構造体。
///
/// 中身が画像かどうかはここでは判定しない (デコード時に内容と拡張子から判定する)。
#[derive(Debug)]
pub struct ImageFilePath(PathBuf);

impl ImageFilePath {
    // --- Public Methods ---

    /// 新しい `ImageFilePath` インスタンスを生成する。
    ///
    /// パスが存在し、かつファイルであることを検証する。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // 存在しない場合と、権限不足などで調べられない場合を区別する
        let metadata = fs::metadata(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => PathError::NotFound(path.to_path_buf()),
            _ => PathError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        if !metadata.is_file() {
            return Err(PathError::NotAFile(path.to_path_buf()));
        }

        Ok(Self(path.to_path_buf()))
    }

    /// 内部の `Path` への参照を返す。
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// ファイルの中身をすべてバイト列として読み込む。
    pub fn read_bytes(&self) -> Result<Vec<u8>, PathError> {
        fs::read(&self.0).map_err(|source| PathError::Io {
            path: self.0.clone(),
            source,
        })
    }
}

impl fmt::Display for ImageFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// 存在するファイルで ImageFilePath が作成でき、中身が読めるかテスト
    #[test]
    fn test_valid_file_path() {
        let dir = tempdir().expect("Failed to create temp directory");
        let file = dir.path().join("photo.png");
        fs::write(&file, b"not really a png").expect("Failed to create file");

        let path = ImageFilePath::new(&file).unwrap();
        assert_eq!(path.as_path(), file.as_path());
        assert_eq!(path.read_bytes().unwrap(), b"not really a png".to_vec());
    }

    /// 存在しないパスでエラーが返されるかテスト
    #[test]
    fn test_non_existent_path_returns_not_found() {
        let result = ImageFilePath::new("this_image_should_not_exist.jpg");

        match result {
            Err(PathError::NotFound(p)) => {
                assert_eq!(p, PathBuf::from("this_image_should_not_exist.jpg"))
            }
            other => panic!("予期せぬ結果が返されました: {:?}", other),
        }
    }

    /// ディレクトリを渡すとエラーが返されるかテスト
    #[test]
    fn test_directory_returns_not_a_file() {
        let dir = tempdir().expect("Failed to create temp directory");

        let err = ImageFilePath::new(dir.path()).unwrap_err();
        assert!(matches!(err, PathError::NotAFile(_)));
        assert!(err.to_string().contains("ファイルではありません"));
    }

    /// read_bytes() が I/O エラーを正しく返すかテスト
    #[test]
    fn test_read_bytes_returns_io_error() {
        // new() の検証をスキップして、存在しないパスを持つインスタンスを強制的に作成
        let path = ImageFilePath(PathBuf::from("this_path_definitely_does_not_exist.png"));

        match path.read_bytes() {
            Err(PathError::Io { source, .. }) => assert_eq!(source.kind(), ErrorKind::NotFound),
            other => panic!("予期せぬ結果が返されました: {:?}", other),
        }
    }

    /// 親がファイルのパスのように、存在確認そのものが失敗した場合は NotFound ではなく
    /// I/O エラーとして返されるかテスト
    #[test]
    fn test_metadata_failure_is_io_error_not_not_found() {
        let dir = tempdir().expect("Failed to create temp directory");
        let parent_file = dir.path().join("plain.txt");
        fs::write(&parent_file, "hello").expect("Failed to create file");

        match ImageFilePath::new(parent_file.join("child.png")) {
            Err(PathError::Io { source, .. }) => assert_ne!(source.kind(), ErrorKind::NotFound),
            other => panic!("予期せぬ結果が返されました: {:?}", other),
        }
    }
}
