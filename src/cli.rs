use clap::Parser;
use std::path::PathBuf;

/// 画像ファイルを 224x224 に収まるサムネイルへ縮小し、JPEG として保存するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 変換元の画像ファイルのパス (JPEG / PNG / GIF / BMP など)
    #[arg(required = true)]
    pub input_path: PathBuf,

    /// サムネイルの出力先パス (常に JPEG で書き出し、既存ファイルは上書き)
    #[arg(required = true)]
    pub output_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_positional_paths() {
        let args = Args::try_parse_from(["thumbnailer", "in.png", "out.jpg"]).unwrap();
        assert_eq!(args.input_path, PathBuf::from("in.png"));
        assert_eq!(args.output_path, PathBuf::from("out.jpg"));
    }

    #[test]
    fn missing_output_path_is_rejected() {
        assert!(Args::try_parse_from(["thumbnailer", "in.png"]).is_err());
    }
}
