//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 1 枚の画像のサムネイル生成と、その結果を伝える 1 行のメッセージを担当します。

use crate::cli::Args;
use log::{info, warn};
use thumbnailer::domain::{ThumbnailSummary, Thumbnailer};
use thumbnailer::error::ThumbnailError;

/// 既定の設定 (224x224) でサムネイルを生成します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
pub fn run(args: &Args) -> Result<ThumbnailSummary, ThumbnailError> {
    let result = Thumbnailer::default().process(&args.input_path, &args.output_path);

    match &result {
        Ok(summary) => info!(
            "{:?} {}x{} -> {}x{}",
            summary.source_format,
            summary.original.0,
            summary.original.1,
            summary.thumbnail.0,
            summary.thumbnail.1
        ),
        Err(e) => warn!("{}", e),
    }

    result
}

/// 処理結果を、利用者に表示する 1 行のメッセージに変換します。
pub fn status_line(args: &Args, result: &Result<ThumbnailSummary, ThumbnailError>) -> String {
    match result {
        Ok(_) => format!(
            "Processed {} to {}",
            args.input_path.display(),
            args.output_path.display()
        ),
        Err(_) => format!("Cannot process image {}", args.input_path.display()),
    }
}
