mod cli;
mod workflow;

use clap::Parser;

fn main() {
    env_logger::init();

    // コマンドライン引数を解析します
    let args = cli::Args::parse();

    // 成功・失敗のどちらでも 1 行だけ表示して正常終了する
    let result = workflow::run(&args);
    println!("{}", workflow::status_line(&args, &result));
}
