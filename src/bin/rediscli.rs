// パス: src/bin/rediscli.rs
// 役割: Binary entrypoint that parses flags, sets up logging, and runs the client
// 意図: Offer a CLI executable for interactive or one-shot server access
// 関連ファイル: src/lib.rs, src/cli.rs, src/repl/cmd.rs
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use rediscli::cli::CommandLineArgs;

fn main() -> ExitCode {
    let args = CommandLineArgs::parse();

    // 応答の表示と混ざらないようログは標準エラーへ
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match rediscli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
