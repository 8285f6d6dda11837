// パス: src/lib.rs
// 役割: Crate root wiring modules and the top-level run entry
// 意図: Expose minimal API surface for the client components
// 関連ファイル: src/repl/mod.rs, src/connection.rs, src/bin/rediscli.rs
//! rediscli ルートモジュール
//!
//! 目的:
//! - キーバリューサーバー向けの対話型コマンドラインクライアントを提供する。
//! - 応答の表示形式は参照クライアントに合わせる。
//!
//! 方針:
//! - プロトコル処理は `redis` クレートに任せ、トークン分割・表示・対話ループのみを実装する。
//! - 大域状態を持たず、接続と表示設定は `repl::Session` で受け渡す。

pub mod cli;
pub mod connection;
pub mod errors;
pub mod repl;
pub mod reply;
pub mod tokenizer;

pub use crate::errors::{CliError, CliResult, CommandError};
pub use crate::reply::Reply;

use std::io;

use tracing::info;

use crate::cli::CommandLineArgs;
use crate::repl::Session;

/// 引数に従って接続し、REPL または 1 回実行を行う。
///
/// 接続・認証の失敗はここでエラーとして返り、呼び出し側がプロセスを終了させる。
pub fn run(args: &CommandLineArgs) -> CliResult<()> {
    let conn = connection::connect(args.connect_options())?;
    let mut session = Session::new(conn, args.render_options());
    if args.is_interactive() {
        info!(addr = %args.connect_options().display_addr(), "starting interactive session");
        repl::run_repl(&mut session)?;
    } else {
        let stdout = io::stdout();
        repl::run_once(&mut session, args.command(), &mut stdout.lock())?;
    }
    Ok(())
}
