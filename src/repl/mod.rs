// パス: src/repl/mod.rs
// 役割: REPL module facade and re-exports
// 意図: Expose interactive entry points without leaking internals
// 関連ファイル: src/repl/cmd.rs, src/repl/printer.rs, src/bin/rediscli.rs
//! 対話環境を構成するモジュール群をまとめたファサード。
//!
//! - `cmd`: メインループと 1 回実行
//! - `dispatch`: コマンドの送信
//! - `printer`: 応答の表示ロジック
//! - `history`: 入力履歴の保持と永続化
//! - `line_editor` / `completion`: 端末での行編集と補完

pub mod cmd;
pub mod completion;
mod dispatch;
pub mod history;
mod line_editor;
mod printer;

pub use cmd::{is_exit_command, run_once, run_repl, run_repl_with, ReplLineSource, Session, PROMPT};
pub use dispatch::dispatch;
pub use history::History;
pub use line_editor::{LineEditor, ReadResult};
pub use printer::{write_reply, RenderOptions};
