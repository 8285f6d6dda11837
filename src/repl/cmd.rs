// パス: src/repl/cmd.rs
// 役割: REPL command loop and one-shot execution
// 意図: Drive interactive usage by coordinating tokenizer, dispatcher, renderer, and history
// 関連ファイル: src/repl/dispatch.rs, src/repl/printer.rs, src/repl/line_editor.rs
//! 対話ループと 1 回実行の制御。
//!
//! 入力行をトークンへ分割し、終了コマンドの判定・履歴への追加・
//! 送信と表示を順に行う。ループがどの経路で終わっても履歴の保存は
//! 1 度だけ試みる。

use std::io::{self, Write};

use crate::connection::ServerConnection;
use crate::tokenizer::tokenize;

use super::dispatch::dispatch;
use super::line_editor::{LineEditor, ReadResult};
use super::printer::{write_reply, RenderOptions};

/// 対話モードのプロンプト。
pub const PROMPT: &str = "> ";

/// 入力の終端に達したときに報告する文言。
const EOF_MESSAGE: &str = "EOF";

/// 接続と表示設定をまとめたセッション文脈。起動時に 1 度だけ作る。
pub struct Session<C> {
    connection: C,
    render: RenderOptions,
}

impl<C: ServerConnection> Session<C> {
    pub fn new(connection: C, render: RenderOptions) -> Self {
        Self { connection, render }
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// 1 コマンドを送信し、応答を `out` へ表示する。
    pub fn execute<W: Write>(&mut self, tokens: &[String], out: &mut W) -> io::Result<()> {
        let reply = dispatch(&mut self.connection, tokens);
        write_reply(out, &reply, "", self.render)?;
        out.flush()
    }
}

/// REPL が必要とする行入力と履歴の抽象。テストでは台本で差し替える。
pub trait ReplLineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadResult>;
    fn add_history(&mut self, tokens: &[String]);
    fn save_history(&mut self) -> io::Result<()>;
}

impl ReplLineSource for LineEditor {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadResult> {
        LineEditor::read_line(self, prompt)
    }

    fn add_history(&mut self, tokens: &[String]) {
        LineEditor::add_history(self, tokens);
    }

    fn save_history(&mut self) -> io::Result<()> {
        LineEditor::save_history(self)
    }
}

/// 端末を使った対話セッションを開始する。
pub fn run_repl<C: ServerConnection>(session: &mut Session<C>) -> io::Result<()> {
    let mut editor = LineEditor::new()?;
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_repl_with(session, &mut editor, &mut stdout.lock(), &mut stderr.lock())
}

/// 任意の行入力と出力先で REPL を回す。
pub fn run_repl_with<C, S, W, E>(
    session: &mut Session<C>,
    editor: &mut S,
    out: &mut W,
    err: &mut E,
) -> io::Result<()>
where
    C: ServerConnection,
    S: ReplLineSource,
    W: Write,
    E: Write,
{
    let result = repl_loop(session, editor, out, err);
    if let Err(e) = editor.save_history() {
        writeln!(err, "Error writing history file: {}", e)?;
    }
    result
}

fn repl_loop<C, S, W, E>(
    session: &mut Session<C>,
    editor: &mut S,
    out: &mut W,
    err: &mut E,
) -> io::Result<()>
where
    C: ServerConnection,
    S: ReplLineSource,
    W: Write,
    E: Write,
{
    loop {
        let line = match editor.read_line(PROMPT) {
            Ok(ReadResult::Line(line)) => line,
            Ok(ReadResult::Interrupted) => return Ok(()),
            Ok(ReadResult::Eof) => {
                writeln!(err, "{}", EOF_MESSAGE)?;
                return Ok(());
            }
            Err(e) => {
                writeln!(err, "{}", e)?;
                return Ok(());
            }
        };

        let tokens = tokenize(&line);
        let Some(first) = tokens.first() else {
            continue;
        };
        if is_exit_command(first) {
            return Ok(());
        }

        editor.add_history(&tokens);
        session.execute(&tokens, out)?;
    }
}

/// 引数で渡されたトークン列を 1 度だけ実行する。履歴は使わない。
pub fn run_once<C, W>(session: &mut Session<C>, tokens: &[String], out: &mut W) -> io::Result<()>
where
    C: ServerConnection,
    W: Write,
{
    session.execute(tokens, out)
}

/// `QUIT` / `EXIT` を大文字小文字を区別せずに判定する。
pub fn is_exit_command(name: &str) -> bool {
    name.eq_ignore_ascii_case("quit") || name.eq_ignore_ascii_case("exit")
}
