// パス: src/repl/line_editor.rs
// 役割: Terminal line editor backed by rustyline with command-name completion
// 意図: Provide portable interactive input for the REPL
// 関連ファイル: src/repl/cmd.rs, src/repl/history.rs, src/repl/completion.rs
//! 端末での行編集。
//!
//! 行編集そのものは `rustyline` に任せ、ここでは補完ヘルパの接続と
//! 読み取り結果の変換、履歴ファイルとの同期だけを行う。端末でない
//! 入力（パイプなど）でも `rustyline` が通常の行読み取りに切り替える。

use std::io;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Context, Editor, Helper, Highlighter, Hinter, Validator};
use tracing::debug;

use super::completion::complete;
use super::history::{History, MAX_ENTRIES};

/// 行入力が返す 3 種類の結果を表す列挙体。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    Line(String),
    /// Ctrl-D（空行）または入力の終端。
    Eof,
    /// Ctrl-C。
    Interrupted,
}

/// 行頭の単語にコマンド名の補完を提供するヘルパ。
#[derive(Helper, Highlighter, Hinter, Validator)]
struct CommandHelper;

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(command_candidates(line, pos))
    }
}

/// カーソルが最初の単語の中にあるときだけ候補を返す。
/// 戻り値は置換開始位置と候補の組。
fn command_candidates(line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let head = &line[..pos];
    let start = head.len() - head.trim_start().len();
    let word = &head[start..];
    if word.contains(char::is_whitespace) {
        return (pos, Vec::new());
    }
    let candidates = complete(word)
        .into_iter()
        .map(|cmd| Pair {
            display: cmd.to_string(),
            replacement: cmd.to_string(),
        })
        .collect();
    (start, candidates)
}

/// 履歴付きの行編集を提供するラインエディタ。
///
/// 上下キーでの呼び出しは `rustyline` 側の履歴、ファイルへの保存は
/// `History` が受け持つ。両者には同じエントリを追加する。
pub struct LineEditor {
    editor: Editor<CommandHelper, DefaultHistory>,
    history: History,
}

impl LineEditor {
    /// 既定の保存先から履歴を読み込み、新しいエディタを構築する。
    pub fn new() -> io::Result<Self> {
        Self::with_history(History::load_default())
    }

    pub fn with_history(history: History) -> io::Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(MAX_ENTRIES)
            .map_err(readline_io_error)?
            .completion_type(CompletionType::Circular)
            .build();
        let mut editor: Editor<CommandHelper, DefaultHistory> =
            Editor::with_config(config).map_err(readline_io_error)?;
        editor.set_helper(Some(CommandHelper));
        for entry in history.entries() {
            editor
                .add_history_entry(entry.as_str())
                .map_err(readline_io_error)?;
        }
        Ok(Self { editor, history })
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// プロンプトを出力し、1 行分の入力または制御シグナルを取得する。
    pub fn read_line(&mut self, prompt: &str) -> io::Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(err) => Err(readline_io_error(err)),
        }
    }

    /// コマンドのトークン列を履歴へ追加する。
    pub fn add_history(&mut self, tokens: &[String]) {
        self.history.append(tokens);
        let Some(entry) = self.history.entries().last() else {
            return;
        };
        if let Err(err) = self.editor.add_history_entry(entry.as_str()) {
            debug!(error = %err, "history entry not added to editor");
        }
    }

    /// 現在の履歴内容を永続ストレージへ書き出す。
    pub fn save_history(&self) -> io::Result<()> {
        self.history.save()
    }
}

fn readline_io_error(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(err) => err,
        other => io::Error::new(io::ErrorKind::Other, other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use rustyline::error::ReadlineError;

    use super::{command_candidates, readline_io_error};

    fn replacements(line: &str, pos: usize) -> (usize, Vec<String>) {
        let (start, pairs) = command_candidates(line, pos);
        (start, pairs.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    /// 行頭の単語は大文字のコマンド名へ補完される。
    fn first_word_completes_to_command_names() {
        assert_eq!(
            replacements("hget", 4),
            (0, vec!["HGET".to_string(), "HGETALL".to_string()])
        );
    }

    #[test]
    /// 先頭の空白は置換範囲に含めない。
    fn leading_whitespace_is_preserved() {
        let (start, got) = replacements("  hgetal", 8);
        assert_eq!(start, 2);
        assert_eq!(got, vec!["HGETALL".to_string()]);
    }

    #[test]
    /// 引数の位置では補完しない。
    fn arguments_are_not_completed() {
        let (start, got) = replacements("GET ke", 6);
        assert_eq!(start, 6);
        assert!(got.is_empty());
    }

    #[test]
    /// カーソルより後ろの文字は補完対象に含めない。
    fn completion_uses_text_before_cursor() {
        let (start, got) = replacements("hget key", 2);
        assert_eq!(start, 0);
        assert!(got.contains(&"HGETALL".to_string()));
    }

    #[test]
    /// rustyline のエラーが io::Error へ変換される。
    fn readline_errors_convert_to_io() {
        let err = readline_io_error(ReadlineError::Io(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "closed",
        )));
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        let err = readline_io_error(ReadlineError::Eof);
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
