// パス: src/repl/history.rs
// 役割: Persistent command history for the interactive session
// 意図: Load once at start, append per command, save once at shutdown
// 関連ファイル: src/repl/line_editor.rs, src/repl/cmd.rs, tests/history.rs
//! 入力履歴の保持と永続化。
//!
//! ファイル形式は 1 行 1 エントリのプレーンテキストで、エスケープも
//! メタデータも持たない。

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

/// 保持する履歴の上限件数。
pub const MAX_ENTRIES: usize = 1000;

/// 履歴ファイルの場所を上書きする環境変数。
pub const HISTORY_ENV: &str = "REDISCLI_HISTFILE";

const HISTORY_FILE_NAME: &str = ".rediscli_history";

/// 実行したコマンドの履歴。古いものから順に並ぶ。
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    path: Option<PathBuf>,
    max_entries: usize,
}

impl History {
    /// 保存先を持たない空の履歴。
    pub fn in_memory() -> Self {
        Self {
            entries: Vec::new(),
            path: None,
            max_entries: MAX_ENTRIES,
        }
    }

    /// 既定の保存先から履歴を読み込む。
    pub fn load_default() -> Self {
        match history_path() {
            Some(path) => Self::load(path),
            None => Self::in_memory(),
        }
    }

    /// 指定ファイルから履歴を読み込む。開けない場合は空の履歴で続行する。
    ///
    /// バイト列として読み、UTF-8 として不正なバイトは置換文字にする。
    /// 壊れた行があっても他の行は失われない。
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(content) => {
                let lines: Vec<String> = content
                    .split(|&b| b == b'\n')
                    .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
                    .filter(|line| !line.is_empty())
                    .map(|line| String::from_utf8_lossy(line).into_owned())
                    .collect();
                let skip = lines.len().saturating_sub(MAX_ENTRIES);
                lines.into_iter().skip(skip).collect()
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "history not loaded");
                Vec::new()
            }
        };
        debug!(path = %path.display(), entries = entries.len(), "history loaded");
        Self {
            entries,
            path: Some(path),
            max_entries: MAX_ENTRIES,
        }
    }

    /// トークン列を空白 1 つで連結した新しい文字列として追加する。
    /// 直前と同じ内容は追加しない。
    pub fn append(&mut self, tokens: &[String]) {
        let entry = tokens.join(" ");
        self.add(entry);
    }

    /// 連結済みの 1 行を追加する。
    pub fn add(&mut self, entry: String) {
        if entry.trim().is_empty() {
            return;
        }
        if self.entries.last() == Some(&entry) {
            return;
        }
        if self.entries.len() >= self.max_entries {
            let overflow = self.entries.len() + 1 - self.max_entries;
            self.entries.drain(..overflow);
        }
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.entries.get(idx).map(|s| s.as_str())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 履歴ファイルを作り直して全エントリを書き出す。保存先がなければ何もしない。
    pub fn save(&self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = BufWriter::new(fs::File::create(path)?);
        for entry in &self.entries {
            writeln!(file, "{}", entry)?;
        }
        file.flush()?;
        debug!(path = %path.display(), entries = self.entries.len(), "history saved");
        Ok(())
    }
}

/// 履歴ファイルの保存場所を環境変数とユーザーのホームから決定する。
pub fn history_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(HISTORY_ENV) {
        return Some(PathBuf::from(path));
    }
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .map(|home| home.join(HISTORY_FILE_NAME))
}
