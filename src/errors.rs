// パス: src/errors.rs
// 役割: Error types shared by the connection layer and the binary
// 意図: Separate fatal startup failures from per-command failures
// 関連ファイル: src/connection.rs, src/repl/dispatch.rs, src/bin/rediscli.rs
//! エラー型の定義。
//!
//! - `CliError`: 起動時に致命的となるエラー（URI 解析・接続・認証）。
//! - `CommandError`: 1 コマンド単位の失敗。セッションは継続する。

use std::io;

use thiserror::Error;

/// プロセスを終了させる種類のエラー。
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid server URI '{uri}': {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: redis::RedisError,
    },
    #[error("Could not connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: redis::RedisError,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    pub fn invalid_uri(uri: impl Into<String>, source: redis::RedisError) -> Self {
        Self::InvalidUri {
            uri: uri.into(),
            source,
        }
    }

    pub fn connect(addr: impl Into<String>, source: redis::RedisError) -> Self {
        Self::Connect {
            addr: addr.into(),
            source,
        }
    }
}

/// サーバーとの往復そのものが失敗したことを表す。
/// サーバーが返したエラー応答はこちらではなく `Reply::Failure` になる。
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Transport(String),
    #[error("empty command")]
    Empty,
}

impl From<redis::RedisError> for CommandError {
    fn from(err: redis::RedisError) -> Self {
        Self::Transport(err.to_string())
    }
}

/// 起動処理の結果型。
pub type CliResult<T> = Result<T, CliError>;
