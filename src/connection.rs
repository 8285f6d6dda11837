// パス: src/connection.rs
// 役割: Server connection capability backed by the redis crate
// 意図: Keep the wire protocol behind a trait so the REPL can be tested offline
// 関連ファイル: src/repl/dispatch.rs, src/cli.rs, src/errors.rs
//! サーバー接続の抽象と `redis` クレートによる実装。
//!
//! プロトコル自体はクライアントライブラリに任せ、ここでは
//! 接続情報の組み立てと応答モデルへの変換だけを行う。

use redis::IntoConnectionInfo;
use tracing::debug;

use crate::errors::{CliError, CliResult, CommandError};
use crate::reply::Reply;

/// トークン列を 1 コマンドとして送信し応答を受け取る能力。
pub trait ServerConnection {
    fn invoke(&mut self, tokens: &[String]) -> Result<Reply, CommandError>;
}

/// 接続先と認証の設定。`uri` が指定されると他の項目はすべて無視される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    pub host: String,
    pub port: u16,
    pub database: i64,
    pub password: Option<String>,
    pub secure: bool,
    pub uri: Option<String>,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 6379,
            database: 0,
            password: None,
            secure: false,
            uri: None,
        }
    }
}

impl ConnectOptions {
    /// ログやエラーメッセージ向けの接続先表記。
    pub fn display_addr(&self) -> String {
        match &self.uri {
            Some(uri) => uri.clone(),
            None => format!("{}:{}", self.host, self.port),
        }
    }

    /// `redis::ConnectionInfo` を組み立てる。
    /// TLS 指定時は `rediss://` を使い、サーバー名は `host` で検証される。
    pub fn connection_info(&self) -> CliResult<redis::ConnectionInfo> {
        if let Some(uri) = &self.uri {
            return uri
                .as_str()
                .into_connection_info()
                .map_err(|e| CliError::invalid_uri(uri.clone(), e));
        }
        let scheme = if self.secure { "rediss" } else { "redis" };
        let base = format!("{}://{}:{}", scheme, self.host, self.port);
        let mut info = base
            .as_str()
            .into_connection_info()
            .map_err(|e| CliError::invalid_uri(base.clone(), e))?;
        info.redis.db = self.database;
        info.redis.password = self.password.clone();
        Ok(info)
    }
}

/// `redis` クレートの同期接続を包んだ実装。
pub struct RedisConnection {
    conn: redis::Connection,
}

impl RedisConnection {
    pub fn new(conn: redis::Connection) -> Self {
        Self { conn }
    }
}

/// 接続を確立する。認証とデータベース選択もここで行われるため、
/// 資格情報の誤りは起動時のエラーとして返る。
pub fn connect(options: &ConnectOptions) -> CliResult<RedisConnection> {
    let addr = options.display_addr();
    let info = options.connection_info()?;
    debug!(addr = %addr, db = info.redis.db, "connecting");
    let client = redis::Client::open(info).map_err(|e| CliError::connect(addr.clone(), e))?;
    let conn = client
        .get_connection()
        .map_err(|e| CliError::connect(addr.clone(), e))?;
    debug!(addr = %addr, "connected");
    Ok(RedisConnection::new(conn))
}

impl ServerConnection for RedisConnection {
    fn invoke(&mut self, tokens: &[String]) -> Result<Reply, CommandError> {
        let (name, args) = tokens.split_first().ok_or(CommandError::Empty)?;
        let mut cmd = redis::cmd(name);
        for arg in args {
            cmd.arg(arg.as_str());
        }
        match cmd.query::<redis::Value>(&mut self.conn) {
            Ok(value) => Ok(Reply::from_value(value)),
            Err(err) if is_server_reply(&err) => Ok(Reply::Failure(server_error_text(&err))),
            Err(err) => Err(err.into()),
        }
    }
}

/// サーバーが返したエラー応答かどうか。接続断や I/O 失敗は含まない。
fn is_server_reply(err: &redis::RedisError) -> bool {
    !(err.is_io_error()
        || err.is_connection_dropped()
        || err.is_connection_refusal()
        || err.is_timeout())
}

/// `ERR unknown command ...` の形へ整える。
fn server_error_text(err: &redis::RedisError) -> String {
    match (err.code(), err.detail()) {
        (Some(code), Some(detail)) => format!("{} {}", code, detail),
        (Some(code), None) => code.to_string(),
        _ => err.to_string(),
    }
}
