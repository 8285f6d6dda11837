// パス: src/reply.rs
// 役割: Reply model returned by the server connection
// 意図: Give the renderer one closed union regardless of the client library
// 関連ファイル: src/connection.rs, src/repl/printer.rs
//! サーバー応答を表す値モデル。

use std::fmt;

/// 1 回のコマンド実行に対する応答。入れ子の深さはサーバー次第。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 値なし（nil）。
    Absent,
    /// サーバーがエラーとして返したメッセージ。
    Failure(String),
    Integer(i64),
    /// ステータス応答（`OK` など）。そのまま表示する。
    SimpleText(String),
    /// バルク文字列。バイナリを含みうるのでバイト列のまま持つ。
    /// 表示時に引用符を付けるかは描画設定で決まる。
    BulkText(Vec<u8>),
    List(Vec<Reply>),
    /// 上記に対応付けられない応答。内容の説明文字列を保持する。
    Unsupported(String),
}

impl Reply {
    pub fn failure(msg: impl Into<String>) -> Self {
        Self::Failure(msg.into())
    }

    /// `redis::Value` を応答モデルへ写す。
    pub fn from_value(value: redis::Value) -> Self {
        match value {
            redis::Value::Nil => Self::Absent,
            redis::Value::Int(n) => Self::Integer(n),
            redis::Value::Okay => Self::SimpleText("OK".into()),
            redis::Value::SimpleString(s) => Self::SimpleText(s),
            redis::Value::BulkString(bytes) => Self::BulkText(bytes),
            redis::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from_value).collect())
            }
            redis::Value::ServerError(err) => match err.details() {
                Some(detail) => Self::Failure(format!("{} {}", err.code(), detail)),
                None => Self::Failure(err.code().to_string()),
            },
            other => Self::Unsupported(format!("{:?}", other)),
        }
    }
}

/// 種別名のみを表示する。ログ出力用。
impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Reply::Absent => "nil",
            Reply::Failure(_) => "error",
            Reply::Integer(_) => "integer",
            Reply::SimpleText(_) => "status",
            Reply::BulkText(_) => "bulk",
            Reply::List(items) => return write!(f, "list[{}]", items.len()),
            Reply::Unsupported(_) => "unsupported",
        };
        f.write_str(kind)
    }
}
