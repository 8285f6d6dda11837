// パス: src/repl/dispatch.rs
// 役割: Forward one invocation to the server connection
// 意図: Fold transport failures into the same error reply path as server errors
// 関連ファイル: src/connection.rs, src/repl/cmd.rs
use tracing::{debug, warn};

use crate::connection::ServerConnection;
use crate::errors::CommandError;
use crate::reply::Reply;

/// トークン列をそのまま 1 コマンドとして送信し、応答を返す。
///
/// 再試行やコマンド名の検証は行わない。接続レベルの失敗は
/// `Reply::Failure` として返すので、呼び出し側は常に表示するだけでよい。
pub fn dispatch<C: ServerConnection + ?Sized>(conn: &mut C, tokens: &[String]) -> Reply {
    let Some(name) = tokens.first() else {
        return Reply::failure(CommandError::Empty.to_string());
    };
    debug!(command = %name, args = tokens.len() - 1, "dispatch");
    match conn.invoke(tokens) {
        Ok(reply) => {
            debug!(command = %name, reply = %reply, "reply");
            reply
        }
        Err(err) => {
            warn!(command = %name, error = %err, "command failed");
            Reply::failure(err.to_string())
        }
    }
}
