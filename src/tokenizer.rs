// パス: src/tokenizer.rs
// 役割: Split one input line into command tokens
// 意図: Honor single/double quoted spans as atomic arguments
// 関連ファイル: src/repl/cmd.rs, tests/tokenizer.rs
//! 入力行をトークン列へ分割する。
//!
//! - 規則は `'.*?'|".*?"|\S+` を左から順に当てはめるのと同じ。
//! - 対になった引用符で囲まれた部分は引用符を外して 1 トークンにする。
//! - エスケープ処理は行わない。閉じていない引用符はそのまま文字として残る。

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    // 固定パターンなのでコンパイルに失敗することはない
    Regex::new(r#"'.*?'|".*?"|\S+"#).expect("token pattern is valid")
});

/// 1 行分の入力をコマンドトークンの列へ変換する。
///
/// # Examples
/// ```
/// use rediscli::tokenizer::tokenize;
/// assert_eq!(tokenize("SET key 'a b'"), vec!["SET", "key", "a b"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(raw)
        .map(|m| strip_quotes(m.as_str()).to_string())
        .collect()
}

/// 同じ種類の引用符で始まり終わる場合だけ外側の 1 組を取り除く。
fn strip_quotes(token: &str) -> &str {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'\'' || first == b'"') && first == last {
            return &token[1..token.len() - 1];
        }
    }
    token
}
