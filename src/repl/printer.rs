// パス: src/repl/printer.rs
// 役割: Render replies in the reference client's human-readable layout
// 意図: Keep numbered, nested list output identical to what operators expect
// 関連ファイル: src/reply.rs, src/repl/cmd.rs, tests/printer.rs
//! 応答の表示ロジックを集約したモジュール。
//!
//! 配列は `1) ` 形式の番号付きで出力し、入れ子の配列は親の番号の右側へ
//! 揃える。番号の桁幅は要素数の桁数で決まる。

use std::io::{self, Write};

use crate::reply::Reply;

/// 表示方法の切り替え。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// バルク文字列をエスケープ付きの引用形式で表示する。
    pub quote_bulk: bool,
}

/// 応答を任意のライターへ書き出す。
///
/// `indent` は配列の 2 番目以降の番号の前に付ける継続インデント。
/// 最上位の呼び出しでは空文字列を渡す。
pub fn write_reply<W: Write>(
    out: &mut W,
    reply: &Reply,
    indent: &str,
    options: RenderOptions,
) -> io::Result<()> {
    match reply {
        Reply::Absent => writeln!(out, "(nil)"),
        Reply::Failure(msg) => writeln!(out, "(error) {}", msg),
        Reply::Integer(n) => writeln!(out, "(integer) {}", n),
        Reply::SimpleText(s) => writeln!(out, "{}", s),
        Reply::BulkText(bytes) if options.quote_bulk => writeln!(out, "{}", quote_bytes(bytes)),
        Reply::BulkText(bytes) => writeln!(out, "{}", String::from_utf8_lossy(bytes)),
        Reply::List(items) if items.is_empty() => writeln!(out, "(empty list or set)"),
        Reply::List(items) => write_list(out, items, indent, options),
        Reply::Unsupported(desc) => writeln!(out, "Unknown reply type: {}", desc),
    }
}

fn write_list<W: Write>(
    out: &mut W,
    items: &[Reply],
    indent: &str,
    options: RenderOptions,
) -> io::Result<()> {
    let width = digit_count(items.len());
    // 番号 + ") " の幅だけ子要素の継続インデントを深くする
    let child_indent = format!("{}{}", indent, " ".repeat(width + 2));
    for (idx, item) in items.iter().enumerate() {
        let prefix = if idx == 0 { "" } else { indent };
        write!(out, "{}{:>width$}) ", prefix, idx + 1, width = width)?;
        write_reply(out, item, &child_indent, options)?;
    }
    Ok(())
}

/// バイト単位の引用表記。表示可能な ASCII 以外は `\xHH` にする。
fn quote_bytes(bytes: &[u8]) -> String {
    let mut quoted = String::with_capacity(bytes.len() + 2);
    quoted.push('"');
    for &b in bytes {
        match b {
            b'\\' => quoted.push_str("\\\\"),
            b'"' => quoted.push_str("\\\""),
            b'\n' => quoted.push_str("\\n"),
            b'\r' => quoted.push_str("\\r"),
            b'\t' => quoted.push_str("\\t"),
            0x07 => quoted.push_str("\\a"),
            0x08 => quoted.push_str("\\b"),
            0x20..=0x7e => quoted.push(char::from(b)),
            _ => quoted.push_str(&format!("\\x{:02x}", b)),
        }
    }
    quoted.push('"');
    quoted
}

/// 10 進表記の桁数。
pub(crate) fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::{digit_count, write_reply, RenderOptions};
    use crate::reply::Reply;

    fn render(reply: &Reply) -> String {
        render_with(reply, RenderOptions::default())
    }

    fn render_with(reply: &Reply, options: RenderOptions) -> String {
        let mut buf = Vec::new();
        write_reply(&mut buf, reply, "", options).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn text(s: &str) -> Reply {
        Reply::SimpleText(s.into())
    }

    #[test]
    /// スカラー応答が固定の書式で表示されるか検証する。
    fn primitives_render_expected_strings() {
        assert_eq!(render(&Reply::Absent), "(nil)\n");
        assert_eq!(render(&Reply::Integer(42)), "(integer) 42\n");
        assert_eq!(render(&Reply::Integer(-3)), "(integer) -3\n");
        assert_eq!(render(&text("OK")), "OK\n");
        assert_eq!(
            render(&Reply::failure("ERR wrong number of arguments")),
            "(error) ERR wrong number of arguments\n"
        );
        assert_eq!(
            render(&Reply::Unsupported("Double(1.5)".into())),
            "Unknown reply type: Double(1.5)\n"
        );
    }

    #[test]
    /// バルク文字列の引用は設定で切り替わる。
    fn bulk_text_quoting_follows_options() {
        let reply = Reply::BulkText("a \"b\"\n".into());
        assert_eq!(render(&reply), "a \"b\"\n\n");
        let quoted = render_with(&reply, RenderOptions { quote_bulk: true });
        assert_eq!(quoted, "\"a \\\"b\\\"\\n\"\n");
    }

    #[test]
    /// 引用時はバイナリのバイトが `\xHH` で表示され、置換文字にならない。
    fn quoted_binary_bulk_uses_byte_escapes() {
        let reply = Reply::BulkText(vec![b'a', 0xff, 0x00, b'\\', 0x07]);
        let quoted = render_with(&reply, RenderOptions { quote_bulk: true });
        assert_eq!(quoted, "\"a\\xff\\x00\\\\\\a\"\n");
        assert_eq!(render(&reply), "a\u{fffd}\u{0}\\\u{7}\n");
    }

    #[test]
    /// 空配列と nil が区別されることを確認する。
    fn empty_list_is_distinct_from_nil() {
        assert_eq!(render(&Reply::List(vec![])), "(empty list or set)\n");
    }

    #[test]
    /// 平坦な配列が 1 始まりの番号付きで出力される。
    fn flat_list_numbers_items() {
        let reply = Reply::List(vec![text("a"), text("b"), text("c")]);
        assert_eq!(render(&reply), "1) a\n2) b\n3) c\n");
    }

    #[test]
    /// 継続インデントは 2 番目以降の番号の前にだけ付く。
    fn continuation_indent_prefixes_later_labels() {
        let reply = Reply::List(vec![text("a"), text("b"), text("c")]);
        let mut buf = Vec::new();
        write_reply(&mut buf, &reply, "   ", RenderOptions::default()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "1) a\n   2) b\n   3) c\n"
        );
    }

    #[test]
    /// 要素数が 2 桁になると番号の幅も 2 桁に揃う。
    fn label_width_grows_with_item_count() {
        let reply = Reply::List(vec![text(""); 11]);
        let rendered = render(&reply);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], " 1) ");
        assert_eq!(lines[8], " 9) ");
        assert_eq!(lines[9], "10) ");
    }

    #[test]
    /// 入れ子の配列が親の番号幅ぶんだけ字下げされる。
    fn nested_lists_align_under_parent() {
        let reply = Reply::List(vec![
            Reply::List(vec![Reply::Integer(1), Reply::Integer(2)]),
            text("x"),
        ]);
        assert_eq!(
            render(&reply),
            "1) 1) (integer) 1\n   2) (integer) 2\n2) x\n"
        );
    }

    #[test]
    /// 3 段の入れ子でも各段の字下げが累積する。
    fn deep_nesting_accumulates_indent() {
        let reply = Reply::List(vec![Reply::List(vec![Reply::List(vec![
            text("a"),
            text("b"),
        ])])]);
        assert_eq!(render(&reply), "1) 1) 1) a\n      2) b\n");
    }

    #[test]
    /// 外側が 10 要素以上なら内側の字下げも 4 文字ぶんになる。
    fn nested_indent_uses_outer_digit_count() {
        let mut items = vec![Reply::Absent; 9];
        items.push(Reply::List(vec![Reply::Integer(1), Reply::Integer(2)]));
        let rendered = render(&Reply::List(items));
        assert!(rendered.ends_with("10) 1) (integer) 1\n    2) (integer) 2\n"));
    }

    #[test]
    /// 桁数計算の境界値。
    fn digit_count_boundaries() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(100), 3);
    }
}
