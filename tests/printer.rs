// パス: tests/printer.rs
// 役割: 応答表示の統合テスト
// 意図: 番号付き配列と入れ子の字下げが参照クライアントと一致することを保証する
// 関連ファイル: src/repl/printer.rs, src/reply.rs, tests/test_support.rs
#[path = "test_support.rs"]
mod support;

use rediscli::repl::RenderOptions;
use rediscli::Reply;
use support::{render, render_with};

fn bulk(s: &str) -> Reply {
    Reply::BulkText(s.into())
}

#[test]
/// スカラー応答は何度描画しても同じ文字列になる。
fn primitives_are_stable() {
    for _ in 0..3 {
        assert_eq!(render(&Reply::Integer(42)), "(integer) 42\n");
        assert_eq!(render(&Reply::Absent), "(nil)\n");
    }
}

#[test]
/// 11 要素の配列では番号が 2 桁幅に揃う。
fn eleven_items_use_two_digit_labels() {
    let reply = Reply::List(vec![bulk(""); 11]);
    let out = render(&reply);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[8], " 9) ");
    assert_eq!(lines[9], "10) ");
    assert_eq!(lines[10], "11) ");
}

#[test]
/// 入れ子の字下げ幅は 2 + 外側の要素数の桁数になる。
fn nested_indent_width_depends_on_outer_length() {
    let inner = Reply::List(vec![Reply::Integer(1), Reply::Integer(2)]);

    let small = Reply::List(vec![inner.clone()]);
    assert_eq!(render(&small), "1) 1) (integer) 1\n   2) (integer) 2\n");

    let mut items = vec![Reply::Absent; 11];
    items[0] = inner;
    let out = render(&Reply::List(items));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], " 1) 1) (integer) 1");
    assert_eq!(lines[1], "    2) (integer) 2");
    assert_eq!(lines[2], " 2) (nil)");
}

#[test]
/// `SCAN` のようなカーソル + 配列の応答形を再現する。
fn scan_like_reply_layout() {
    let reply = Reply::List(vec![
        bulk("0"),
        Reply::List(vec![bulk("key:1"), bulk("key:2")]),
    ]);
    assert_eq!(
        render(&reply),
        concat!("1) 0\n", "2) 1) key:1\n", "   2) key:2\n")
    );
}

#[test]
/// 入れ子の中の空配列・エラー・nil もそれぞれの書式で出る。
fn nested_special_values() {
    let reply = Reply::List(vec![
        Reply::List(vec![]),
        Reply::failure("ERR inner"),
        Reply::Absent,
    ]);
    assert_eq!(
        render(&reply),
        "1) (empty list or set)\n2) (error) ERR inner\n3) (nil)\n"
    );
}

#[test]
/// 引用設定はバルク文字列にだけ効き、ステータス応答には効かない。
fn quoting_only_affects_bulk_text() {
    let options = RenderOptions { quote_bulk: true };
    let reply = Reply::List(vec![bulk("v"), Reply::SimpleText("OK".into())]);
    assert_eq!(render_with(&reply, options), "1) \"v\"\n2) OK\n");
}
