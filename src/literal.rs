//! 字面量序列化：把一个 `SqlValue` 写成 SQL 字面量文本。
//!
//! 安全警告：字面量内联永远不如预编译参数安全；本库只对字面量值做引号转义，
//! 标识符（表名/列名）不做任何处理，由调用方保证可信。

use crate::value::SqlValue;

/// 把 `value` 的字面量文本追加到 `out`。
///
/// - `Null` → `NULL`
/// - 布尔 → `1` / `0`
/// - 数值 → 十进制文本，原样透传（NaN/Infinity 等不做校验，由调用方负责）
/// - 文本 → 单引号包裹，内部单引号翻倍
pub fn write_literal(out: &mut String, value: &SqlValue) {
    match value {
        SqlValue::Null => out.push_str("NULL"),
        SqlValue::Bool(b) => out.push_str(if *b { "1" } else { "0" }),
        SqlValue::I64(n) => out.push_str(&n.to_string()),
        SqlValue::F64(n) => out.push_str(&n.to_string()),
        SqlValue::Text(s) => quote_text(out, s),
    }
}

/// `write_literal` 的便捷形式，直接返回字面量文本。
pub fn literal(value: &SqlValue) -> String {
    let mut out = String::new();
    write_literal(&mut out, value);
    out
}

fn quote_text(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
}
