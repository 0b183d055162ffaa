//! WHERE 子句渲染：多个累积谓词之间是隐式顶层 AND。

use crate::cond::Cond;
use crate::string_builder::StringBuilder;

/// 渲染累积的谓词列表。
///
/// - 空列表 → `None`（不输出 WHERE 子句）
/// - 单个谓词 → 直接输出其文本，不加组合括号
/// - 多个谓词 → 各自加括号后用 ` AND ` 连接
pub(crate) fn render_where(conds: &[Cond]) -> Option<String> {
    match conds {
        [] => None,
        [single] => Some(single.to_sql()),
        many => {
            let mut buf = StringBuilder::new();
            for (i, c) in many.iter().enumerate() {
                if i > 0 {
                    buf.write_str(" AND ");
                }
                buf.write_str("(");
                buf.write_str(&c.to_sql());
                buf.write_str(")");
            }
            Some(buf.into_string())
        }
    }
}
