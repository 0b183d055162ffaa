//! 谓词 AST：可组合的布尔条件节点，序列化为 SQL 布尔表达式文本。
//!
//! 节点一经构造不可变；组合只会产生新节点。序列化是结构直译：不展平同运算符的
//! 嵌套 Logic，也不做任何化简。

use crate::literal::write_literal;
use crate::value::SqlValue;

/// 比较运算符（封闭集合）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Ge,
    Le,
    Like,
    Is,
    IsNot,
}

impl CmpOp {
    fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Like => "LIKE",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
        }
    }
}

/// 逻辑组合运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
}

impl LogicOp {
    fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// 条件节点。
#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    /// `field op literal`
    Compare {
        field: String,
        op: CmpOp,
        value: SqlValue,
    },
    /// 子节点各自加括号后用运算符连接；零个子节点序列化为空文本
    Logic { op: LogicOp, conds: Vec<Cond> },
    /// `NOT (...)`：无论子节点形状如何都加括号，保证任意嵌套下的优先级
    Not(Box<Cond>),
}

impl Cond {
    /// 序列化为 SQL 布尔表达式文本。可重复调用，结果只取决于节点结构。
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }

    fn write_sql(&self, out: &mut String) {
        match self {
            Self::Compare { field, op, value } => {
                out.push_str(field);
                out.push(' ');
                out.push_str(op.as_str());
                out.push(' ');
                write_literal(out, value);
            }
            Self::Logic { op, conds } => {
                for (i, c) in conds.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                        out.push_str(op.as_str());
                        out.push(' ');
                    }
                    out.push('(');
                    c.write_sql(out);
                    out.push(')');
                }
            }
            Self::Not(c) => {
                out.push_str("NOT (");
                c.write_sql(out);
                out.push(')');
            }
        }
    }
}

fn compare(field: impl Into<String>, op: CmpOp, value: impl Into<SqlValue>) -> Cond {
    Cond::Compare {
        field: field.into(),
        op,
        value: value.into(),
    }
}

/// `field = value`
pub fn equal(field: impl Into<String>, value: impl Into<SqlValue>) -> Cond {
    compare(field, CmpOp::Eq, value)
}
pub fn eq(field: impl Into<String>, value: impl Into<SqlValue>) -> Cond {
    equal(field, value)
}

/// `field != value`
pub fn not_equal(field: impl Into<String>, value: impl Into<SqlValue>) -> Cond {
    compare(field, CmpOp::Ne, value)
}
pub fn ne(field: impl Into<String>, value: impl Into<SqlValue>) -> Cond {
    not_equal(field, value)
}

/// `field >= value`
pub fn greater_equal(field: impl Into<String>, value: impl Into<SqlValue>) -> Cond {
    compare(field, CmpOp::Ge, value)
}
pub fn ge(field: impl Into<String>, value: impl Into<SqlValue>) -> Cond {
    greater_equal(field, value)
}

/// `field <= value`
pub fn less_equal(field: impl Into<String>, value: impl Into<SqlValue>) -> Cond {
    compare(field, CmpOp::Le, value)
}
pub fn le(field: impl Into<String>, value: impl Into<SqlValue>) -> Cond {
    less_equal(field, value)
}

/// `field IS NULL`
pub fn is_null(field: impl Into<String>) -> Cond {
    compare(field, CmpOp::Is, SqlValue::Null)
}

/// `field IS NOT NULL`
pub fn is_not_null(field: impl Into<String>) -> Cond {
    compare(field, CmpOp::IsNot, SqlValue::Null)
}

/// `field LIKE '%text%'`：两侧通配；`text` 先按字面量规则转义，再拼接通配符。
pub fn contains(field: impl Into<String>, text: impl Into<String>) -> Cond {
    compare(field, CmpOp::Like, format!("%{}%", text.into()))
}

/// 按参数顺序 AND 连接。
pub fn and(conds: impl IntoIterator<Item = Cond>) -> Cond {
    Cond::Logic {
        op: LogicOp::And,
        conds: conds.into_iter().collect(),
    }
}

/// 按参数顺序 OR 连接。
pub fn or(conds: impl IntoIterator<Item = Cond>) -> Cond {
    Cond::Logic {
        op: LogicOp::Or,
        conds: conds.into_iter().collect(),
    }
}

/// `NOT (...)`
pub fn not(cond: Cond) -> Cond {
    Cond::Not(Box::new(cond))
}
