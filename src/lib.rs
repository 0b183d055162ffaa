//! sqltext：单方言 SQL 语句拼装与执行分发库。
//!
//! 核心是四个语句 builder（INSERT/SELECT/UPDATE/DELETE）与可组合的谓词 AST：
//! 调用方链式累积状态，随时读取序列化文本，或通过构造时注入的执行能力
//! dispatch 出去。所有字面量内联（单引号翻倍转义），不生成参数占位符；
//! 标识符不转义，由调用方保证可信。
//!
//! 单个 builder 实例是私有可变状态，跨执行上下文并发修改同一实例属于
//! 调用方未定义行为，库内不加锁。

pub mod cond;
pub mod delete;
pub mod exec;
pub mod insert;
pub mod literal;
pub mod macros;
pub mod select;
pub mod sql;
#[cfg(test)]
mod sql_tests;
pub mod statement;
mod string_builder;
pub mod update;
#[cfg(test)]
mod update_delete_tests;
pub mod value;
mod where_clause;

pub use crate::cond::{
    CmpOp, Cond, LogicOp, and, contains, eq, equal, ge, greater_equal, is_not_null, is_null, le,
    less_equal, ne, not, not_equal, or,
};
pub use crate::delete::DeleteBuilder;
pub use crate::exec::{
    DispatchError, ExecFn, ExecuteStatement, FetchRows, QueryFn, QueryStatement, Unbound, exec_fn,
    query_fn,
};
pub use crate::insert::InsertBuilder;
pub use crate::literal::{literal, write_literal};
pub use crate::select::{Order, SelectBuilder};
pub use crate::sql::{Sql, builder};
pub use crate::statement::{BuildError, Statement};
pub use crate::update::UpdateBuilder;
pub use crate::value::SqlValue;
