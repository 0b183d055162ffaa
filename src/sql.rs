//! 能力绑定门面：批量产出预绑定执行器的语句 builder。

use crate::delete::DeleteBuilder;
use crate::exec::{ExecuteStatement, QueryStatement, trace_dispatch};
use crate::insert::InsertBuilder;
use crate::select::SelectBuilder;
use crate::update::UpdateBuilder;

/// 未绑定执行器的 builder 工厂：只要 SQL 文本、不要执行能力的调用方用这里。
pub mod builder {
    use super::*;

    pub fn insert(table: impl Into<String>) -> InsertBuilder {
        InsertBuilder::new(table)
    }

    pub fn select(table: impl Into<String>) -> SelectBuilder {
        SelectBuilder::new(table)
    }

    pub fn update(table: impl Into<String>) -> UpdateBuilder {
        UpdateBuilder::new(table)
    }

    pub fn delete(table: impl Into<String>) -> DeleteBuilder {
        DeleteBuilder::new(table)
    }
}

/// 持有两个执行能力的门面。
///
/// 写语句（INSERT/UPDATE/DELETE）绑定 `executor`，读语句（SELECT）绑定
/// `query_executor`：读路径通常需要更丰富的行句柄，写路径只要一个完成信号，
/// 所以是两个独立能力。每个 builder 拿到能力的一份克隆；不可克隆的能力可以
/// 包一层 `Rc`（本库对 `Rc<T>` 有透传实现）。
#[derive(Debug, Clone)]
pub struct Sql<E, Q> {
    executor: E,
    query_executor: Q,
}

impl<E, Q> Sql<E, Q> {
    pub fn new(executor: E, query_executor: Q) -> Self {
        Self {
            executor,
            query_executor,
        }
    }

    pub fn insert(&self, table: impl Into<String>) -> InsertBuilder<E>
    where
        E: Clone,
    {
        InsertBuilder::with_executor(table, self.executor.clone())
    }

    pub fn update(&self, table: impl Into<String>) -> UpdateBuilder<E>
    where
        E: Clone,
    {
        UpdateBuilder::with_executor(table, self.executor.clone())
    }

    pub fn delete(&self, table: impl Into<String>) -> DeleteBuilder<E>
    where
        E: Clone,
    {
        DeleteBuilder::with_executor(table, self.executor.clone())
    }

    pub fn select(&self, table: impl Into<String>) -> SelectBuilder<Q>
    where
        Q: Clone,
    {
        SelectBuilder::with_executor(table, self.query_executor.clone())
    }

    /// 把一段现成的 SQL 文本直接交给写执行能力，结果原样透传。
    pub fn run(&self, sql: &str) -> E::Outcome
    where
        E: ExecuteStatement,
    {
        trace_dispatch("RAW", sql);
        self.executor.execute(sql)
    }

    /// 把一段现成的 SQL 文本直接交给查询能力，句柄原样透传。
    pub fn run_query(&self, sql: &str) -> Q::Handle
    where
        Q: QueryStatement,
    {
        trace_dispatch("RAW", sql);
        self.query_executor.query(sql)
    }
}
