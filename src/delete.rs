//! DeleteBuilder：构建 DELETE 语句。

use crate::cond::Cond;
use crate::exec::{DispatchError, ExecuteStatement, Unbound, trace_dispatch};
use crate::statement::{BuildError, Statement};
use crate::string_builder::StringBuilder;
use crate::where_clause::render_where;

/// DELETE 构建器。谓词累积规则与 SELECT 相同；没有谓词时删除整表，不做保护。
#[derive(Debug, Clone)]
pub struct DeleteBuilder<E = Unbound> {
    table: String,
    conds: Vec<Cond>,
    executor: Option<E>,
}

impl DeleteBuilder {
    /// 创建未绑定执行器的 builder：`to_sql` 可用，`dispatch` 一定失败。
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            conds: Vec::new(),
            executor: None,
        }
    }
}

impl<E> DeleteBuilder<E> {
    /// 创建绑定了执行器能力的 builder；执行器在构造后不可更换。
    pub fn with_executor(table: impl Into<String>, executor: E) -> Self {
        Self {
            table: table.into(),
            conds: Vec::new(),
            executor: Some(executor),
        }
    }

    /// 追加一个谓词。
    pub fn where_(&mut self, cond: Cond) -> &mut Self {
        self.conds.push(cond);
        self
    }

    /// 序列化。
    pub fn to_sql(&self) -> Result<String, BuildError> {
        let mut buf = StringBuilder::new();
        buf.write_str("DELETE FROM ");
        buf.write_str(&self.table);

        if let Some(w) = render_where(&self.conds) {
            buf.write_str(" WHERE ");
            buf.write_str(&w);
        }

        Ok(buf.into_string())
    }
}

impl<E: ExecuteStatement> DeleteBuilder<E> {
    /// 序列化并交给执行器；执行器的返回值原样透传。
    pub fn dispatch(&self) -> Result<E::Outcome, DispatchError> {
        let executor = self.executor.as_ref().ok_or(DispatchError::NoExecutor)?;
        let sql = self.to_sql()?;
        trace_dispatch("DELETE", &sql);
        Ok(executor.execute(&sql))
    }
}

impl<E: Clone> Statement for DeleteBuilder<E> {
    fn to_sql(&self) -> Result<String, BuildError> {
        DeleteBuilder::to_sql(self)
    }
}
