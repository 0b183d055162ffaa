//! UpdateBuilder：构建 UPDATE 语句。

use crate::cond::Cond;
use crate::exec::{DispatchError, ExecuteStatement, Unbound, trace_dispatch};
use crate::literal::write_literal;
use crate::statement::{BuildError, Statement};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;
use crate::where_clause::render_where;

/// UPDATE 构建器。
///
/// `set` 同列后写覆盖，迭代顺序保留首次出现的位置；谓词累积规则与 SELECT 相同。
#[derive(Debug, Clone)]
pub struct UpdateBuilder<E = Unbound> {
    table: String,
    assignments: Vec<(String, SqlValue)>,
    conds: Vec<Cond>,
    executor: Option<E>,
}

impl UpdateBuilder {
    /// 创建未绑定执行器的 builder：`to_sql` 可用，`dispatch` 一定失败。
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            assignments: Vec::new(),
            conds: Vec::new(),
            executor: None,
        }
    }
}

impl<E> UpdateBuilder<E> {
    /// 创建绑定了执行器能力的 builder；执行器在构造后不可更换。
    pub fn with_executor(table: impl Into<String>, executor: E) -> Self {
        Self {
            table: table.into(),
            assignments: Vec::new(),
            conds: Vec::new(),
            executor: Some(executor),
        }
    }

    /// 赋值一列；同列重复调用后写覆盖。
    pub fn set(&mut self, col: impl Into<String>, value: impl Into<SqlValue>) -> &mut Self {
        let col = col.into();
        let value = value.into();
        match self.assignments.iter_mut().find(|(c, _)| *c == col) {
            Some(slot) => slot.1 = value,
            None => self.assignments.push((col, value)),
        }
        self
    }

    /// 追加一个谓词。
    pub fn where_(&mut self, cond: Cond) -> &mut Self {
        self.conds.push(cond);
        self
    }

    /// 序列化。没有任何赋值时返回 [`BuildError::NoAssignments`]。
    pub fn to_sql(&self) -> Result<String, BuildError> {
        if self.assignments.is_empty() {
            return Err(BuildError::NoAssignments);
        }

        let mut buf = StringBuilder::new();
        buf.write_str("UPDATE ");
        buf.write_str(&self.table);
        buf.write_str(" SET ");
        let sets: Vec<String> = self
            .assignments
            .iter()
            .map(|(col, val)| {
                let mut s = String::new();
                s.push_str(col);
                s.push('=');
                write_literal(&mut s, val);
                s
            })
            .collect();
        buf.write_strings(&sets, ", ");

        if let Some(w) = render_where(&self.conds) {
            buf.write_str(" WHERE ");
            buf.write_str(&w);
        }

        Ok(buf.into_string())
    }
}

impl<E: ExecuteStatement> UpdateBuilder<E> {
    /// 序列化并交给执行器；执行器的返回值原样透传。
    pub fn dispatch(&self) -> Result<E::Outcome, DispatchError> {
        let executor = self.executor.as_ref().ok_or(DispatchError::NoExecutor)?;
        let sql = self.to_sql()?;
        trace_dispatch("UPDATE", &sql);
        Ok(executor.execute(&sql))
    }
}

impl<E: Clone> Statement for UpdateBuilder<E> {
    fn to_sql(&self) -> Result<String, BuildError> {
        UpdateBuilder::to_sql(self)
    }
}
