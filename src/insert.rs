//! InsertBuilder：构建 INSERT 语句。

use crate::exec::{DispatchError, ExecuteStatement, Unbound, trace_dispatch};
use crate::literal::write_literal;
use crate::statement::{BuildError, Statement};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

/// 多行 INSERT 构建器。
///
/// 列顺序是按行的插入顺序扫描时各列名的首次出现顺序；某行缺少某列时该单元格
/// 输出 `NULL`。行内重复列名按映射语义处理：保留首次出现的位置，值后写覆盖。
#[derive(Debug, Clone)]
pub struct InsertBuilder<E = Unbound> {
    table: String,
    rows: Vec<Vec<(String, SqlValue)>>,
    executor: Option<E>,
}

impl InsertBuilder {
    /// 创建未绑定执行器的 builder：`to_sql` 可用，`dispatch` 一定失败。
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            rows: Vec::new(),
            executor: None,
        }
    }
}

impl<E> InsertBuilder<E> {
    /// 创建绑定了执行器能力的 builder；执行器在构造后不可更换。
    pub fn with_executor(table: impl Into<String>, executor: E) -> Self {
        Self {
            table: table.into(),
            rows: Vec::new(),
            executor: Some(executor),
        }
    }

    /// 追加一行。
    pub fn values<K, V>(&mut self, row: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<SqlValue>,
    {
        let mut cells: Vec<(String, SqlValue)> = Vec::new();
        for (col, val) in row {
            let col = col.into();
            let val = val.into();
            match cells.iter_mut().find(|(c, _)| *c == col) {
                Some(cell) => cell.1 = val,
                None => cells.push((col, val)),
            }
        }
        self.rows.push(cells);
        self
    }

    /// 序列化。没有任何行时返回 [`BuildError::NoRows`]。
    pub fn to_sql(&self) -> Result<String, BuildError> {
        if self.rows.is_empty() {
            return Err(BuildError::NoRows);
        }

        let mut cols: Vec<&str> = Vec::new();
        for row in &self.rows {
            for (col, _) in row {
                if !cols.iter().any(|c| c == col) {
                    cols.push(col.as_str());
                }
            }
        }

        let mut buf = StringBuilder::new();
        buf.write_str("INSERT INTO ");
        buf.write_str(&self.table);
        buf.write_str(" (");
        let col_names: Vec<String> = cols.iter().map(|c| c.to_string()).collect();
        buf.write_strings(&col_names, ", ");
        buf.write_str(") VALUES ");

        let rendered: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                let mut cell_buf = String::from("(");
                for (i, col) in cols.iter().enumerate() {
                    if i > 0 {
                        cell_buf.push_str(", ");
                    }
                    match row.iter().find(|(c, _)| c == col) {
                        Some((_, v)) => write_literal(&mut cell_buf, v),
                        None => cell_buf.push_str("NULL"),
                    }
                }
                cell_buf.push(')');
                cell_buf
            })
            .collect();
        buf.write_strings(&rendered, ", ");

        Ok(buf.into_string())
    }
}

impl<E: ExecuteStatement> InsertBuilder<E> {
    /// 序列化并交给执行器；执行器的返回值原样透传。
    pub fn dispatch(&self) -> Result<E::Outcome, DispatchError> {
        let executor = self.executor.as_ref().ok_or(DispatchError::NoExecutor)?;
        let sql = self.to_sql()?;
        trace_dispatch("INSERT", &sql);
        Ok(executor.execute(&sql))
    }
}

impl<E: Clone> Statement for InsertBuilder<E> {
    fn to_sql(&self) -> Result<String, BuildError> {
        InsertBuilder::to_sql(self)
    }
}
