//! SelectBuilder：构建 SELECT 语句。

use crate::cond::Cond;
use crate::exec::{DispatchError, QueryStatement, Unbound, trace_dispatch};
use crate::statement::{BuildError, Statement};
use crate::string_builder::StringBuilder;
use crate::where_clause::render_where;

/// 排序方向。刻意用双值枚举而不是布尔，避免调用点真假值歧义。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// SELECT 构建器。
///
/// 多次 `where_` 调用累积谓词，序列化时隐式顶层 AND；`limit(0)` 等价于不设。
#[derive(Debug, Clone)]
pub struct SelectBuilder<Q = Unbound> {
    table: String,
    conds: Vec<Cond>,
    orders: Vec<(String, Order)>,
    limit: u64,
    executor: Option<Q>,
}

impl SelectBuilder {
    /// 创建未绑定执行器的 builder：`to_sql` 可用，`dispatch` 一定失败。
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            conds: Vec::new(),
            orders: Vec::new(),
            limit: 0,
            executor: None,
        }
    }
}

impl<Q> SelectBuilder<Q> {
    /// 创建绑定了查询能力的 builder；执行器在构造后不可更换。
    pub fn with_executor(table: impl Into<String>, executor: Q) -> Self {
        Self {
            table: table.into(),
            conds: Vec::new(),
            orders: Vec::new(),
            limit: 0,
            executor: Some(executor),
        }
    }

    /// 追加一个谓词。
    pub fn where_(&mut self, cond: Cond) -> &mut Self {
        self.conds.push(cond);
        self
    }

    /// 追加一个排序项。空列名会在序列化时被拒绝。
    pub fn order(&mut self, col: impl Into<String>, dir: Order) -> &mut Self {
        self.orders.push((col.into(), dir));
        self
    }

    /// 设置 LIMIT；`0` 表示不输出 LIMIT 子句。
    pub fn limit(&mut self, n: u64) -> &mut Self {
        self.limit = n;
        self
    }

    /// 序列化。
    pub fn to_sql(&self) -> Result<String, BuildError> {
        if self.orders.iter().any(|(col, _)| col.is_empty()) {
            return Err(BuildError::EmptyOrderColumn);
        }

        let mut buf = StringBuilder::new();
        buf.write_str("SELECT * FROM ");
        buf.write_str(&self.table);

        if let Some(w) = render_where(&self.conds) {
            buf.write_str(" WHERE ");
            buf.write_str(&w);
        }

        if !self.orders.is_empty() {
            buf.write_str(" ORDER BY ");
            let specs: Vec<String> = self
                .orders
                .iter()
                .map(|(col, dir)| format!("{col} {}", dir.as_str()))
                .collect();
            buf.write_strings(&specs, ", ");
        }

        if self.limit != 0 {
            buf.write_str(" LIMIT ");
            buf.write_str(&self.limit.to_string());
        }

        Ok(buf.into_string())
    }
}

impl<Q: QueryStatement> SelectBuilder<Q> {
    /// 序列化并交给查询能力，返回其行句柄，原样透传。
    pub fn dispatch(&self) -> Result<Q::Handle, DispatchError> {
        let executor = self.executor.as_ref().ok_or(DispatchError::NoExecutor)?;
        let sql = self.to_sql()?;
        trace_dispatch("SELECT", &sql);
        Ok(executor.query(&sql))
    }
}

impl<Q: Clone> Statement for SelectBuilder<Q> {
    fn to_sql(&self) -> Result<String, BuildError> {
        SelectBuilder::to_sql(self)
    }
}
