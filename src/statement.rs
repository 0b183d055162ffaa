//! 语句公共契约与构建错误。

use dyn_clone::DynClone;

/// 构建（序列化）阶段的校验错误。
///
/// 序列化失败不会改动 builder 状态；调用方可以补全状态后重试。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("insert builder has no value rows")]
    NoRows,
    #[error("update builder has no assignments")]
    NoAssignments,
    #[error("order by requires a non-empty column name")]
    EmptyOrderColumn,
}

/// 所有语句 builder 的公共契约：可重复、无副作用地序列化为 SQL 文本。
pub trait Statement: DynClone {
    fn to_sql(&self) -> Result<String, BuildError>;
}

dyn_clone::clone_trait_object!(Statement);
