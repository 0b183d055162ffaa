//! 执行能力注入：dispatch 时把序列化文本交给外部执行器。
//!
//! 本库自身不做任何 I/O；执行器是构造时注入的同步能力值，其返回值（以及
//! 执行层自己的错误）原样透传，库不做包装。

use std::convert::Infallible;
use std::rc::Rc;

use crate::statement::BuildError;

/// 写语句执行能力：INSERT / UPDATE / DELETE 的 dispatch 目标。
pub trait ExecuteStatement {
    /// 执行结果，对本库完全不透明。
    type Outcome;

    fn execute(&self, sql: &str) -> Self::Outcome;
}

/// 查询结果句柄的最小能力面：一次性取出全部行。
pub trait FetchRows {
    type Row;

    fn fetch_all(self) -> Vec<Self::Row>;
}

/// 读语句执行能力：SELECT 的 dispatch 目标，返回可取行的句柄。
pub trait QueryStatement {
    type Handle: FetchRows;

    fn query(&self, sql: &str) -> Self::Handle;
}

/// 行向量本身就是一个最简单的查询句柄。
impl<T> FetchRows for Vec<T> {
    type Row = T;

    fn fetch_all(self) -> Vec<T> {
        self
    }
}

impl<T: ExecuteStatement + ?Sized> ExecuteStatement for &T {
    type Outcome = T::Outcome;

    fn execute(&self, sql: &str) -> Self::Outcome {
        (**self).execute(sql)
    }
}

impl<T: ExecuteStatement + ?Sized> ExecuteStatement for Rc<T> {
    type Outcome = T::Outcome;

    fn execute(&self, sql: &str) -> Self::Outcome {
        (**self).execute(sql)
    }
}

impl<T: QueryStatement + ?Sized> QueryStatement for &T {
    type Handle = T::Handle;

    fn query(&self, sql: &str) -> Self::Handle {
        (**self).query(sql)
    }
}

impl<T: QueryStatement + ?Sized> QueryStatement for Rc<T> {
    type Handle = T::Handle;

    fn query(&self, sql: &str) -> Self::Handle {
        (**self).query(sql)
    }
}

/// 把 `Fn(&str) -> T` 闭包包装成写语句执行能力。
#[derive(Debug, Clone)]
pub struct ExecFn<F>(F);

pub fn exec_fn<F, T>(f: F) -> ExecFn<F>
where
    F: Fn(&str) -> T,
{
    ExecFn(f)
}

impl<F, T> ExecuteStatement for ExecFn<F>
where
    F: Fn(&str) -> T,
{
    type Outcome = T;

    fn execute(&self, sql: &str) -> T {
        (self.0)(sql)
    }
}

/// 把 `Fn(&str) -> H` 闭包包装成读语句执行能力。
#[derive(Debug, Clone)]
pub struct QueryFn<F>(F);

pub fn query_fn<F, H>(f: F) -> QueryFn<F>
where
    F: Fn(&str) -> H,
    H: FetchRows,
{
    QueryFn(f)
}

impl<F, H> QueryStatement for QueryFn<F>
where
    F: Fn(&str) -> H,
    H: FetchRows,
{
    type Handle = H;

    fn query(&self, sql: &str) -> H {
        (self.0)(sql)
    }
}

/// 未绑定执行器的占位类型：不可实例化，能力实现按构造即不可达。
#[derive(Debug, Clone, Copy)]
pub enum Unbound {}

impl ExecuteStatement for Unbound {
    type Outcome = Infallible;

    fn execute(&self, _sql: &str) -> Infallible {
        match *self {}
    }
}

impl QueryStatement for Unbound {
    type Handle = Infallible;

    fn query(&self, _sql: &str) -> Infallible {
        match *self {}
    }
}

impl FetchRows for Infallible {
    type Row = Infallible;

    fn fetch_all(self) -> Vec<Infallible> {
        match self {}
    }
}

/// dispatch 阶段的错误。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DispatchError {
    /// 构造时没有绑定执行器能力
    #[error("no executor capability bound to this builder")]
    NoExecutor,
    /// 序列化校验失败，原样上浮
    #[error(transparent)]
    Build(#[from] BuildError),
}

pub(crate) fn trace_dispatch(statement: &'static str, sql: &str) {
    tracing::debug!(target: "sqltext::dispatch", statement, sql, "dispatching statement");
}
