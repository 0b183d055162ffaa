//! 辅助宏。

/// 构造一行 `(列名, 字面量)` 序列，供 [`InsertBuilder::values`] 使用。
///
/// ```
/// use sqltext::row;
///
/// let mut ib = sqltext::builder::insert("users");
/// ib.values(row! { "name" => "alice", "age" => 29 });
/// ```
///
/// [`InsertBuilder::values`]: crate::InsertBuilder::values
#[macro_export]
macro_rules! row {
    () => {
        ::std::vec::Vec::<(::std::string::String, $crate::SqlValue)>::new()
    };
    ($($col:expr => $val:expr),+ $(,)?) => {
        ::std::vec![
            $( (::std::string::String::from($col), $crate::SqlValue::from($val)) ),+
        ]
    };
}
