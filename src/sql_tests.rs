#[cfg(test)]
mod tests {
    use crate::cond::eq;
    use crate::exec::{DispatchError, FetchRows, exec_fn, query_fn};
    use crate::row;
    use crate::sql::{Sql, builder};
    use crate::statement::{BuildError, Statement};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_sql() -> (Sql<impl ExecCap, impl QueryCap>, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let exec_log = log.clone();
        let query_log = log.clone();
        let sql = Sql::new(
            exec_fn(move |sql: &str| {
                exec_log.borrow_mut().push(format!("exec: {sql}"));
                1_u64
            }),
            query_fn(move |sql: &str| {
                query_log.borrow_mut().push(format!("query: {sql}"));
                vec![sql.to_string()]
            }),
        );
        (sql, log)
    }

    // 只是让 helper 的返回类型可写
    trait ExecCap: crate::exec::ExecuteStatement<Outcome = u64> + Clone {}
    impl<T: crate::exec::ExecuteStatement<Outcome = u64> + Clone> ExecCap for T {}
    trait QueryCap: crate::exec::QueryStatement<Handle = Vec<String>> + Clone {}
    impl<T: crate::exec::QueryStatement<Handle = Vec<String>> + Clone> QueryCap for T {}

    #[test]
    fn insert_dispatch_uses_the_write_capability() {
        let (db, log) = recording_sql();
        let mut ib = db.insert("users");
        ib.values(row! { "name" => "alice", "age" => 29 });
        assert_eq!(ib.dispatch().unwrap(), 1);
        assert_eq!(
            log.borrow().as_slice(),
            ["exec: INSERT INTO users (name, age) VALUES ('alice', 29)"]
        );
    }

    #[test]
    fn select_dispatch_uses_the_query_capability() {
        let (db, log) = recording_sql();
        let mut sb = db.select("users");
        sb.where_(eq("age", 29));
        let handle = sb.dispatch().unwrap();
        assert_eq!(
            handle.fetch_all(),
            vec!["SELECT * FROM users WHERE age = 29".to_string()]
        );
        assert_eq!(
            log.borrow().as_slice(),
            ["query: SELECT * FROM users WHERE age = 29"]
        );
    }

    #[test]
    fn update_and_delete_bind_the_write_capability() {
        let (db, log) = recording_sql();
        let mut ub = db.update("users");
        ub.set("age", 26).where_(eq("name", "alice"));
        assert_eq!(ub.dispatch().unwrap(), 1);

        let mut del = db.delete("users");
        del.where_(eq("age", 25));
        assert_eq!(del.dispatch().unwrap(), 1);

        assert_eq!(
            log.borrow().as_slice(),
            [
                "exec: UPDATE users SET age=26 WHERE name = 'alice'",
                "exec: DELETE FROM users WHERE age = 25",
            ]
        );
    }

    #[test]
    fn run_forwards_raw_text() {
        let (db, log) = recording_sql();
        assert_eq!(db.run("CREATE TABLE users(name VARCHAR, age INTEGER)"), 1);
        assert_eq!(
            log.borrow().as_slice(),
            ["exec: CREATE TABLE users(name VARCHAR, age INTEGER)"]
        );
    }

    #[test]
    fn run_query_forwards_raw_text() {
        let (db, _log) = recording_sql();
        let handle = db.run_query("SELECT * FROM users");
        assert_eq!(handle.fetch_all(), vec!["SELECT * FROM users".to_string()]);
    }

    #[test]
    fn repeat_dispatch_reserializes_current_state() {
        let (db, log) = recording_sql();
        let mut ub = db.update("users");
        ub.set("age", 26);
        ub.dispatch().unwrap();
        ub.set("age", 27).where_(eq("name", "alice"));
        ub.dispatch().unwrap();
        assert_eq!(
            log.borrow().as_slice(),
            [
                "exec: UPDATE users SET age=26",
                "exec: UPDATE users SET age=27 WHERE name = 'alice'",
            ]
        );
    }

    #[test]
    fn executor_outcome_passes_through_unchanged() {
        // 执行层自己的错误不被包装
        let db = Sql::new(
            exec_fn(|_sql: &str| -> Result<u64, String> { Err("boom".to_string()) }),
            query_fn(|_sql: &str| Vec::<u8>::new()),
        );
        let mut ib = db.insert("t");
        ib.values(row! { "a" => 1 });
        assert_eq!(ib.dispatch().unwrap(), Err("boom".to_string()));
    }

    #[test]
    fn unbound_builder_serializes_but_never_dispatches() {
        let mut ib = builder::insert("t");
        ib.values(row! { "a" => 1 });
        assert_eq!(ib.to_sql().unwrap(), "INSERT INTO t (a) VALUES (1)");
        assert_eq!(ib.dispatch().unwrap_err(), DispatchError::NoExecutor);

        assert_eq!(
            builder::select("t").dispatch().unwrap_err(),
            DispatchError::NoExecutor
        );
    }

    #[test]
    fn missing_executor_wins_over_missing_rows() {
        let ib = builder::insert("t");
        assert_eq!(ib.dispatch().unwrap_err(), DispatchError::NoExecutor);
    }

    #[test]
    fn bound_dispatch_surfaces_validation_errors() {
        let (db, log) = recording_sql();
        let ib = db.insert("t");
        assert_eq!(
            ib.dispatch().unwrap_err(),
            DispatchError::Build(BuildError::NoRows)
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn boxed_statements_are_heterogeneous_and_clonable() {
        let mut sb = builder::select("users");
        sb.where_(eq("age", 29));
        let mut ub = builder::update("users");
        ub.set("age", 30);
        let mut ib = builder::insert("users");
        ib.values(row! { "name" => "bob" });

        let stmts: Vec<Box<dyn Statement>> = vec![
            Box::new(sb),
            Box::new(ub),
            Box::new(ib),
            Box::new(builder::delete("users")),
        ];
        let texts: Vec<String> = stmts.iter().map(|s| s.to_sql().unwrap()).collect();
        assert_eq!(
            texts,
            [
                "SELECT * FROM users WHERE age = 29",
                "UPDATE users SET age=30",
                "INSERT INTO users (name) VALUES ('bob')",
                "DELETE FROM users",
            ]
        );

        let cloned = stmts.clone();
        let cloned_texts: Vec<String> = cloned.iter().map(|s| s.to_sql().unwrap()).collect();
        assert_eq!(cloned_texts, texts);
    }
}
