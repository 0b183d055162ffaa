#[cfg(test)]
mod tests {
    use crate::cond::{and, eq};
    use crate::sql::builder;
    use crate::statement::BuildError;
    use pretty_assertions::assert_eq;

    #[test]
    fn update_set_where() {
        let mut ub = builder::update("users");
        ub.set("age", 26).where_(eq("name", "alice"));
        assert_eq!(
            ub.to_sql().unwrap(),
            "UPDATE users SET age=26 WHERE name = 'alice'"
        );
    }

    #[test]
    fn update_without_where() {
        let mut ub = builder::update("users");
        ub.set("level", 10);
        assert_eq!(ub.to_sql().unwrap(), "UPDATE users SET level=10");
    }

    #[test]
    fn update_multiple_assignments_keep_insertion_order() {
        let mut ub = builder::update("users");
        ub.set("name", "charry").set("age", 26);
        assert_eq!(
            ub.to_sql().unwrap(),
            "UPDATE users SET name='charry', age=26"
        );
    }

    #[test]
    fn update_same_column_last_write_wins() {
        let mut ub = builder::update("t");
        ub.set("a", 1).set("b", 2).set("a", 3);
        assert_eq!(ub.to_sql().unwrap(), "UPDATE t SET a=3, b=2");
    }

    #[test]
    fn update_accumulated_predicates_are_implicitly_anded() {
        let mut ub = builder::update("users");
        ub.set("age", 30)
            .where_(eq("name", "alice"))
            .where_(eq("age", 29));
        assert_eq!(
            ub.to_sql().unwrap(),
            "UPDATE users SET age=30 WHERE (name = 'alice') AND (age = 29)"
        );
    }

    #[test]
    fn update_no_assignments_is_a_validation_error() {
        let mut ub = builder::update("users");
        ub.where_(eq("name", "alice"));
        assert_eq!(ub.to_sql(), Err(BuildError::NoAssignments));
        // 失败不破坏状态：补上赋值即可重试
        ub.set("age", 1);
        assert_eq!(
            ub.to_sql().unwrap(),
            "UPDATE users SET age=1 WHERE name = 'alice'"
        );
    }

    #[test]
    fn delete_bare_table() {
        assert_eq!(builder::delete("users").to_sql().unwrap(), "DELETE FROM users");
    }

    #[test]
    fn delete_with_explicit_and() {
        let mut db = builder::delete("users");
        db.where_(and([eq("name", "john' doe"), eq("age", 25)]));
        assert_eq!(
            db.to_sql().unwrap(),
            "DELETE FROM users WHERE (name = 'john'' doe') AND (age = 25)"
        );
    }

    #[test]
    fn delete_accumulated_predicates_are_implicitly_anded() {
        let mut db = builder::delete("users");
        db.where_(eq("name", "bob")).where_(eq("age", 31));
        assert_eq!(
            db.to_sql().unwrap(),
            "DELETE FROM users WHERE (name = 'bob') AND (age = 31)"
        );
    }
}
