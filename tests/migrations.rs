#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo_list::db::db::Db;
    use todo_list::db::migrations::{get_db_version, needs_migration, MigrationManager};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl MigrationTestContext {
        fn db(&self) -> Db {
            Db::open(&self.temp_dir.path().join("todo.db")).unwrap()
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_is_migrated(ctx: &mut MigrationTestContext) {
        let db = ctx.db();

        let manager = MigrationManager::new();
        assert_eq!(get_db_version(&db.conn).unwrap(), manager.latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopening_is_idempotent(ctx: &mut MigrationTestContext) {
        let first = get_db_version(&ctx.db().conn).unwrap();
        let second = get_db_version(&ctx.db().conn).unwrap();

        assert_eq!(first, second);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_tasks_table_exists(ctx: &mut MigrationTestContext) {
        let db = ctx.db();

        let count: i64 = db
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'tasks'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history_is_recorded(ctx: &mut MigrationTestContext) {
        let db = ctx.db();

        let name: String = db
            .conn
            .query_row("SELECT name FROM migrations WHERE version = 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(name, "create_tasks_table");
    }
}
