#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard, OnceLock};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo_list::libs::config::{Config, ServerConfig, TasksConfig};

    // Config resolution reads HOME and override variables, so these tests
    // must not run concurrently within this binary.
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK
                .get_or_init(|| Mutex::new(()))
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            for var in ["TODO_LIST_LISTEN", "TASKS_PER_PAGE", "TODO_LIST_DATABASE", "SECRET_KEY"] {
                std::env::remove_var(var);
            }
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_defaults_without_config_file(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();

        assert_eq!(config.listen(), "127.0.0.1:8080");
        assert_eq!(config.tasks_per_page(), 10);
        assert_eq!(config.secret_key(), "not a secret key");
        assert!(config.db_path().unwrap().ends_with("todo.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                listen: "0.0.0.0:3000".to_string(),
            }),
            tasks: Some(TasksConfig { tasks_per_page: 25 }),
            ..Config::default()
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.listen(), "0.0.0.0:3000");
        assert_eq!(loaded.tasks_per_page(), 25);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_environment_overrides_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            tasks: Some(TasksConfig { tasks_per_page: 25 }),
            ..Config::default()
        };

        std::env::set_var("TASKS_PER_PAGE", "5");
        std::env::set_var("TODO_LIST_LISTEN", "127.0.0.1:9999");
        let per_page = config.tasks_per_page();
        let listen = config.listen();
        std::env::remove_var("TASKS_PER_PAGE");
        std::env::remove_var("TODO_LIST_LISTEN");

        assert_eq!(per_page, 5);
        assert_eq!(listen, "127.0.0.1:9999");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unparsable_page_size_falls_back(_ctx: &mut ConfigTestContext) {
        let config = Config::default();

        std::env::set_var("TASKS_PER_PAGE", "not a number");
        let per_page = config.tasks_per_page();
        std::env::remove_var("TASKS_PER_PAGE");

        assert_eq!(per_page, 10);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_page_size_is_clamped_to_at_least_one(_ctx: &mut ConfigTestContext) {
        let config = Config::default();

        std::env::set_var("TASKS_PER_PAGE", "0");
        let from_env = config.tasks_per_page();
        std::env::remove_var("TASKS_PER_PAGE");

        let config = Config {
            tasks: Some(TasksConfig { tasks_per_page: -5 }),
            ..Config::default()
        };

        assert_eq!(from_env, 1);
        assert_eq!(config.tasks_per_page(), 1);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_explicit_database_path(_ctx: &mut ConfigTestContext) {
        let config = Config {
            database: Some("/tmp/tasks.db".into()),
            ..Config::default()
        };

        assert_eq!(config.db_path().unwrap(), std::path::PathBuf::from("/tmp/tasks.db"));
    }
}
