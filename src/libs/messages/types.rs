/// All user-facing message variants of the application.
///
/// Text lives in the `Display` implementation so every message is defined
/// in one place; variants carry the dynamic pieces as typed parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskCompleted(i64),
    EmptyTaskIgnored,

    // === SERVER MESSAGES ===
    ServerStarted(String),
    ServerBindFailed(String),
    ServerShuttingDown,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String),
    ConfigModuleServer,
    ConfigModuleTasks,
    PromptSelectModules,
    PromptListenAddress,
    PromptTasksPerPage,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
    DatabaseVersion(u32),
}
