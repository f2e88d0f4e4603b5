//! Display implementation for application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! on the console or routed through tracing. Keeping all text here gives a
//! single source of truth for wording and makes parameter usage type-safe.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(description) => format!("Task '{}' created", description),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::EmptyTaskIgnored => "Empty task description ignored".to_string(),

            // === SERVER MESSAGES ===
            Message::ServerStarted(addr) => format!("Serving tasks on http://{}/tasks/", addr),
            Message::ServerBindFailed(addr) => format!("Failed to bind listen address {}", addr),
            Message::ServerShuttingDown => "Shutting down".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError(e) => format!("Failed to parse configuration file: {}", e),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleTasks => "Task list settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptListenAddress => "Listen address (host:port)".to_string(),
            Message::PromptTasksPerPage => "Tasks per page".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, e) => format!("Migration v{} failed: {}", version, e),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseVersion(version) => format!("Current schema version: {}", version),
        };
        write!(f, "{}", text)
    }
}
