//! Configuration management for the todo-list application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory and can be created through an interactive setup wizard. Every
//! value has a sensible default, so the application runs without any
//! configuration file at all, and each setting can be overridden through an
//! environment variable for deployment:
//!
//! - `TODO_LIST_LISTEN` - listen address of the HTTP server
//! - `TASKS_PER_PAGE` - page size of the task list view
//! - `TODO_LIST_DATABASE` - path of the SQLite database file
//! - `SECRET_KEY` - session secret (reserved, not used by the task pipeline)

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::DEFAULT_TASKS_PER_PAGE;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

const DEFAULT_LISTEN: &str = "127.0.0.1:8080";
const DEFAULT_SECRET_KEY: &str = "not a secret key";

/// HTTP server settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to, in `host:port` form.
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen: DEFAULT_LISTEN.to_string(),
        }
    }
}

/// Task list view settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TasksConfig {
    /// Page size of the list view.
    pub tasks_per_page: i64,
}

impl Default for TasksConfig {
    fn default() -> Self {
        TasksConfig {
            tasks_per_page: DEFAULT_TASKS_PER_PAGE,
        }
    }
}

/// Root configuration object.
///
/// Every section is optional so a partial configuration file stays valid
/// and unconfigured sections fall back to their defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<TasksConfig>,

    /// Path of the SQLite database file. Defaults to `todo.db` in the
    /// application data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Session secret. Carried for the web layer; the task pipeline does
    /// not use it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when the
    /// file does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| crate::msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        Ok(config)
    }

    /// Writes the configuration to the application data directory as
    /// pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Listen address of the HTTP server, with environment override.
    pub fn listen(&self) -> String {
        env::var("TODO_LIST_LISTEN")
            .ok()
            .or_else(|| self.server.as_ref().map(|s| s.listen.clone()))
            .unwrap_or_else(|| DEFAULT_LISTEN.to_string())
    }

    /// Page size of the list view, with environment override. Clamped to
    /// at least one task per page.
    pub fn tasks_per_page(&self) -> i64 {
        env::var("TASKS_PER_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .or_else(|| self.tasks.as_ref().map(|t| t.tasks_per_page))
            .unwrap_or(DEFAULT_TASKS_PER_PAGE)
            .max(1)
    }

    /// Path of the SQLite database file, with environment override.
    pub fn db_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var("TODO_LIST_DATABASE") {
            return Ok(PathBuf::from(path));
        }
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(crate::db::db::DB_FILE_NAME),
        }
    }

    /// Session secret, with environment override.
    pub fn secret_key(&self) -> String {
        env::var("SECRET_KEY")
            .ok()
            .or_else(|| self.secret_key.clone())
            .unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Starts from the existing configuration so current values appear as
    /// prompt defaults, lets the user pick which sections to change, and
    /// returns the updated configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleServer, Message::ConfigModuleTasks];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|m| m.to_string()).collect::<Vec<_>>())
            .interact()?;

        for selection in selected {
            match selection {
                0 => {
                    let default = config.server.clone().unwrap_or_default();
                    config.server = Some(ServerConfig {
                        listen: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptListenAddress.to_string())
                            .default(default.listen)
                            .interact_text()?,
                    });
                }
                1 => {
                    let default = config.tasks.clone().unwrap_or_default();
                    config.tasks = Some(TasksConfig {
                        tasks_per_page: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTasksPerPage.to_string())
                            .default(default.tasks_per_page)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
