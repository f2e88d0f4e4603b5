/// Application configuration loading, saving and the setup wizard.
pub mod config;

/// Platform-specific application data directory resolution.
pub mod data_storage;

/// User-facing message catalog and display macros.
pub mod messages;

/// Task domain types: records, query parameters and pages.
pub mod task;

/// HTML rendering of the task list page.
pub mod view;
