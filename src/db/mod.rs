//! Database layer for the todo-list application.
//!
//! A thin persistence layer over SQLite: one `tasks` table, a versioned
//! migration system and the query pipeline behind the list view.

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Task storage: CRUD operations and the list query pipeline.
pub mod tasks;
