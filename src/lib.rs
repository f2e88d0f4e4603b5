//! # Todo List
//!
//! A minimal task-tracking web application: view, add, complete, filter
//! and paginate a list of textual tasks stored in a single SQLite table,
//! rendered as server-side HTML.
//!
//! ## Features
//!
//! - **Task List**: newest-first listing with status and substring filters
//! - **Pagination**: fixed-size, 1-indexed pages with prev/next controls
//! - **Mutations**: add and one-way complete, redirecting back to the list
//! - **Configuration**: JSON config file with environment overrides
//! - **Migrations**: versioned SQLite schema management
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_list::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod web;
