//! Task storage and the list query pipeline.
//!
//! Holds the CRUD operations of the single `tasks` table and the read-only
//! pipeline behind the list view: status filter, case-sensitive substring
//! filter and fixed-size pagination, applied in SQL. Ordering is newest
//! first by creation time, with insertion order (`id`) breaking ties so the
//! sequence is total.

use crate::db::db::Db;
use crate::libs::task::{Task, TaskListQuery, TaskPage, TaskStatus};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const INSERT_TASK: &str = "INSERT INTO tasks (description, active, created_at)
    VALUES (?1, ?2, COALESCE(?3, datetime(CURRENT_TIMESTAMP, 'localtime')))";
const SELECT_TASKS: &str = "SELECT id, description, active, created_at FROM tasks";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";
const SELECT_BY_ID: &str = "SELECT id, description, active, created_at FROM tasks WHERE id = ?1";
const COMPLETE_TASK: &str = "UPDATE tasks SET active = FALSE WHERE id = ?1";
const ORDER_NEWEST_FIRST: &str = "ORDER BY created_at DESC, id ASC";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    /// Opens the task store backed by an explicit database file.
    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a single task. Omitted fields get their defaults: tasks
    /// start active and `created_at` falls back to the current time.
    pub fn insert(&mut self, task: &Task) -> Result<()> {
        let created_at = task.created_at.map(|t| t.format(TIMESTAMP_FORMAT).to_string());
        self.conn.execute(INSERT_TASK, params![task.description, task.active, created_at])?;
        Ok(())
    }

    /// Looks up a task by its id.
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(SELECT_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Marks a task as completed and returns the number of affected rows,
    /// so callers can surface an unknown id. Completing an already
    /// completed task matches one row and changes nothing.
    pub fn complete(&mut self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(COMPLETE_TASK, params![id])?;
        Ok(affected)
    }

    /// Total number of stored tasks, regardless of status.
    pub fn count(&mut self) -> Result<i64> {
        let count = self.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Runs the list query pipeline: status filter, substring filter,
    /// newest-first ordering and pagination.
    ///
    /// Pages are 1-indexed and fixed-size. A page outside the available
    /// range, including `page < 1`, yields an empty page with the counters
    /// intact rather than an error.
    pub fn fetch_page(&mut self, query: &TaskListQuery, per_page: i64) -> Result<TaskPage> {
        let (where_sql, where_params) = Self::build_filter(query);

        let total: i64 = self
            .conn
            .query_row(&format!("{} {}", COUNT_TASKS, where_sql), params_from_iter(where_params.iter()), |row| {
                row.get(0)
            })?;

        // Page numbers below 1, or so large the offset leaves i64 range,
        // are out of range: an empty page, not an error
        let offset = (query.page >= 1)
            .then(|| (query.page - 1).checked_mul(per_page))
            .flatten();

        let mut tasks = Vec::new();
        if let Some(offset) = offset {
            let sql = format!("{} {} {} LIMIT ? OFFSET ?", SELECT_TASKS, where_sql, ORDER_NEWEST_FIRST);
            let mut select_params = where_params;
            select_params.push(Value::from(per_page));
            select_params.push(Value::from(offset));

            let mut stmt = self.conn.prepare(&sql)?;
            let task_iter = stmt.query_map(params_from_iter(select_params.iter()), Self::map_row)?;
            for task in task_iter {
                tasks.push(task?);
            }
        }

        Ok(TaskPage {
            tasks,
            page: query.page,
            per_page,
            total,
        })
    }

    /// Builds the WHERE clause shared by the count and select queries.
    ///
    /// The substring match uses `instr` instead of `LIKE`: the contract is
    /// a case-sensitive literal containment match, and `LIKE` is
    /// case-insensitive for ASCII besides needing wildcard escaping.
    fn build_filter(query: &TaskListQuery) -> (String, Vec<Value>) {
        let mut clauses: Vec<&str> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        match query.status {
            Some(TaskStatus::Active) => clauses.push("active = TRUE"),
            Some(TaskStatus::Completed) => clauses.push("active = FALSE"),
            Some(TaskStatus::All) | None => {}
        }

        if let Some(filter) = query.filter() {
            clauses.push("instr(description, ?) > 0");
            params.push(Value::from(filter.to_string()));
        }

        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", clauses.join(" AND "))
        };

        (where_sql, params)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            description: row.get(1)?,
            active: row.get(2)?,
            created_at: row
                .get::<_, Option<String>>(3)?
                .and_then(|s| NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).ok()),
        })
    }
}
