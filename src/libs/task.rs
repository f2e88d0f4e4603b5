use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Number of tasks shown per page when no configuration overrides it.
pub const DEFAULT_TASKS_PER_PAGE: i64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub description: String,
    pub active: bool,
    pub created_at: Option<NaiveDateTime>,
}

impl Task {
    /// Creates a new active task. The id and creation timestamp are
    /// assigned by the database on insert.
    pub fn new(description: &str) -> Self {
        Task {
            id: None,
            description: description.to_string(),
            active: true,
            created_at: None,
        }
    }

    /// Builds a task with explicit state, for fixtures that need
    /// completed tasks or controlled timestamps.
    pub fn with_state(description: &str, active: bool, created_at: Option<NaiveDateTime>) -> Self {
        Task {
            id: None,
            description: description.to_string(),
            active,
            created_at,
        }
    }
}

/// Status segment of the list view.
///
/// `All` and an unset status are equivalent: no status restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    All,
    Active,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::All => "all",
            TaskStatus::Active => "active",
            TaskStatus::Completed => "completed",
        }
    }
}

/// Query parameters of the list view. Transient, per-request.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskListQuery {
    pub status: Option<TaskStatus>,
    #[serde(default = "default_page")]
    pub page: i64,
    pub filter: Option<String>,
}

fn default_page() -> i64 {
    1
}

impl Default for TaskListQuery {
    fn default() -> Self {
        TaskListQuery {
            status: None,
            page: 1,
            filter: None,
        }
    }
}

impl TaskListQuery {
    pub fn new(status: Option<TaskStatus>, page: i64, filter: Option<String>) -> Self {
        TaskListQuery { status, page, filter }
    }

    /// The substring filter, with an empty string treated as no filter.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.is_empty())
    }
}

/// One page of the filtered, ordered task sequence plus the counters
/// the prev/next controls need.
#[derive(Debug, Clone)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
}

impl TaskPage {
    pub fn total_pages(&self) -> i64 {
        if self.total == 0 || self.per_page <= 0 {
            0
        } else {
            (self.total + self.per_page - 1) / self.per_page
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}
