//! HTTP routes of the task list.
//!
//! Three routes make up the whole surface:
//!
//! - `GET /tasks/` - list view with `status`, `page` and `filter` params
//! - `POST /tasks/add-task/` - create a task from the `task` form field
//! - `POST /tasks/complete-task/{id}/` - mark a task completed
//!
//! Mutations redirect back to the list view carrying the request's query
//! string, so the active filter and page survive the round-trip. Disallowed
//! methods get a 405 from the method router.

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskListQuery};
use crate::libs::view::View;
use crate::msg_debug;
use crate::web::error::WebError;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, Query, RawQuery, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Shared state of the HTTP handlers.
///
/// Only the configuration is shared; each request opens its own database
/// connection, so no in-process state outlives a request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState { config: Arc::new(config) }
    }

    fn tasks(&self) -> Result<Tasks, WebError> {
        Ok(Tasks::open(&self.config.db_path()?)?)
    }
}

/// Builds the axum router with all task routes mounted.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks/", get(todo_list))
        .route("/tasks/add-task/", post(add_task))
        .route("/tasks/complete-task/{task_id}/", post(complete_task))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct AddTaskForm {
    task: Option<String>,
}

/// GET /tasks/
async fn todo_list(State(state): State<AppState>, Query(query): Query<TaskListQuery>) -> Result<Html<String>, WebError> {
    let page = state.tasks()?.fetch_page(&query, state.config.tasks_per_page())?;

    Ok(Html(View::todo_page(&page, &query)))
}

/// POST /tasks/add-task/
///
/// An empty or missing description is silently ignored: no task is
/// created and the request still redirects to the list view.
async fn add_task(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
    form: Result<Form<AddTaskForm>, FormRejection>,
) -> Result<Redirect, WebError> {
    let description = form.ok().and_then(|Form(f)| f.task).filter(|d| !d.is_empty());

    match description {
        Some(description) => {
            state.tasks()?.insert(&Task::new(&description))?;
            msg_debug!(Message::TaskCreated(description));
        }
        None => msg_debug!(Message::EmptyTaskIgnored),
    }

    Ok(Redirect::to(&list_url(raw_query)))
}

/// POST /tasks/complete-task/{task_id}/
async fn complete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    RawQuery(raw_query): RawQuery,
) -> Result<Redirect, WebError> {
    let affected = state.tasks()?.complete(task_id)?;
    if affected == 0 {
        return Err(WebError::TaskNotFound(task_id));
    }
    msg_debug!(Message::TaskCompleted(task_id));

    Ok(Redirect::to(&list_url(raw_query)))
}

/// The list view URL with the incoming query string re-attached.
fn list_url(raw_query: Option<String>) -> String {
    match raw_query {
        Some(query) if !query.is_empty() => format!("/tasks/?{}", query),
        _ => "/tasks/".to_string(),
    }
}
