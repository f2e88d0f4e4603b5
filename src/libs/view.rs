//! Server-side HTML rendering of the task list page.
//!
//! Builds the whole page as a string: the add form, status filter links,
//! one row per task with its complete button, and prev/next pagination
//! controls. Links and form actions carry the current query parameters so
//! filter and page survive a mutation round-trip.

use super::task::{TaskListQuery, TaskPage, TaskStatus};

pub struct View {}

impl View {
    /// Renders the full list page.
    pub fn todo_page(page: &TaskPage, query: &TaskListQuery) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n<title>Todo List</title>\n");
        html.push_str(
            "<link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css\">\n",
        );
        html.push_str("</head>\n<body>\n<div class=\"container\">\n<h1>Todo List</h1>\n");

        html.push_str(&Self::add_form(query));
        html.push_str(&Self::status_tabs(query));
        html.push_str(&Self::task_rows(page, query));
        html.push_str(&Self::pagination(page, query));

        html.push_str("</div>\n</body>\n</html>\n");
        html
    }

    fn add_form(query: &TaskListQuery) -> String {
        format!(
            concat!(
                "<form class=\"row g-2 mb-3\" method=\"post\" action=\"/tasks/add-task/{}\">\n",
                "<div class=\"col-auto\"><input class=\"form-control\" type=\"text\" name=\"task\" ",
                "placeholder=\"New task\" maxlength=\"100\"></div>\n",
                "<div class=\"col-auto\"><button class=\"btn btn-primary\" type=\"submit\">Add</button></div>\n",
                "</form>\n"
            ),
            Self::query_attr(query, query.page)
        )
    }

    fn status_tabs(query: &TaskListQuery) -> String {
        let mut html = String::from("<ul class=\"nav nav-tabs mb-3\">\n");
        for status in [TaskStatus::All, TaskStatus::Active, TaskStatus::Completed] {
            let current = query.status.unwrap_or(TaskStatus::All) == status;
            let class = if current { "nav-link active" } else { "nav-link" };
            let mut tab_query = query.clone();
            tab_query.status = Some(status);
            html.push_str(&format!(
                "<li class=\"nav-item\"><a class=\"{}\" href=\"/tasks/{}\">{}</a></li>\n",
                class,
                Self::query_attr(&tab_query, 1),
                status.as_str()
            ));
        }
        html.push_str("</ul>\n");
        html
    }

    fn task_rows(page: &TaskPage, query: &TaskListQuery) -> String {
        let mut html = String::from("<ul class=\"list-group mb-3\">\n");
        for task in &page.tasks {
            let description = Self::escape(&task.description);
            if task.active {
                html.push_str(&format!(
                    concat!(
                        "<li class=\"list-group-item d-flex justify-content-between\">{}\n",
                        "<form method=\"post\" action=\"/tasks/complete-task/{}/{}\">",
                        "<button class=\"btn btn-sm btn-outline-success\" type=\"submit\">Done</button>",
                        "</form></li>\n"
                    ),
                    description,
                    task.id.unwrap_or(0),
                    Self::query_attr(query, query.page)
                ));
            } else {
                html.push_str(&format!(
                    "<li class=\"list-group-item text-muted\"><s>{}</s></li>\n",
                    description
                ));
            }
        }
        html.push_str("</ul>\n");
        html
    }

    fn pagination(page: &TaskPage, query: &TaskListQuery) -> String {
        let mut html = String::from("<nav><ul class=\"pagination\">\n");

        let prev_class = if page.has_prev() { "page-item" } else { "page-item disabled" };
        html.push_str(&format!(
            "<li class=\"{}\"><a class=\"page-link\" href=\"/tasks/{}\">Previous</a></li>\n",
            prev_class,
            Self::query_attr(query, page.page - 1)
        ));

        let next_class = if page.has_next() { "page-item" } else { "page-item disabled" };
        html.push_str(&format!(
            "<li class=\"{}\"><a class=\"page-link\" href=\"/tasks/{}\">Next</a></li>\n",
            next_class,
            Self::query_attr(query, page.page + 1)
        ));

        html.push_str("</ul></nav>\n");
        html
    }

    /// Serializes the query for an href or action attribute: the query
    /// string with the given page number, HTML-escaped so the `&` between
    /// parameters stays valid inside the attribute value. Empty when
    /// nothing needs carrying.
    fn query_attr(query: &TaskListQuery, page: i64) -> String {
        Self::escape(&Self::query_string(query, page))
    }

    /// Serializes the query back into a raw query string with the given
    /// page number, or an empty string when nothing needs carrying.
    fn query_string(query: &TaskListQuery, page: i64) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(status) = query.status {
            parts.push(format!("status={}", status.as_str()));
        }
        if let Some(filter) = query.filter() {
            parts.push(format!("filter={}", Self::escape_query(filter)));
        }
        if page > 1 {
            parts.push(format!("page={}", page));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }

    /// Escapes text for safe inclusion in HTML element content and
    /// attribute values.
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// Percent-encodes a query string value.
    fn escape_query(value: &str) -> String {
        let mut encoded = String::with_capacity(value.len());
        for byte in value.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => encoded.push(byte as char),
                b' ' => encoded.push_str("%20"),
                _ => encoded.push_str(&format!("%{:02X}", byte)),
            }
        }
        encoded
    }
}
