/// Request-scoped error type mapped onto HTTP status codes.
pub mod error;

/// Router construction and the task route handlers.
pub mod routes;

pub use routes::{router, AppState};
