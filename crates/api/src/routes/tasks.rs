//! Route definitions for the task resource.
//!
//! ```text
//! GET    /tasks               -> list_tasks
//! POST   /tasks               -> create_task
//! PUT    /tasks/{id}          -> update_task
//! DELETE /tasks/{id}          -> delete_task
//! PATCH  /tasks/{id}/status   -> update_task_status
//! ```

use axum::routing::{get, patch, put};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/{id}",
            put(tasks::update_task).delete(tasks::delete_task),
        )
        .route("/tasks/{id}/status", patch(tasks::update_task_status))
}
