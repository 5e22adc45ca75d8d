//! Route definitions for the `/stats` aggregate-count endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/stats`.
///
/// ```text
/// GET /projects/total                      -> project_total
/// GET /projects/status                     -> projects_by_status
/// GET /projects/tasks                      -> tasks_per_project
/// GET /projects/{project_id}/tasks/status  -> tasks_by_status
/// GET /projects/{project_id}/collaborators -> collaborators_per_task
/// GET /tasks/total                         -> task_total
/// GET /collaborators/total                 -> collaborator_total
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects/total", get(stats::project_total))
        .route("/projects/status", get(stats::projects_by_status))
        .route("/projects/tasks", get(stats::tasks_per_project))
        .route(
            "/projects/{project_id}/tasks/status",
            get(stats::tasks_by_status),
        )
        .route(
            "/projects/{project_id}/collaborators",
            get(stats::collaborators_per_task),
        )
        .route("/tasks/total", get(stats::task_total))
        .route("/collaborators/total", get(stats::collaborator_total))
}
