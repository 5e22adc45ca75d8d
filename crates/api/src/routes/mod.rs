pub mod collaborator;
pub mod health;
pub mod project;
pub mod stats;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/with-tasks                        project + its tasks
/// /projects/{project_id}/tasks                     list, create
/// /projects/{project_id}/tasks/{id}                get, update, delete
///
/// /tasks/{id}/with-collaborators                   task + its collaborators
/// /tasks/{task_id}/collaborators/{collaborator_id} assign (POST), unassign (DELETE)
///
/// /collaborators                                   list, create
/// /collaborators/{id}                              get, update, delete
/// /collaborators/{id}/with-tasks                   collaborator + their tasks
///
/// /stats/projects/total                            project count
/// /stats/projects/status                           project counts by status
/// /stats/projects/tasks                            task counts per project
/// /stats/projects/{project_id}/tasks/status        task counts by status
/// /stats/projects/{project_id}/collaborators       collaborator counts per task
/// /stats/tasks/total                               task count
/// /stats/collaborators/total                       collaborator count
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/collaborators", collaborator::router())
        .nest("/stats", stats::router())
}
