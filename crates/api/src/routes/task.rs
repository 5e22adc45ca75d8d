//! Route definitions for the top-level `/tasks` resource.
//!
//! Task CRUD is project-scoped and lives under `/projects/{project_id}/tasks`;
//! this router carries the join-fetch and assignment endpoints that address
//! a task directly.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{assignment, task};
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /{id}/with-collaborators                   -> get_with_collaborators
/// POST   /{task_id}/collaborators/{collaborator_id} -> assign
/// DELETE /{task_id}/collaborators/{collaborator_id} -> unassign
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/with-collaborators", get(task::get_with_collaborators))
        .route(
            "/{task_id}/collaborators/{collaborator_id}",
            post(assignment::create).delete(assignment::delete),
        )
}
