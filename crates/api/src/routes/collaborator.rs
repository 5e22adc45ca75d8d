//! Route definitions for the `/collaborators` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::collaborator;
use crate::state::AppState;

/// Routes mounted at `/collaborators`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// GET    /{id}/with-tasks    -> get_with_tasks
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(collaborator::list).post(collaborator::create))
        .route(
            "/{id}",
            get(collaborator::get_by_id)
                .put(collaborator::update)
                .delete(collaborator::delete),
        )
        .route("/{id}/with-tasks", get(collaborator::get_with_tasks))
}
