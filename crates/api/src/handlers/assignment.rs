//! Handlers for task/collaborator assignments:
//! `/tasks/{task_id}/collaborators/{collaborator_id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use crewtrack_core::error::CoreError;
use crewtrack_core::types::DbId;
use crewtrack_db::models::assignment::Assignment;
use crewtrack_db::repositories::{AssignmentRepo, CollaboratorRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/tasks/{task_id}/collaborators/{collaborator_id}
///
/// Returns 404 when either side is missing and 409 when the pair already
/// exists.
pub async fn create(
    State(state): State<AppState>,
    Path((task_id, collaborator_id)): Path<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<Assignment>)> {
    TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;
    CollaboratorRepo::find_by_id(&state.pool, collaborator_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collaborator",
            id: collaborator_id,
        }))?;
    let assignment = AssignmentRepo::create(&state.pool, task_id, collaborator_id).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// DELETE /api/v1/tasks/{task_id}/collaborators/{collaborator_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((task_id, collaborator_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = AssignmentRepo::delete(&state.pool, task_id, collaborator_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Collaborator {collaborator_id} is not assigned to task {task_id}"
        )))
    }
}
