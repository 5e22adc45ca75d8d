//! Handlers for tasks, nested under projects:
//! `/projects/{project_id}/tasks[/{id}]`.
//!
//! The join-fetch endpoint lives at the top level
//! (`/tasks/{id}/with-collaborators`) since it is not project-scoped.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use crewtrack_core::error::CoreError;
use crewtrack_core::types::DbId;
use crewtrack_db::models::assignment::TaskWithCollaborators;
use crewtrack_db::models::task::{CreateTask, Task, TaskFilter, UpdateTask};
use crewtrack_db::repositories::{ProjectRepo, TaskRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Look up the project or fail with 404.
async fn ensure_project_exists(state: &AppState, project_id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(())
}

/// POST /api/v1/projects/{project_id}/tasks
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    input.validate()?;
    ensure_project_exists(&state, project_id).await?;
    let task = TaskRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/projects/{project_id}/tasks
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(filter): Query<TaskFilter>,
) -> AppResult<Json<Vec<Task>>> {
    ensure_project_exists(&state, project_id).await?;
    let tasks = TaskRepo::list_by_project(&state.pool, project_id, &filter).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/projects/{project_id}/tasks/{id}
///
/// Returns 404 when the task exists but belongs to a different project.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_in_project(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// PUT /api/v1/projects/{project_id}/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    input.validate()?;
    let task = TaskRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// DELETE /api/v1/projects/{project_id}/tasks/{id}
///
/// Cascades to the task's assignments only; the owning project and its
/// other tasks are untouched.
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, project_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}

/// GET /api/v1/tasks/{id}/with-collaborators
pub async fn get_with_collaborators(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TaskWithCollaborators>> {
    let task = TaskRepo::find_with_collaborators(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}
