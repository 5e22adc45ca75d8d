//! Handlers for the `/stats` aggregate-count endpoints.
//!
//! Grouped results are returned as ordered pair lists, never as bare
//! numbers; ungrouped totals use a `{ "total": n }` payload.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use crewtrack_core::error::CoreError;
use crewtrack_core::types::DbId;
use crewtrack_db::models::stats::{NameCount, StatusCount};
use crewtrack_db::repositories::{ProjectRepo, StatsRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{CollaboratorCountParams, StatusParams, TaskCountParams};
use crate::state::AppState;

/// Ungrouped total payload.
#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub total: i64,
}

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

/// GET /api/v1/stats/projects/total
pub async fn project_total(State(state): State<AppState>) -> AppResult<Json<TotalResponse>> {
    let total = StatsRepo::count_projects(&state.pool).await?;
    Ok(Json(TotalResponse { total }))
}

/// GET /api/v1/stats/tasks/total
pub async fn task_total(State(state): State<AppState>) -> AppResult<Json<TotalResponse>> {
    let total = StatsRepo::count_tasks(&state.pool).await?;
    Ok(Json(TotalResponse { total }))
}

/// GET /api/v1/stats/collaborators/total
pub async fn collaborator_total(State(state): State<AppState>) -> AppResult<Json<TotalResponse>> {
    let total = StatsRepo::count_collaborators(&state.pool).await?;
    Ok(Json(TotalResponse { total }))
}

/// GET /api/v1/stats/projects/status
///
/// Without `?status=`, returns one count per status present. With it,
/// returns the single pair for that status (count 0 when none match).
pub async fn projects_by_status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> AppResult<Response> {
    match params.status {
        Some(status) => {
            let count = StatsRepo::project_count_for_status(&state.pool, status).await?;
            Ok(Json(StatusCount { status, count }).into_response())
        }
        None => {
            let counts = StatsRepo::project_counts_by_status(&state.pool).await?;
            Ok(Json(counts).into_response())
        }
    }
}

/// GET /api/v1/stats/projects/{project_id}/tasks/status
pub async fn tasks_by_status(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<StatusCount>>> {
    ensure_project_exists(&state, project_id).await?;
    let counts = StatsRepo::task_counts_by_status(&state.pool, project_id).await?;
    Ok(Json(counts))
}

/// GET /api/v1/stats/projects/tasks
///
/// Task count per project name. Zero-task projects appear with count 0
/// unless `min_tasks` excludes them.
pub async fn tasks_per_project(
    State(state): State<AppState>,
    Query(params): Query<TaskCountParams>,
) -> AppResult<Json<Vec<NameCount>>> {
    let counts =
        StatsRepo::task_counts_per_project(&state.pool, params.min_tasks, params.max_tasks).await?;
    Ok(Json(counts))
}

/// GET /api/v1/stats/projects/{project_id}/collaborators
///
/// Collaborator count per task name within one project.
pub async fn collaborators_per_task(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(params): Query<CollaboratorCountParams>,
) -> AppResult<Json<Vec<NameCount>>> {
    ensure_project_exists(&state, project_id).await?;
    let counts = StatsRepo::collaborator_counts_per_task(
        &state.pool,
        project_id,
        params.min_collaborators,
        params.max_collaborators,
    )
    .await?;
    Ok(Json(counts))
}
