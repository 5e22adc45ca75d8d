//! Handlers for the `/collaborators` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use crewtrack_core::error::CoreError;
use crewtrack_core::types::DbId;
use crewtrack_db::models::assignment::CollaboratorWithTasks;
use crewtrack_db::models::collaborator::{
    Collaborator, CollaboratorFilter, CreateCollaborator, UpdateCollaborator,
};
use crewtrack_db::repositories::CollaboratorRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/collaborators
///
/// Returns 409 when the email is already in use.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCollaborator>,
) -> AppResult<(StatusCode, Json<Collaborator>)> {
    input.validate()?;
    let collaborator = CollaboratorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(collaborator)))
}

/// GET /api/v1/collaborators
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CollaboratorFilter>,
) -> AppResult<Json<Vec<Collaborator>>> {
    let collaborators = CollaboratorRepo::list(&state.pool, &filter).await?;
    Ok(Json(collaborators))
}

/// GET /api/v1/collaborators/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Collaborator>> {
    let collaborator = CollaboratorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collaborator",
            id,
        }))?;
    Ok(Json(collaborator))
}

/// GET /api/v1/collaborators/{id}/with-tasks
pub async fn get_with_tasks(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CollaboratorWithTasks>> {
    let collaborator = CollaboratorRepo::find_with_tasks(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collaborator",
            id,
        }))?;
    Ok(Json(collaborator))
}

/// PUT /api/v1/collaborators/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCollaborator>,
) -> AppResult<Json<Collaborator>> {
    input.validate()?;
    let collaborator = CollaboratorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collaborator",
            id,
        }))?;
    Ok(Json(collaborator))
}

/// DELETE /api/v1/collaborators/{id}
///
/// Cascades to the collaborator's assignments only; their tasks are
/// untouched.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CollaboratorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Collaborator",
            id,
        }))
    }
}
