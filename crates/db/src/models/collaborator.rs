//! Collaborator entity model and DTOs.

use crewtrack_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A collaborator row from the `collaborators` table.
///
/// `email` is unique across all collaborators (`uq_collaborators_email`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Collaborator {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub function: String,
}

/// DTO for creating a new collaborator.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCollaborator {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[serde(default)]
    pub function: String,
}

/// DTO for updating an existing collaborator. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCollaborator {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub function: Option<String>,
}

/// Optional list filters (`?name=&limit=&offset=`).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CollaboratorFilter {
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
