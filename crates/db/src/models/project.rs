//! Project entity model and DTOs.

use crewtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::Status;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub status: Status,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to `not_done` if omitted.
    pub status: Option<Status>,
}

/// DTO for updating an existing project. All fields are optional; absent
/// fields are left untouched.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
}

/// Optional list filters (`?name=&year=&limit=&offset=`).
///
/// `name` is a case-insensitive substring match; `year` filters on the
/// creation timestamp.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProjectFilter {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
