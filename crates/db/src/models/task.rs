//! Task entity model and DTOs.
//!
//! Tasks always belong to exactly one project; the owning `project_id`
//! comes from the URL path, not the request body, and is immutable.

use crewtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::Status;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: String,
    pub status: Status,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task under a project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to `not_done` if omitted.
    pub status: Option<Status>,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTask {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
}

/// Optional list filters for tasks within a project
/// (`?name=&status=&year=&limit=&offset=`).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TaskFilter {
    pub name: Option<String>,
    pub status: Option<Status>,
    pub year: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
