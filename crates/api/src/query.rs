//! Shared query parameter types for API handlers.
//!
//! List filters (`?name=&year=&limit=&offset=`) live next to their entity
//! models in `crewtrack_db`; the statistics-specific parameters are
//! collected here.

use crewtrack_db::models::status::Status;
use serde::Deserialize;

/// Optional status filter (`?status=doing`).
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub status: Option<Status>,
}

/// Inclusive task-count thresholds (`?min_tasks=&max_tasks=`).
///
/// `None` means no bound on that side.
#[derive(Debug, Deserialize)]
pub struct TaskCountParams {
    pub min_tasks: Option<i64>,
    pub max_tasks: Option<i64>,
}

/// Inclusive collaborator-count thresholds
/// (`?min_collaborators=&max_collaborators=`).
#[derive(Debug, Deserialize)]
pub struct CollaboratorCountParams {
    pub min_collaborators: Option<i64>,
    pub max_collaborators: Option<i64>,
}
