//! Row types for grouped-count statistics queries.

use serde::Serialize;
use sqlx::FromRow;

use crate::models::status::Status;

/// One count per distinct status value.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub count: i64,
}

/// One count per named entity (project or task).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NameCount {
    pub name: String,
    pub count: i64,
}
