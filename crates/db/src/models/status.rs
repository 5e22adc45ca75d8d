//! Shared lifecycle status for projects and tasks.

use serde::{Deserialize, Serialize};

/// Maps to the PostgreSQL `status` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "status", rename_all = "snake_case")]
pub enum Status {
    NotDone,
    Doing,
    Done,
}

impl Status {
    /// The database/wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::NotDone => "not_done",
            Status::Doing => "doing",
            Status::Done => "done",
        }
    }
}
