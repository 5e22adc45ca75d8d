//! Assignment join entity and join-fetch DTOs.

use crewtrack_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::collaborator::Collaborator;
use crate::models::project::Project;
use crate::models::task::Task;

/// A row from the `assignments` join table. The (task_id, collaborator_id)
/// pair is the primary key.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct Assignment {
    pub task_id: DbId,
    pub collaborator_id: DbId,
}

/// A project together with all of its tasks.
///
/// An empty `tasks` collection is valid and distinct from "project not
/// found".
#[derive(Debug, Serialize)]
pub struct ProjectWithTasks {
    #[serde(flatten)]
    pub project: Project,
    pub tasks: Vec<Task>,
}

/// A task together with all collaborators assigned to it.
#[derive(Debug, Serialize)]
pub struct TaskWithCollaborators {
    #[serde(flatten)]
    pub task: Task,
    pub collaborators: Vec<Collaborator>,
}

/// A collaborator together with all tasks they are assigned to.
#[derive(Debug, Serialize)]
pub struct CollaboratorWithTasks {
    #[serde(flatten)]
    pub collaborator: Collaborator,
    pub tasks: Vec<Task>,
}
