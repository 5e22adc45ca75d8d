//! Repository for the `assignments` join table.
//!
//! The (task_id, collaborator_id) pair is the primary key
//! (`uq_assignments_task_collaborator`), so assigning the same
//! collaborator to a task twice surfaces as a unique-violation database
//! error. Both foreign keys cascade on delete, which keeps cleanup out of
//! the route layer entirely.

use crewtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::assignment::Assignment;

/// Provides operations on task/collaborator assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Assign a collaborator to a task, returning the created row.
    ///
    /// The caller is responsible for checking that both sides exist; a
    /// racing delete surfaces as a foreign-key violation.
    pub async fn create(
        pool: &PgPool,
        task_id: DbId,
        collaborator_id: DbId,
    ) -> Result<Assignment, sqlx::Error> {
        sqlx::query_as::<_, Assignment>(
            "INSERT INTO assignments (task_id, collaborator_id)
             VALUES ($1, $2)
             RETURNING task_id, collaborator_id",
        )
        .bind(task_id)
        .bind(collaborator_id)
        .fetch_one(pool)
        .await
    }

    /// Remove a collaborator from a task. Returns `true` if an assignment
    /// row was removed.
    pub async fn delete(
        pool: &PgPool,
        task_id: DbId,
        collaborator_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM assignments WHERE task_id = $1 AND collaborator_id = $2")
                .bind(task_id)
                .bind(collaborator_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
