//! Repository for the `collaborators` table.

use crewtrack_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use crewtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::assignment::CollaboratorWithTasks;
use crate::models::collaborator::{
    Collaborator, CollaboratorFilter, CreateCollaborator, UpdateCollaborator,
};
use crate::models::task::Task;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, function";

/// Provides CRUD operations for collaborators.
pub struct CollaboratorRepo;

impl CollaboratorRepo {
    /// Insert a new collaborator, returning the created row.
    ///
    /// A duplicate email violates `uq_collaborators_email` and surfaces as
    /// a unique-violation database error.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCollaborator,
    ) -> Result<Collaborator, sqlx::Error> {
        let query = format!(
            "INSERT INTO collaborators (name, email, function)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collaborator>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.function)
            .fetch_one(pool)
            .await
    }

    /// Find a collaborator by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Collaborator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collaborators WHERE id = $1");
        sqlx::query_as::<_, Collaborator>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List collaborators in insertion order, with optional
    /// case-insensitive name search.
    pub async fn list(
        pool: &PgPool,
        filter: &CollaboratorFilter,
    ) -> Result<Vec<Collaborator>, sqlx::Error> {
        let limit = clamp_limit(filter.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(filter.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM collaborators
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Collaborator>(&query)
            .bind(&filter.name)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a collaborator. Only non-`None` fields in `input` are
    /// applied. Changing the email to one already in use surfaces as a
    /// unique-violation database error.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCollaborator,
    ) -> Result<Option<Collaborator>, sqlx::Error> {
        let query = format!(
            "UPDATE collaborators SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                function = COALESCE($4, function)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collaborator>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.function)
            .fetch_optional(pool)
            .await
    }

    /// Delete a collaborator by ID. Returns `true` if a row was removed.
    ///
    /// The schema cascades the delete to the collaborator's assignment
    /// rows; the assigned tasks themselves are untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM collaborators WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch a collaborator together with all tasks they are assigned to.
    ///
    /// Returns `None` if the collaborator does not exist; a collaborator
    /// with no assignments yields an empty `tasks` collection.
    pub async fn find_with_tasks(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CollaboratorWithTasks>, sqlx::Error> {
        let Some(collaborator) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT t.id, t.project_id, t.name, t.description, t.status, t.created_at, t.updated_at
             FROM tasks t
             JOIN assignments a ON a.task_id = t.id
             WHERE a.collaborator_id = $1
             ORDER BY t.id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(Some(CollaboratorWithTasks {
            collaborator,
            tasks,
        }))
    }
}
