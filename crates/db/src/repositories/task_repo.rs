//! Repository for the `tasks` table.
//!
//! Mutating operations are scoped by `project_id` so a task can never be
//! updated or deleted through another project's URL.

use crewtrack_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use crewtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::assignment::TaskWithCollaborators;
use crate::models::collaborator::Collaborator;
use crate::models::task::{CreateTask, Task, TaskFilter, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, description, status, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task under `project_id`, returning the created row.
    ///
    /// The caller is responsible for checking that the project exists;
    /// a racing project delete surfaces as a foreign-key violation.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, name, description, status)
             VALUES ($1, $2, $3, COALESCE($4, 'not_done'::status))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID, regardless of owning project.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a task by ID within a specific project.
    ///
    /// Returns `None` when the task does not exist or belongs to a
    /// different project.
    pub async fn find_in_project(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's tasks in insertion order, with optional
    /// case-insensitive name search, status filter, and creation-year
    /// filter.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let limit = clamp_limit(filter.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(filter.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE project_id = $1
               AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
               AND ($3::status IS NULL OR status = $3)
               AND ($4::INT IS NULL OR EXTRACT(YEAR FROM created_at)::INT = $4)
             ORDER BY id
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(&filter.name)
            .bind(filter.status)
            .bind(filter.year)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List all of a project's tasks in insertion order, without
    /// pagination. Used by the project join-fetch.
    pub async fn list_all_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task within a project. Only non-`None` fields in `input`
    /// are applied; `updated_at` is refreshed as a side effect.
    ///
    /// Returns `None` if the task does not exist under `project_id`.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                status = COALESCE($5, status),
                updated_at = now()
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task within a project. Returns `true` if a row was removed.
    ///
    /// The schema cascades the delete to the task's assignment rows; the
    /// owning project and sibling tasks are untouched.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch a task together with all collaborators assigned to it.
    ///
    /// Returns `None` if the task does not exist; a task with no
    /// assignments yields an empty `collaborators` collection.
    pub async fn find_with_collaborators(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TaskWithCollaborators>, sqlx::Error> {
        let Some(task) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let collaborators = sqlx::query_as::<_, Collaborator>(
            "SELECT c.id, c.name, c.email, c.function
             FROM collaborators c
             JOIN assignments a ON a.collaborator_id = c.id
             WHERE a.task_id = $1
             ORDER BY c.id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;
        Ok(Some(TaskWithCollaborators {
            task,
            collaborators,
        }))
    }
}
