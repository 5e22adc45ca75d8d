//! Grouped-count statistics over projects, tasks, and collaborators.
//!
//! These queries never materialize the related collections; counting
//! happens in SQL. Per-name counts use LEFT JOIN so entities with zero
//! related rows still appear, unless a `min` threshold excludes them.
//! A `None` threshold means "no bound" on that side.

use crewtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::stats::{NameCount, StatusCount};
use crate::models::status::Status;

/// Provides aggregate count queries.
pub struct StatsRepo;

impl StatsRepo {
    /// Total number of projects.
    pub async fn count_projects(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }

    /// Total number of tasks.
    pub async fn count_tasks(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await
    }

    /// Total number of collaborators.
    pub async fn count_collaborators(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM collaborators")
            .fetch_one(pool)
            .await
    }

    /// Project counts grouped by status. Statuses with no projects are
    /// absent from the result.
    pub async fn project_counts_by_status(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count
             FROM projects
             GROUP BY status
             ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }

    /// Number of projects with the given status.
    pub async fn project_count_for_status(
        pool: &PgPool,
        status: Status,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE status = $1")
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Task counts grouped by status, restricted to one project's tasks.
    ///
    /// The caller is responsible for checking that the project exists; a
    /// missing project yields an empty result here.
    pub async fn task_counts_by_status(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count
             FROM tasks
             WHERE project_id = $1
             GROUP BY status
             ORDER BY status",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Task count per project name, with optional inclusive thresholds.
    ///
    /// Projects with zero tasks appear with a count of 0 unless
    /// `min_tasks` excludes them.
    pub async fn task_counts_per_project(
        pool: &PgPool,
        min_tasks: Option<i64>,
        max_tasks: Option<i64>,
    ) -> Result<Vec<NameCount>, sqlx::Error> {
        sqlx::query_as::<_, NameCount>(
            "SELECT p.name AS name, COUNT(t.id) AS count
             FROM projects p
             LEFT JOIN tasks t ON t.project_id = p.id
             GROUP BY p.id, p.name
             HAVING COUNT(t.id) >= COALESCE($1, 0)
                AND ($2::BIGINT IS NULL OR COUNT(t.id) <= $2)
             ORDER BY p.id",
        )
        .bind(min_tasks)
        .bind(max_tasks)
        .fetch_all(pool)
        .await
    }

    /// Collaborator count per task name within one project, with optional
    /// inclusive thresholds.
    ///
    /// Tasks with no assigned collaborators appear with a count of 0
    /// unless `min_collaborators` excludes them. The caller is responsible
    /// for checking that the project exists.
    pub async fn collaborator_counts_per_task(
        pool: &PgPool,
        project_id: DbId,
        min_collaborators: Option<i64>,
        max_collaborators: Option<i64>,
    ) -> Result<Vec<NameCount>, sqlx::Error> {
        sqlx::query_as::<_, NameCount>(
            "SELECT t.name AS name, COUNT(a.collaborator_id) AS count
             FROM tasks t
             LEFT JOIN assignments a ON a.task_id = t.id
             WHERE t.project_id = $1
             GROUP BY t.id, t.name
             HAVING COUNT(a.collaborator_id) >= COALESCE($2, 0)
                AND ($3::BIGINT IS NULL OR COUNT(a.collaborator_id) <= $3)
             ORDER BY t.id",
        )
        .bind(project_id)
        .bind(min_collaborators)
        .bind(max_collaborators)
        .fetch_all(pool)
        .await
    }
}
