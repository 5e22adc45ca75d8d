//! HTTP-level integration tests for task/collaborator assignments.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post, post_json};
use sqlx::PgPool;

/// Create a project, a task under it, and a collaborator; returns
/// (task_id, collaborator_id).
async fn seed(pool: &PgPool) -> (i64, i64) {
    let app = common::build_test_app(pool.clone());
    let project = body_json(
        post_json(app, "/api/v1/projects", serde_json::json!({"name": "P"})).await,
    )
    .await["id"]
        .as_i64()
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let task = body_json(
        post_json(
            app,
            &format!("/api/v1/projects/{project}/tasks"),
            serde_json::json!({"name": "T"}),
        )
        .await,
    )
    .await["id"]
        .as_i64()
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let collaborator = body_json(
        post_json(
            app,
            "/api/v1/collaborators",
            serde_json::json!({"name": "C", "email": "c@example.com"}),
        )
        .await,
    )
    .await["id"]
        .as_i64()
        .unwrap();

    (task, collaborator)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_collaborator_returns_201(pool: PgPool) {
    let (task, collaborator) = seed(&pool).await;

    let app = common::build_test_app(pool);
    let response = post(
        app,
        &format!("/api/v1/tasks/{task}/collaborators/{collaborator}"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["task_id"], task);
    assert_eq!(json["collaborator_id"], collaborator);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_assignment_returns_409(pool: PgPool) {
    let (task, collaborator) = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    post(
        app,
        &format!("/api/v1/tasks/{task}/collaborators/{collaborator}"),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post(
        app,
        &format!("/api/v1/tasks/{task}/collaborators/{collaborator}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignment_with_missing_sides_returns_404(pool: PgPool) {
    let (task, collaborator) = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post(app, &format!("/api/v1/tasks/999999/collaborators/{collaborator}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = post(app, &format!("/api/v1/tasks/{task}/collaborators/999999")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unassign_then_404(pool: PgPool) {
    let (task, collaborator) = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    post(
        app,
        &format!("/api/v1/tasks/{task}/collaborators/{collaborator}"),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(
        app,
        &format!("/api/v1/tasks/{task}/collaborators/{collaborator}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Unassigning twice is a 404.
    let app = common::build_test_app(pool);
    let response = delete(
        app,
        &format!("/api/v1/tasks/{task}/collaborators/{collaborator}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_with_collaborators_join_fetch(pool: PgPool) {
    let (task, collaborator) = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    post(
        app,
        &format!("/api/v1/tasks/{task}/collaborators/{collaborator}"),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/tasks/{task}/with-collaborators")).await).await;
    let collaborators = json["collaborators"].as_array().unwrap();
    assert_eq!(collaborators.len(), 1);
    assert_eq!(collaborators[0]["email"], "c@example.com");

    // And the reverse direction.
    let app = common::build_test_app(pool);
    let json = body_json(
        get(
            app,
            &format!("/api/v1/collaborators/{collaborator}/with-tasks"),
        )
        .await,
    )
    .await;
    let tasks = json["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], task);
}
