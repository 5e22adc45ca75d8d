//! HTTP-level integration tests for the entity CRUD endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": "Test Project", "description": "first"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Test Project");
    assert_eq!(json["status"], "not_done");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_with_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/projects", serde_json::json!({"name": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_with_unknown_status_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": "p", "status": "paused"}),
    )
    .await;

    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_keeps_unsupplied_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": "Original", "description": "keep", "status": "doing"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({"name": "Updated"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Updated");
    assert_eq!(json["description"], "keep");
    assert_eq!(json["status"], "doing");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_project_returns_204_then_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": "Delete Me"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_projects_with_name_filter(pool: PgPool) {
    for name in ["Website", "Backend", "Website v2"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/v1/projects", serde_json::json!({"name": name})).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects?name=website").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
}

// ---------------------------------------------------------------------------
// Task CRUD (nested under projects)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_under_project(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let project = body_json(
        post_json(app, "/api/v1/projects", serde_json::json!({"name": "P"})).await,
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{project_id}/tasks"),
        serde_json::json!({"name": "T", "status": "doing"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["project_id"], project_id);
    assert_eq!(json["status"], "doing");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_under_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects/999999/tasks",
        serde_json::json!({"name": "T"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_is_scoped_to_its_project(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let p1 = body_json(
        post_json(app, "/api/v1/projects", serde_json::json!({"name": "P1"})).await,
    )
    .await["id"]
        .as_i64()
        .unwrap();
    let app = common::build_test_app(pool.clone());
    let p2 = body_json(
        post_json(app, "/api/v1/projects", serde_json::json!({"name": "P2"})).await,
    )
    .await["id"]
        .as_i64()
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let task = body_json(
        post_json(
            app,
            &format!("/api/v1/projects/{p1}/tasks"),
            serde_json::json!({"name": "T"}),
        )
        .await,
    )
    .await["id"]
        .as_i64()
        .unwrap();

    // Reachable under the owning project.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/projects/{p1}/tasks/{task}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // 404 under any other project.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{p2}/tasks/{task}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Collaborator CRUD & email uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_collaborator_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/collaborators",
        serde_json::json!({"name": "Ana", "email": "ana@example.com", "function": "dev"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["email"], "ana@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_collaborator_with_bad_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/collaborators",
        serde_json::json!({"name": "Ana", "email": "not-an-email"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_returns_409_and_keeps_original(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = body_json(
        post_json(
            app,
            "/api/v1/collaborators",
            serde_json::json!({"name": "Ana", "email": "a@x.com"}),
        )
        .await,
    )
    .await;
    let id = first["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/collaborators",
        serde_json::json!({"name": "Impostor", "email": "a@x.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    // The first collaborator is still retrievable, unchanged.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/collaborators/{id}")).await).await;
    assert_eq!(json["name"], "Ana");
}

// ---------------------------------------------------------------------------
// Join fetches
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_with_tasks_empty_is_valid(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let project = body_json(
        post_json(app, "/api/v1/projects", serde_json::json!({"name": "Empty"})).await,
    )
    .await;
    let id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/projects/{id}/with-tasks")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Empty");
    assert_eq!(json["tasks"].as_array().unwrap().len(), 0);

    // Missing project is a 404, not an empty collection.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/999999/with-tasks").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
