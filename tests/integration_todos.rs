mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{TestUser, access_token_for, create_test_todo, create_test_user, todo_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use todoapp_auth::UserRole;
use tower::ServiceExt;
use uuid::Uuid;

fn authed_request(method: &str, uri: &str, user: &TestUser, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", access_token_for(user)));

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_todo_created(pool: PgPool) {
    let user = create_test_user(&pool, UserRole::User).await;
    let app = todo_app(pool.clone());

    let response = app
        .oneshot(authed_request(
            "POST",
            "/todos",
            &user,
            Some(json!({ "title": "Buy milk", "description": "Two liters" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["description"], "Two liters");
    assert_eq!(body["completed"], false);
    assert_eq!(body["userId"], user.id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_todo_empty_title_bad_request(pool: PgPool) {
    let user = create_test_user(&pool, UserRole::User).await;
    let app = todo_app(pool.clone());

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/todos",
            &user,
            Some(json!({ "title": "" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Whitespace-only collapses to empty after trimming
    let response = app
        .oneshot(authed_request(
            "POST",
            "/todos",
            &user,
            Some(json!({ "title": "   " })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_todo_without_token_unauthorized(pool: PgPool) {
    let app = todo_app(pool.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/todos")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"title":"Buy milk"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_todos_scenario(pool: PgPool) {
    // alice registers, creates "Buy milk", and sees exactly that item
    let alice = create_test_user(&pool, UserRole::User).await;
    let app = todo_app(pool.clone());

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/todos",
            &alice,
            Some(json!({ "title": "Buy milk" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(authed_request("GET", "/todos", &alice, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let todos = body.as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["title"], "Buy milk");
    assert_eq!(todos[0]["completed"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_todos_never_shows_foreign_rows(pool: PgPool) {
    let alice = create_test_user(&pool, UserRole::User).await;
    let bob = create_test_user(&pool, UserRole::User).await;
    create_test_todo(&pool, alice.id, "Alice todo").await;
    create_test_todo(&pool, bob.id, "Bob todo").await;

    let app = todo_app(pool.clone());

    let response = app
        .oneshot(authed_request("GET", "/todos", &bob, None))
        .await
        .unwrap();
    let body = response_json(response).await;
    let todos = body.as_array().unwrap();

    assert_eq!(todos.len(), 1);
    for todo in todos {
        assert_eq!(todo["userId"], bob.id.to_string());
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_todos_completed_filter(pool: PgPool) {
    let user = create_test_user(&pool, UserRole::User).await;
    let done_id = create_test_todo(&pool, user.id, "Done").await;
    create_test_todo(&pool, user.id, "Open").await;
    sqlx::query("UPDATE todos SET completed = TRUE WHERE id = $1")
        .bind(done_id)
        .execute(&pool)
        .await
        .unwrap();

    let app = todo_app(pool.clone());

    let response = app
        .clone()
        .oneshot(authed_request("GET", "/todos?completed=true", &user, None))
        .await
        .unwrap();
    let todos = response_json(response).await;
    assert_eq!(todos.as_array().unwrap().len(), 1);
    assert_eq!(todos[0]["title"], "Done");

    let response = app
        .oneshot(authed_request("GET", "/todos?completed=false", &user, None))
        .await
        .unwrap();
    let todos = response_json(response).await;
    assert_eq!(todos.as_array().unwrap().len(), 1);
    assert_eq!(todos[0]["title"], "Open");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_list_sees_everything(pool: PgPool) {
    let alice = create_test_user(&pool, UserRole::User).await;
    let bob = create_test_user(&pool, UserRole::User).await;
    let admin = create_test_user(&pool, UserRole::Admin).await;
    create_test_todo(&pool, alice.id, "Alice todo").await;
    create_test_todo(&pool, bob.id, "Bob todo").await;

    let app = todo_app(pool.clone());

    let response = app
        .oneshot(authed_request("GET", "/todos", &admin, None))
        .await
        .unwrap();
    let todos = response_json(response).await;

    assert_eq!(todos.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_todo_owner_forbidden_admin_matrix(pool: PgPool) {
    let alice = create_test_user(&pool, UserRole::User).await;
    let bob = create_test_user(&pool, UserRole::User).await;
    let admin = create_test_user(&pool, UserRole::Admin).await;
    let todo_id = create_test_todo(&pool, alice.id, "Alice todo").await;

    let app = todo_app(pool.clone());
    let uri = format!("/todos/{}", todo_id);

    let response = app
        .clone()
        .oneshot(authed_request("GET", &uri, &alice, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(authed_request("GET", &uri, &bob, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(authed_request("GET", &uri, &admin, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_todo_not_found(pool: PgPool) {
    let user = create_test_user(&pool, UserRole::User).await;
    let app = todo_app(pool.clone());

    let response = app
        .oneshot(authed_request(
            "GET",
            &format!("/todos/{}", Uuid::new_v4()),
            &user,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_patch_partial_update_preserves_fields(pool: PgPool) {
    let user = create_test_user(&pool, UserRole::User).await;
    let app = todo_app(pool.clone());

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/todos",
            &user,
            Some(json!({ "title": "Original", "description": "Keep me" })),
        ))
        .await
        .unwrap();
    let created = response_json(response).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .oneshot(authed_request(
            "PATCH",
            &format!("/todos/{}", id),
            &user,
            Some(json!({ "completed": true })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["completed"], true);
    assert_eq!(body["title"], "Original");
    assert_eq!(body["description"], "Keep me");
    assert_eq!(body["userId"], user.id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_patch_by_stranger_forbidden(pool: PgPool) {
    let alice = create_test_user(&pool, UserRole::User).await;
    let bob = create_test_user(&pool, UserRole::User).await;
    let todo_id = create_test_todo(&pool, alice.id, "Alice todo").await;

    let app = todo_app(pool.clone());

    let response = app
        .oneshot(authed_request(
            "PATCH",
            &format!("/todos/{}", todo_id),
            &bob,
            Some(json!({ "completed": true })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_todo_no_content_then_not_found(pool: PgPool) {
    let user = create_test_user(&pool, UserRole::User).await;
    let todo_id = create_test_todo(&pool, user.id, "Delete me").await;

    let app = todo_app(pool.clone());
    let uri = format!("/todos/{}", todo_id);

    let response = app
        .clone()
        .oneshot(authed_request("DELETE", &uri, &user, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Repeated delete reports the absence, not idempotent success
    let response = app
        .oneshot(authed_request("DELETE", &uri, &user, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_by_stranger_forbidden(pool: PgPool) {
    let alice = create_test_user(&pool, UserRole::User).await;
    let bob = create_test_user(&pool, UserRole::User).await;
    let todo_id = create_test_todo(&pool, alice.id, "Alice todo").await;

    let app = todo_app(pool.clone());

    let response = app
        .oneshot(authed_request(
            "DELETE",
            &format!("/todos/{}", todo_id),
            &bob,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_all_requires_admin_role(pool: PgPool) {
    let alice = create_test_user(&pool, UserRole::User).await;
    let admin = create_test_user(&pool, UserRole::Admin).await;
    create_test_todo(&pool, alice.id, "Alice todo").await;

    let app = todo_app(pool.clone());

    let response = app
        .clone()
        .oneshot(authed_request("GET", "/todos/admin/all", &admin, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let todos = response_json(response).await;
    assert_eq!(todos.as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(authed_request("GET", "/todos/admin/all", &alice, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let request = Request::builder()
        .method("GET")
        .uri("/todos/admin/all")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_delete_any_todo(pool: PgPool) {
    let alice = create_test_user(&pool, UserRole::User).await;
    let admin = create_test_user(&pool, UserRole::Admin).await;
    let todo_id = create_test_todo(&pool, alice.id, "Alice todo").await;

    let app = todo_app(pool.clone());
    let uri = format!("/todos/admin/{}", todo_id);

    let response = app
        .clone()
        .oneshot(authed_request("DELETE", &uri, &admin, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(authed_request("DELETE", &uri, &admin, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_delete_forbidden_for_users(pool: PgPool) {
    let alice = create_test_user(&pool, UserRole::User).await;
    let bob = create_test_user(&pool, UserRole::User).await;
    let todo_id = create_test_todo(&pool, alice.id, "Alice todo").await;

    let app = todo_app(pool.clone());

    let response = app
        .oneshot(authed_request(
            "DELETE",
            &format!("/todos/admin/{}", todo_id),
            &bob,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
