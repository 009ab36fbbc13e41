use sqlx::PgPool;
use uuid::Uuid;

use todoapp::router::{init_auth_service_router, init_todo_service_router};
use todoapp::state::AppState;
use todoapp_auth::{UserRole, create_access_token, create_refresh_token};
use todoapp_config::cors::CorsConfig;
use todoapp_config::jwt::JwtConfig;
use todoapp_config::rate_limit::RateLimitConfig;
use todoapp_core::password::hash_password;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 900,
        refresh_token_expiry: 604800,
    }
}

pub fn test_state(pool: PgPool) -> AppState {
    AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::default(),
    }
}

pub fn auth_app(pool: PgPool) -> axum::Router {
    init_auth_service_router(test_state(pool))
}

pub fn todo_app(pool: PgPool) -> axum::Router {
    init_todo_service_router(test_state(pool))
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Insert a user directly, bypassing the registration endpoint.
#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, role: UserRole) -> TestUser {
    let email = generate_unique_email();
    let password = "testpass123".to_string();
    let hashed = hash_password(&password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO users (first_name, last_name, email, password, role)
           VALUES ($1, $2, $3, $4, $5)
           RETURNING id"#,
    )
    .bind("Test")
    .bind("User")
    .bind(&email)
    .bind(&hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email,
        password,
        role,
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Mint a valid access token for a test user, as login would.
#[allow(dead_code)]
pub fn access_token_for(user: &TestUser) -> String {
    create_access_token(user.id, &user.email, user.role, &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn refresh_token_for(user: &TestUser) -> String {
    create_refresh_token(user.id, &test_jwt_config()).unwrap()
}

/// Insert a todo directly, bypassing the HTTP surface.
#[allow(dead_code)]
pub async fn create_test_todo(pool: &PgPool, owner_id: Uuid, title: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO todos (user_id, title) VALUES ($1, $2) RETURNING id"#,
    )
    .bind(owner_id)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}
