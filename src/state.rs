use sqlx::PgPool;

use todoapp_config::cors::CorsConfig;
use todoapp_config::jwt::JwtConfig;
use todoapp_config::rate_limit::RateLimitConfig;
use todoapp_db::init_db_pool;

/// Shared application state.
///
/// Both services carry the same state shape: one connection pool and the
/// env-loaded config structs. Everything here is cheaply cloneable; there is
/// no other in-process shared mutable state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
    }
}
