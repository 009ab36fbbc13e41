use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use todoapp_auth::{UserRole, create_access_token, create_refresh_token, verify_refresh_token};
use todoapp_config::JwtConfig;
use todoapp_core::AppError;
use todoapp_core::password::{hash_password, verify_password};

use crate::modules::users::model::User;

use super::model::{AccessTokenResponse, AuthTokensResponse, LoginRequest, RegisterRequest};

pub struct AuthService;

impl AuthService {
    /// Registers a new user and issues the initial token pair.
    ///
    /// Emails are lowercased before storage and lookup so the unique
    /// constraint covers case variants. New users always get the USER role.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn register(
        db: &PgPool,
        dto: RegisterRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthTokensResponse, AppError> {
        let email = dto.email.trim().to_lowercase();

        let existing = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(&email)
        .fetch_one(db)
        .await?;

        if existing {
            return Err(AppError::conflict(anyhow::anyhow!("Email already exists")));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (first_name, last_name, email, password)
               VALUES ($1, $2, $3, $4)
               RETURNING id, first_name, last_name, email, role, created_at, updated_at"#,
        )
        .bind(dto.first_name.trim())
        .bind(dto.last_name.trim())
        .bind(&email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(|e| {
            // The existence pre-check races with concurrent registrations;
            // the unique constraint is the authority.
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow::anyhow!("Email already exists"));
            }
            AppError::from(e)
        })?;

        tracing::info!(user_id = %user.id, "User registered");

        Self::issue_tokens(user.id, &user.email, user.role, jwt_config)
    }

    /// Verifies credentials and issues a token pair.
    ///
    /// Unknown email and wrong password produce the same 401 message.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthTokensResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            email: String,
            password: String,
            role: UserRole,
        }

        let email = dto.email.trim().to_lowercase();

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, email, password, role FROM users WHERE email = $1",
        )
        .bind(&email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid email or password")))?;

        let is_valid = verify_password(&dto.password, &user.password)?;

        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid email or password"
            )));
        }

        Self::issue_tokens(user.id, &user.email, user.role, jwt_config)
    }

    /// Exchanges a valid refresh token for a fresh access token.
    ///
    /// The user row is re-read by the subject claim so role and email
    /// changes are reflected in the new token. The refresh token itself is
    /// not rotated. A vanished subject yields the same 401 as a bad token;
    /// account existence is not revealed to refresh-token holders.
    #[instrument(skip(db, refresh_token, jwt_config))]
    pub async fn refresh(
        db: &PgPool,
        refresh_token: &str,
        jwt_config: &JwtConfig,
    ) -> Result<AccessTokenResponse, AppError> {
        let claims = verify_refresh_token(refresh_token, jwt_config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            AppError::unauthorized(anyhow::anyhow!("Invalid or expired refresh token"))
        })?;

        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, role, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::unauthorized(anyhow::anyhow!("Invalid or expired refresh token"))
        })?;

        let access_token = create_access_token(user.id, &user.email, user.role, jwt_config)?;

        Ok(AccessTokenResponse { access_token })
    }

    /// Fetches the profile of the authenticated user.
    #[instrument(skip(db))]
    pub async fn get_profile(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, role, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }

    fn issue_tokens(
        user_id: Uuid,
        email: &str,
        role: UserRole,
        jwt_config: &JwtConfig,
    ) -> Result<AuthTokensResponse, AppError> {
        Ok(AuthTokensResponse {
            access_token: create_access_token(user_id, email, role, jwt_config)?,
            refresh_token: create_refresh_token(user_id, jwt_config)?,
        })
    }
}
