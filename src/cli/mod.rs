//! Administrative CLI operations.
//!
//! Registration over HTTP always yields the USER role and no role-change
//! endpoint exists, so this module is the only way an ADMIN account comes
//! into existence.

use fake::Fake;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName};
use sqlx::PgPool;
use uuid::Uuid;

use todoapp_auth::UserRole;
use todoapp_core::password::hash_password;

/// Creates an ADMIN user, or promotes an existing user with this email.
pub async fn create_admin(
    db: &PgPool,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = email.trim().to_lowercase();
    let hashed_password =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    sqlx::query(
        "INSERT INTO users (first_name, last_name, email, password, role)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (email) DO UPDATE SET role = $5, updated_at = NOW()",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(&email)
    .bind(hashed_password)
    .bind(UserRole::Admin)
    .execute(db)
    .await?;

    Ok(())
}

/// Seeds demo users (password `password123`) with a handful of todos each.
pub async fn seed_demo_data(
    db: &PgPool,
    users: usize,
    todos_per_user: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    // One hash for all seeded users; per-row bcrypt would dominate runtime
    let password_hash = hash_password("password123")
        .map_err(|e| format!("Failed to hash password: {}", e.error))?;

    for user_idx in 0..users {
        let first_name: String = FirstName().fake();
        let last_name: String = LastName().fake();
        let email = format!(
            "{}.{}.{}@seed.test",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            user_idx
        );

        let user_id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (first_name, last_name, email, password)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (email) DO UPDATE SET updated_at = NOW()
             RETURNING id",
        )
        .bind(&first_name)
        .bind(&last_name)
        .bind(&email)
        .bind(&password_hash)
        .fetch_one(db)
        .await?;

        for _ in 0..todos_per_user {
            let title: String = Sentence(2..6).fake();
            let completed: bool = (0..2).fake::<u8>() == 1;

            sqlx::query(
                "INSERT INTO todos (user_id, title, completed) VALUES ($1, $2, $3)",
            )
            .bind(user_id)
            .bind(title.trim_end_matches('.'))
            .bind(completed)
            .execute(db)
            .await?;
        }

        println!("  Seeded {} <{}> with {} todos", first_name, email, todos_per_user);
    }

    Ok(())
}

/// Removes seeded users (and their todos, via cascade).
pub async fn clear_seeded_data(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let result = sqlx::query("DELETE FROM users WHERE email LIKE '%@seed.test'")
        .execute(db)
        .await?;

    println!("  Removed {} seeded users", result.rows_affected());

    Ok(())
}
