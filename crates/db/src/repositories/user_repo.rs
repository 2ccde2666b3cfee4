//! Repository for the `users` table. Used only by the seed binary.

use sqlx::PgPool;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, role, created_at";

/// Provides the handful of user operations the seed binary needs.
pub struct UserRepo;

impl UserRepo {
    /// Insert or update the admin user keyed by email.
    ///
    /// Re-running the seed refreshes the name and password hash instead of
    /// failing on `uq_users_email`.
    pub async fn upsert_admin(
        pool: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, role) \
             VALUES ($1, $2, $3, 'ADMIN') \
             ON CONFLICT (email) DO UPDATE \
                SET name = EXCLUDED.name, password_hash = EXCLUDED.password_hash \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }
}
