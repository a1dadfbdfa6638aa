//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use userbase_core::error::{AppError, ErrorKind};
use userbase_core::result::AppResult;
use userbase_entity::user::model::{CreateUser, UpdateUser};
use userbase_entity::user::User;

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user and return the stored record.
    ///
    /// A unique violation on username or email is surfaced as a validation
    /// error so the API maps it to 400 rather than 500.
    pub async fn create(&self, user: CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create user"))
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// List all users, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Apply a partial update and return the updated record.
    ///
    /// Returns `None` when the id does not exist; the API layer reports
    /// that case as success with null data rather than an error.
    pub async fn update(&self, id: Uuid, update: UpdateUser) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET \
                username = COALESCE($2, username), \
                email = COALESCE($3, email), \
                password_hash = COALESCE($4, password_hash), \
                updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(update.username)
        .bind(update.email)
        .bind(update.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update user"))
    }

    /// Delete a user by id. Returns whether a record existed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let deleted: Option<Uuid> =
            sqlx::query_scalar("DELETE FROM users WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete user", e)
                })?;

        Ok(deleted.is_some())
    }
}

/// Map a write-path sqlx error, turning unique violations into validation
/// failures.
fn map_write_error(e: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::validation("A user with this username or email already exists");
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), e)
}
