//! User operations

use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;
use tracing::debug;

use crate::error::DbError;
use crate::models::{NewUser, User};
use crate::repository::Database;
use crate::store::UserStore;

impl Database {
    // ==================== User Operations ====================

    /// Insert a new user
    pub async fn insert_user(&self, user: NewUser) -> Result<User, DbError> {
        // Check if user already exists
        let existing = self.get_user_by_username(&user.username).await?;
        if existing.is_some() {
            return Err(DbError::Duplicate(format!(
                "User '{}' already exists",
                user.username
            )));
        }

        self.insert_user_row(user).await
    }

    /// Insert without the pre-check; the UNIQUE column still rejects duplicates
    async fn insert_user_row(&self, user: NewUser) -> Result<User, DbError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, created_at)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(now.to_rfc3339())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // A concurrent insert won the race between the check and the insert
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                DbError::Duplicate(format!("User '{}' already exists", user.username))
            }
            other => DbError::Connection(other),
        })?;

        let id: i64 = result.get("id");
        debug!("Inserted user {} with id {}", user.username, id);

        Ok(User {
            id,
            username: user.username,
            password_hash: user.password_hash,
            created_at: now,
        })
    }

    /// Get a user by username
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, DbError> {
        let result = sqlx::query(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        result
            .map(|row| User::try_from(&row).map_err(DbError::from))
            .transpose()
    }

    /// Get a user by ID
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, DbError> {
        let result = sqlx::query(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        result
            .map(|row| User::try_from(&row).map_err(DbError::from))
            .transpose()
    }
}

#[async_trait]
impl UserStore for Database {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbError> {
        self.get_user_by_username(username).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError> {
        self.get_user_by_id(id).await
    }

    async fn create(&self, user: NewUser) -> Result<User, DbError> {
        self.insert_user(user).await
    }
}
