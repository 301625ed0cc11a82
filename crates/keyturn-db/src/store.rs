//! User store trait

use async_trait::async_trait;

use crate::error::DbError;
use crate::models::{NewUser, User};

/// User store trait
///
/// The authentication layer only ever looks users up by name or id and
/// creates new ones; users are never updated or deleted.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError>;

    /// Create a new user, failing with `DbError::Duplicate` if the username is taken
    async fn create(&self, user: NewUser) -> Result<User, DbError>;
}
