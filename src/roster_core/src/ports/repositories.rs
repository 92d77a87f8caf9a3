use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    user::{NewUser, User},
    user_id::UserId,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User not found")]
    UserNotFound,
    #[error("Email address is already taken")]
    Conflict,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserNotFound, Self::UserNotFound)
                | (Self::Conflict, Self::Conflict)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Durable storage of users, keyed by a generated [`UserId`] with a unique email index.
///
/// Implementations must enforce email uniqueness themselves and report a
/// violation as [`UserStoreError::Conflict`]: the check-then-create sequence
/// of the creation workflow is not atomic. An id that is not a well-formed key
/// for the backend is reported as [`UserStoreError::UserNotFound`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a user and returns its newly generated id. The credential is
    /// hashed and the role set to its default by the store.
    async fn create(&self, user: NewUser) -> Result<UserId, UserStoreError>;
    async fn find_by_id(&self, id: &UserId) -> Result<User, UserStoreError>;
    async fn find_by_email(&self, email: &str) -> Result<User, UserStoreError>;
    async fn delete(&self, id: &UserId) -> Result<(), UserStoreError>;
}
