use roster_core::{EventPublisherError, UserStoreError, ValidationErrors};
use thiserror::Error;

use crate::context::Interrupted;

/// Errors surfaced by every [`UserService`](crate::UserService) operation.
#[derive(Debug, Error)]
pub enum UserServiceError {
    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationErrors),
    #[error("User with requested email address already exists")]
    EmailAlreadyInUse,
    #[error("User not found")]
    NotFound,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Event publisher error: {0}")]
    EventPublisherError(#[from] EventPublisherError),
    #[error("Request cancelled")]
    Cancelled,
    #[error("Request deadline exceeded")]
    DeadlineExceeded,
}

/// Coarse classification of a [`UserServiceError`], stable across decorators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Infrastructure,
    Cancelled,
    DeadlineExceeded,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Conflict => "conflict",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Infrastructure => "infrastructure",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::DeadlineExceeded => "deadline_exceeded",
        }
    }
}

impl UserServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserServiceError::ValidationFailed(_) => ErrorKind::Validation,
            UserServiceError::EmailAlreadyInUse => ErrorKind::Conflict,
            UserServiceError::NotFound => ErrorKind::NotFound,
            UserServiceError::UserStoreError(_) | UserServiceError::EventPublisherError(_) => {
                ErrorKind::Infrastructure
            }
            UserServiceError::Cancelled => ErrorKind::Cancelled,
            UserServiceError::DeadlineExceeded => ErrorKind::DeadlineExceeded,
        }
    }

    /// Whether the caller can fix the problem by changing its input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Validation | ErrorKind::Conflict | ErrorKind::NotFound
        )
    }
}

impl From<UserStoreError> for UserServiceError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserNotFound => UserServiceError::NotFound,
            UserStoreError::Conflict => UserServiceError::EmailAlreadyInUse,
            other => UserServiceError::UserStoreError(other),
        }
    }
}

impl From<ValidationErrors> for UserServiceError {
    fn from(errors: ValidationErrors) -> Self {
        UserServiceError::ValidationFailed(errors)
    }
}

impl From<Interrupted> for UserServiceError {
    fn from(interrupted: Interrupted) -> Self {
        match interrupted {
            Interrupted::Cancelled => UserServiceError::Cancelled,
            Interrupted::DeadlineExceeded => UserServiceError::DeadlineExceeded,
        }
    }
}
