pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    events::{
        DomainEvent, USER_CREATED_SUBJECT, USER_DELETED_SUBJECT, UserCreatedEvent,
        UserDeletedEvent,
    },
    requested_user::RequestedUser,
    role::Role,
    user::{NewUser, User},
    user_id::UserId,
    validation::{
        MIN_EMAIL_LENGTH, MIN_PASSWORD_LENGTH, ValidationError, ValidationErrors, validate,
    },
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{EventPublisher, EventPublisherError},
};
