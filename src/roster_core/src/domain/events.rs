use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::user_id::UserId;

pub const USER_CREATED_SUBJECT: &str = "USERS.created";
pub const USER_DELETED_SUBJECT: &str = "USERS.deleted";

/// Published once a user has been persisted.
///
/// `pwd` holds the plaintext credential and is only filled in when the
/// deployment explicitly opts in; it is omitted from the payload otherwise.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreatedEvent {
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pwd: Option<String>,
}

impl fmt::Debug for UserCreatedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreatedEvent")
            .field("id", &self.id)
            .field("pwd", &self.pwd.as_ref().map(|_| "***"))
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDeletedEvent {
    pub id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainEvent {
    UserCreated(UserCreatedEvent),
    UserDeleted(UserDeletedEvent),
}

impl DomainEvent {
    pub fn subject(&self) -> &'static str {
        match self {
            DomainEvent::UserCreated(_) => USER_CREATED_SUBJECT,
            DomainEvent::UserDeleted(_) => USER_DELETED_SUBJECT,
        }
    }

    pub fn user_id(&self) -> &UserId {
        match self {
            DomainEvent::UserCreated(event) => &event.id,
            DomainEvent::UserDeleted(event) => &event.id,
        }
    }

    /// JSON body of the event as it goes on the wire.
    pub fn to_payload(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            DomainEvent::UserCreated(event) => serde_json::to_vec(event),
            DomainEvent::UserDeleted(event) => serde_json::to_vec(event),
        }
    }
}
