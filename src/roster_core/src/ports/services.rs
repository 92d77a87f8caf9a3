use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventPublisherError {
    #[error("Failed to serialize event: {0}")]
    Serialization(String),
    #[error("Event bus unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for EventPublisherError {
    fn from(error: serde_json::Error) -> Self {
        EventPublisherError::Serialization(error.to_string())
    }
}

/// Port trait for the domain event bus.
///
/// Delivery is at-least-once: a successful publish means the bus accepted the
/// message, consumers may still see it more than once.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), EventPublisherError>;
}
