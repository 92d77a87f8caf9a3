use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use roster_core::{EventPublisher, EventPublisherError};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedEvent {
    pub subject: String,
    pub payload: Vec<u8>,
}

impl PublishedEvent {
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }
}

/// Keeps published events in memory. Can be switched to refuse every publish.
#[derive(Default, Clone)]
pub struct InMemoryEventPublisher {
    events: Arc<RwLock<Vec<PublishedEvent>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn published(&self) -> Vec<PublishedEvent> {
        self.events.read().await.clone()
    }

    pub async fn published_on(&self, subject: &str) -> Vec<PublishedEvent> {
        self.events
            .read()
            .await
            .iter()
            .filter(|event| event.subject == subject)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), EventPublisherError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(EventPublisherError::Unavailable(
                "in-memory publisher switched off".to_owned(),
            ));
        }

        self.events.write().await.push(PublishedEvent {
            subject: subject.to_owned(),
            payload,
        });
        Ok(())
    }
}
