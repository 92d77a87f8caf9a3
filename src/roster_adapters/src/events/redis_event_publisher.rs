use redis::aio::MultiplexedConnection;
use roster_core::{EventPublisher, EventPublisherError};

/// Appends events to a Redis stream named after the subject.
///
/// Streams keep entries until trimmed, so consumer groups get at-least-once
/// delivery. The connection is multiplexed: clones share one socket and a
/// publish can be abandoned at any await point.
#[derive(Clone)]
pub struct RedisEventPublisher {
    conn: MultiplexedConnection,
    max_len: usize,
}

impl RedisEventPublisher {
    pub fn new(conn: MultiplexedConnection, max_len: usize) -> Self {
        Self { conn, max_len }
    }
}

#[async_trait::async_trait]
impl EventPublisher for RedisEventPublisher {
    #[tracing::instrument(name = "Publishing event to Redis", skip(self, payload))]
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), EventPublisherError> {
        let key = get_key(subject);

        let mut conn = self.conn.clone();
        redis::cmd("XADD")
            .arg(&key)
            .arg("MAXLEN")
            .arg("~")
            .arg(self.max_len)
            .arg("*")
            .arg(PAYLOAD_FIELD)
            .arg(payload)
            .query_async::<redis::Value>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| EventPublisherError::Unavailable(e.to_string()))
    }
}

const STREAM_KEY_PREFIX: &str = "events:";
pub const PAYLOAD_FIELD: &str = "payload";

pub fn get_key(subject: &str) -> String {
    format!("{}{}", STREAM_KEY_PREFIX, subject)
}
