pub mod in_memory_event_publisher;
pub mod redis_event_publisher;

pub use in_memory_event_publisher::{InMemoryEventPublisher, PublishedEvent};
pub use redis_event_publisher::RedisEventPublisher;
