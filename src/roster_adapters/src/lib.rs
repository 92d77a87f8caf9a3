pub mod config;
pub mod events;
pub mod hashing;
pub mod persistence;

pub use events::{InMemoryEventPublisher, PublishedEvent, RedisEventPublisher};
pub use persistence::{HashMapUserStore, PostgresUserStore};
