use std::sync::Arc;

use redis::aio::MultiplexedConnection;
use roster_adapters::config::{DatabaseSettings, RedisSettings};
use roster_application::{
    Compensator, CredentialPolicy, UserService, UserServiceExt, UserServiceImpl,
};
use roster_core::{EventPublisher, UserStore};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("database url is not configured")]
    MissingDatabaseUrl,
    #[error("failed to connect to PostgreSQL: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("failed to connect to Redis: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Connects to PostgreSQL and runs all pending migrations.
pub async fn configure_postgresql(settings: &DatabaseSettings) -> Result<PgPool, BootstrapError> {
    let url = settings
        .url
        .as_ref()
        .ok_or(BootstrapError::MissingDatabaseUrl)?;

    let pg_pool = get_postgres_pool(url.expose_secret(), settings.max_connections).await?;

    sqlx::migrate!("../../migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Opens a multiplexed connection; clones of it share one socket.
pub async fn configure_redis(
    settings: &RedisSettings,
) -> Result<MultiplexedConnection, BootstrapError> {
    let client = redis::Client::open(settings.url())?;
    Ok(client.get_multiplexed_async_connection().await?)
}

pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Builds the decorated user service over `user_store`.
///
/// The returned service logs and records metrics for every call; the
/// compensator is shared so the caller can drain it on shutdown.
pub fn user_service<U>(
    user_store: U,
    event_publisher: Option<Arc<dyn EventPublisher>>,
    credential_policy: CredentialPolicy,
    compensator: Compensator,
) -> Arc<dyn UserService>
where
    U: UserStore + Clone + 'static,
{
    let mut service = UserServiceImpl::new(user_store)
        .with_credential_policy(credential_policy)
        .with_compensator(compensator);
    if let Some(event_publisher) = event_publisher {
        service = service.with_shared_event_publisher(event_publisher);
    }

    Arc::new(service.with_logging().with_metrics())
}
