use std::{net::SocketAddr, sync::Arc};

use color_eyre::eyre::{Result, WrapErr};
use metrics_exporter_prometheus::PrometheusBuilder;
use roster::{
    Compensator, CredentialPolicy, EventPublisher, HashMapUserStore, PostgresUserStore,
    RedisEventPublisher, RosterService, Settings, UserService, configure_postgresql,
    configure_redis, shutdown_signal, user_service,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load().wrap_err("Failed to load configuration")?;

    if settings.metrics.enabled {
        let address: SocketAddr = settings
            .metrics
            .address
            .parse()
            .wrap_err("Invalid metrics address")?;
        PrometheusBuilder::new()
            .with_http_listener(address)
            .install()
            .wrap_err("Failed to install Prometheus exporter")?;
        tracing::info!(%address, "Prometheus exporter listening");
    }

    let event_publisher: Option<Arc<dyn EventPublisher>> =
        if settings.events.enabled && settings.redis.enabled {
            let redis_conn = configure_redis(&settings.redis).await?;
            Some(Arc::new(RedisEventPublisher::new(
                redis_conn,
                settings.events.stream_max_len,
            )))
        } else {
            if settings.events.enabled {
                tracing::warn!("Events are enabled but no Redis is configured, not publishing");
            }
            None
        };

    let credential_policy = if settings.events.include_credential {
        CredentialPolicy::Include
    } else {
        CredentialPolicy::Omit
    };

    let compensator = Compensator::new();
    let service: Arc<dyn UserService> = if settings.database.url.is_some() {
        let pg_pool = configure_postgresql(&settings.database).await?;
        tracing::info!("Using PostgreSQL user store");
        user_service(
            PostgresUserStore::new(pg_pool),
            event_publisher,
            credential_policy,
            compensator.clone(),
        )
    } else {
        tracing::warn!("No database configured, users are kept in memory");
        user_service(
            HashMapUserStore::new(),
            event_publisher,
            credential_policy,
            compensator.clone(),
        )
    };

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    tracing::info!("Starting roster service...");

    RosterService::new(service, settings.application.request_timeout())
        .with_compensator(compensator)
        .run_standalone(listener, shutdown_signal())
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
