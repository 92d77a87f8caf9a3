use std::{future::Future, sync::Arc, time::Duration};

use axum::Router;
use roster_application::{Compensator, UserService};
use roster_axum::{AppState, routes};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);
const COMPENSATION_DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP front of the user service.
pub struct RosterService {
    router: Router,
    compensator: Option<Compensator>,
}

impl RosterService {
    /// # Arguments
    /// * `service` - The user service, usually wrapped in the logging and metrics decorators
    /// * `request_timeout` - Deadline applied to every request's context
    pub fn new(service: Arc<dyn UserService>, request_timeout: Duration) -> Self {
        let router = routes::router(AppState::new(service, request_timeout));
        Self {
            router,
            compensator: None,
        }
    }

    /// Compensations still running at shutdown are awaited before
    /// [`run_standalone`](Self::run_standalone) returns.
    pub fn with_compensator(mut self, compensator: Compensator) -> Self {
        self.compensator = Some(compensator);
        self
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self
            .router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            )
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));
        self
    }

    /// The traced router, ready to be nested into another application.
    pub fn as_nested_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Serves on `listener` until `shutdown` resolves, then drains in-flight
    /// requests and pending compensations.
    pub async fn run_standalone<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let compensator = self.compensator.clone();
        let router = self.as_nested_router();

        tracing::info!("Roster service listening on {}", listener.local_addr()?);

        let handle = axum_server::Handle::new();
        tokio::spawn({
            let handle = handle.clone();
            async move {
                shutdown.await;
                handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
            }
        });

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .handle(handle)
            .serve(router.into_make_service())
            .await?;

        if let Some(compensator) = compensator {
            let pending = compensator.pending();
            if pending > 0 {
                tracing::info!(pending, "waiting for compensations to finish");
            }
            if tokio::time::timeout(COMPENSATION_DRAIN_TIMEOUT, compensator.wait_idle())
                .await
                .is_err()
            {
                tracing::error!(
                    pending = compensator.pending(),
                    "compensations still running at shutdown"
                );
            }
        }

        tracing::info!("Roster service stopped");
        Ok(())
    }
}
