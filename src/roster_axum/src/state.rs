use std::{sync::Arc, time::Duration};

use roster_application::{RequestContext, UserService};

#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn UserService>,
    request_timeout: Duration,
}

impl AppState {
    pub fn new(service: Arc<dyn UserService>, request_timeout: Duration) -> Self {
        Self {
            service,
            request_timeout,
        }
    }

    pub fn service(&self) -> &dyn UserService {
        self.service.as_ref()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// A fresh context whose deadline is the request timeout from now.
    pub fn request_context(&self) -> RequestContext {
        RequestContext::new().with_timeout(self.request_timeout)
    }
}
