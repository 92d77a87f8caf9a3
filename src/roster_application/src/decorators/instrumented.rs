use std::time::Instant;

use async_trait::async_trait;
use roster_core::{RequestedUser, User, UserId};

use crate::{context::RequestContext, error::UserServiceError, metrics, service::UserService};

/// Counts calls per outcome and records their latency.
pub struct InstrumentedUserService<S> {
    inner: S,
}

impl<S> InstrumentedUserService<S>
where
    S: UserService,
{
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S> UserService for InstrumentedUserService<S>
where
    S: UserService,
{
    async fn create(
        &self,
        ctx: &RequestContext,
        user: RequestedUser,
    ) -> Result<UserId, UserServiceError> {
        let started = Instant::now();
        let result = self.inner.create(ctx, user).await;
        metrics::record_create(&result, started.elapsed().as_secs_f64());
        result
    }

    async fn find_by_id(&self, ctx: &RequestContext, id: &UserId) -> Result<User, UserServiceError> {
        let started = Instant::now();
        let result = self.inner.find_by_id(ctx, id).await;
        metrics::record_fetch(&result, started.elapsed().as_secs_f64());
        result
    }

    async fn delete(&self, ctx: &RequestContext, id: &UserId) -> Result<(), UserServiceError> {
        let started = Instant::now();
        let result = self.inner.delete(ctx, id).await;
        metrics::record_delete(&result, started.elapsed().as_secs_f64());
        result
    }
}
