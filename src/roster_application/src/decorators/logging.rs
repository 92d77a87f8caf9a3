use std::time::Instant;

use async_trait::async_trait;
use roster_core::{RequestedUser, User, UserId};

use crate::{context::RequestContext, error::UserServiceError, service::UserService};

/// Logs every call and its outcome. Client errors are logged at `info`,
/// everything else that fails at `error`.
pub struct LoggingUserService<S> {
    inner: S,
}

impl<S> LoggingUserService<S>
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

fn log_outcome<T>(method: &'static str, result: &Result<T, UserServiceError>, started: Instant) {
    let took_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(_) => tracing::info!(method, took_ms, "ok"),
        Err(error) if error.is_client_error() => {
            tracing::info!(method, took_ms, kind = error.kind().as_str(), error = %error, "rejected")
        }
        Err(error) => {
            tracing::error!(method, took_ms, kind = error.kind().as_str(), error = %error, "failed")
        }
    }
}

#[async_trait]
impl<S> UserService for LoggingUserService<S>
where
    S: UserService,
{
    #[tracing::instrument(name = "UserService::create", skip_all)]
    async fn create(
        &self,
        ctx: &RequestContext,
        user: RequestedUser,
    ) -> Result<UserId, UserServiceError> {
        tracing::trace!(?user, "about to create a user");
        let started = Instant::now();

        let result = self.inner.create(ctx, user).await;
        if let Ok(id) = &result {
            tracing::debug!(user_id = %id, "created user");
        }
        log_outcome("create", &result, started);
        result
    }

    #[tracing::instrument(name = "UserService::find_by_id", skip_all, fields(user_id = %id))]
    async fn find_by_id(&self, ctx: &RequestContext, id: &UserId) -> Result<User, UserServiceError> {
        tracing::trace!("about to find a user");
        let started = Instant::now();

        let result = self.inner.find_by_id(ctx, id).await;
        log_outcome("find_by_id", &result, started);
        result
    }

    #[tracing::instrument(name = "UserService::delete", skip_all, fields(user_id = %id))]
    async fn delete(&self, ctx: &RequestContext, id: &UserId) -> Result<(), UserServiceError> {
        tracing::trace!("about to delete a user");
        let started = Instant::now();

        let result = self.inner.delete(ctx, id).await;
        log_outcome("delete", &result, started);
        result
    }
}
