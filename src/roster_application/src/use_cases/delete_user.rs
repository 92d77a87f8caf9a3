use roster_core::{DomainEvent, EventPublisher, UserDeletedEvent, UserId, UserStore};

use crate::{context::RequestContext, error::UserServiceError, use_cases::publish_event};

/// Delete user use case - removes a user and announces it
pub struct DeleteUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
    event_publisher: Option<&'a dyn EventPublisher>,
}

impl<'a, U> DeleteUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self {
            user_store,
            event_publisher: None,
        }
    }

    pub fn with_event_publisher(mut self, event_publisher: &'a dyn EventPublisher) -> Self {
        self.event_publisher = Some(event_publisher);
        self
    }

    /// Execute the delete user use case
    ///
    /// # Returns
    /// Ok(()) once the user is gone and, if a publisher is configured, the
    /// `UserDeleted` event was accepted. A publish failure is returned as is;
    /// the deletion itself is not rolled back.
    #[tracing::instrument(name = "DeleteUserUseCase::execute", skip(self, ctx))]
    pub async fn execute(&self, ctx: &RequestContext, id: &UserId) -> Result<(), UserServiceError> {
        ctx.run(self.user_store.delete(id)).await??;

        if let Some(event_publisher) = self.event_publisher {
            let event = DomainEvent::UserDeleted(UserDeletedEvent { id: id.clone() });
            publish_event(ctx, event_publisher, &event).await?;
        }

        Ok(())
    }
}
