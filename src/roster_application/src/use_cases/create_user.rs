use roster_core::{
    DomainEvent, EventPublisher, NewUser, RequestedUser, UserCreatedEvent, UserId, UserStore,
    UserStoreError,
};
use secrecy::ExposeSecret;

use crate::{
    compensation::Compensator, context::RequestContext, error::UserServiceError,
    use_cases::publish_event,
};

/// Whether the plaintext credential travels inside the `UserCreated` event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialPolicy {
    #[default]
    Omit,
    Include,
}

/// Create user use case - validates, deduplicates, persists and announces a new user
pub struct CreateUserUseCase<'a, U>
where
    U: UserStore + Clone + 'static,
{
    user_store: &'a U,
    event_publisher: Option<&'a dyn EventPublisher>,
    credential_policy: CredentialPolicy,
    compensator: &'a Compensator,
}

impl<'a, U> CreateUserUseCase<'a, U>
where
    U: UserStore + Clone + 'static,
{
    pub fn new(user_store: &'a U, compensator: &'a Compensator) -> Self {
        Self {
            user_store,
            event_publisher: None,
            credential_policy: CredentialPolicy::default(),
            compensator,
        }
    }

    pub fn with_event_publisher(mut self, event_publisher: &'a dyn EventPublisher) -> Self {
        self.event_publisher = Some(event_publisher);
        self
    }

    pub fn with_credential_policy(mut self, credential_policy: CredentialPolicy) -> Self {
        self.credential_policy = credential_policy;
        self
    }

    /// Execute the create user use case
    ///
    /// # Arguments
    /// * `ctx` - Cancellation scope of the calling request
    /// * `requested` - The user to create
    ///
    /// # Returns
    /// The generated id, or:
    /// * `ValidationFailed` before any store access if the request is invalid
    /// * `EmailAlreadyInUse` if the email is taken, detected up front or by the store
    /// * the publish error if the `UserCreated` event could not be published;
    ///   the stored user is then removed in the background
    #[tracing::instrument(name = "CreateUserUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        ctx: &RequestContext,
        requested: RequestedUser,
    ) -> Result<UserId, UserServiceError> {
        tracing::debug!(state = "validating");
        let new_user = NewUser::try_from(requested)?;

        tracing::debug!(state = "checking_uniqueness");
        match ctx.run(self.user_store.find_by_email(new_user.email())).await? {
            Ok(_) => return Err(UserServiceError::EmailAlreadyInUse),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => return Err(UserServiceError::UserStoreError(e)),
        }

        let email = new_user.email().to_owned();
        let name = new_user.name().to_owned();
        let pwd = match self.credential_policy {
            CredentialPolicy::Include => new_user.password().map(|p| p.expose_secret().clone()),
            CredentialPolicy::Omit => None,
        };

        tracing::debug!(state = "persisting");
        let id = ctx.run(self.user_store.create(new_user)).await??;

        let Some(event_publisher) = self.event_publisher else {
            tracing::debug!(state = "committed", user_id = %id);
            return Ok(id);
        };

        // Compensates on every exit but a successful publish, including this
        // future being dropped while the publish is in flight.
        let compensation = self.compensator.guard(self.user_store.clone(), id.clone());

        tracing::debug!(state = "publishing", user_id = %id);
        let event = DomainEvent::UserCreated(UserCreatedEvent {
            id: id.clone(),
            email,
            name,
            pwd,
        });

        if let Err(error) = publish_event(ctx, event_publisher, &event).await {
            tracing::warn!(state = "compensating", user_id = %id, error = %error, "Failed to publish user creation");
            drop(compensation);
            return Err(error);
        }

        compensation.disarm();
        tracing::debug!(state = "committed", user_id = %id);
        Ok(id)
    }
}
