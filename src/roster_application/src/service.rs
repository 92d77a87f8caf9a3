use std::sync::Arc;

use async_trait::async_trait;
use roster_core::{EventPublisher, RequestedUser, User, UserId, UserStore};

use crate::{
    compensation::Compensator,
    context::RequestContext,
    error::UserServiceError,
    use_cases::{
        create_user::{CreateUserUseCase, CredentialPolicy},
        delete_user::DeleteUserUseCase,
        find_user::FindUserUseCase,
    },
};

/// Caller-facing user operations.
///
/// Decorators implement this trait by wrapping another implementation; they
/// may observe results but must hand them back unchanged.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn create(
        &self,
        ctx: &RequestContext,
        user: RequestedUser,
    ) -> Result<UserId, UserServiceError>;

    async fn find_by_id(&self, ctx: &RequestContext, id: &UserId) -> Result<User, UserServiceError>;

    async fn delete(&self, ctx: &RequestContext, id: &UserId) -> Result<(), UserServiceError>;
}

#[async_trait]
impl<S> UserService for Arc<S>
where
    S: UserService + ?Sized,
{
    async fn create(
        &self,
        ctx: &RequestContext,
        user: RequestedUser,
    ) -> Result<UserId, UserServiceError> {
        (**self).create(ctx, user).await
    }

    async fn find_by_id(&self, ctx: &RequestContext, id: &UserId) -> Result<User, UserServiceError> {
        (**self).find_by_id(ctx, id).await
    }

    async fn delete(&self, ctx: &RequestContext, id: &UserId) -> Result<(), UserServiceError> {
        (**self).delete(ctx, id).await
    }
}

/// The user service proper: runs the use cases against a store and an optional event bus.
pub struct UserServiceImpl<U>
where
    U: UserStore + Clone + 'static,
{
    user_store: U,
    event_publisher: Option<Arc<dyn EventPublisher>>,
    credential_policy: CredentialPolicy,
    compensator: Compensator,
}

impl<U> UserServiceImpl<U>
where
    U: UserStore + Clone + 'static,
{
    pub fn new(user_store: U) -> Self {
        Self {
            user_store,
            event_publisher: None,
            credential_policy: CredentialPolicy::default(),
            compensator: Compensator::new(),
        }
    }

    pub fn with_event_publisher<P>(self, event_publisher: P) -> Self
    where
        P: EventPublisher + 'static,
    {
        self.with_shared_event_publisher(Arc::new(event_publisher))
    }

    pub fn with_shared_event_publisher(mut self, event_publisher: Arc<dyn EventPublisher>) -> Self {
        self.event_publisher = Some(event_publisher);
        self
    }

    pub fn with_credential_policy(mut self, credential_policy: CredentialPolicy) -> Self {
        self.credential_policy = credential_policy;
        self
    }

    pub fn with_compensator(mut self, compensator: Compensator) -> Self {
        self.compensator = compensator;
        self
    }

    pub fn user_store(&self) -> &U {
        &self.user_store
    }

    pub fn compensator(&self) -> &Compensator {
        &self.compensator
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserStore + Clone + 'static,
{
    async fn create(
        &self,
        ctx: &RequestContext,
        user: RequestedUser,
    ) -> Result<UserId, UserServiceError> {
        let mut use_case = CreateUserUseCase::new(&self.user_store, &self.compensator)
            .with_credential_policy(self.credential_policy);
        if let Some(event_publisher) = &self.event_publisher {
            use_case = use_case.with_event_publisher(event_publisher.as_ref());
        }

        use_case.execute(ctx, user).await
    }

    async fn find_by_id(&self, ctx: &RequestContext, id: &UserId) -> Result<User, UserServiceError> {
        FindUserUseCase::new(&self.user_store).execute(ctx, id).await
    }

    async fn delete(&self, ctx: &RequestContext, id: &UserId) -> Result<(), UserServiceError> {
        let mut use_case = DeleteUserUseCase::new(&self.user_store);
        if let Some(event_publisher) = &self.event_publisher {
            use_case = use_case.with_event_publisher(event_publisher.as_ref());
        }

        use_case.execute(ctx, id).await
    }
}
