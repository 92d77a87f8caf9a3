use roster_core::{User, UserId, UserStore};

use crate::{context::RequestContext, error::UserServiceError};

/// Find user use case - looks a user up by id
pub struct FindUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> FindUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    /// Execute the find user use case
    ///
    /// Ids the store cannot parse are reported as `NotFound`, same as unknown ones.
    #[tracing::instrument(name = "FindUserUseCase::execute", skip(self, ctx))]
    pub async fn execute(&self, ctx: &RequestContext, id: &UserId) -> Result<User, UserServiceError> {
        let user = ctx.run(self.user_store.find_by_id(id)).await??;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockUserStore;
    use roster_core::Role;

    #[tokio::test]
    async fn test_find_user_success() {
        let user_store = MockUserStore::default();
        let id = user_store.insert("john@example.com", "John").await;
        let use_case = FindUserUseCase::new(&user_store);

        let user = use_case.execute(&RequestContext::new(), &id).await.unwrap();

        assert_eq!(user.id(), &id);
        assert_eq!(user.email(), "john@example.com");
        assert_eq!(user.role(), Role::Undefined);
    }

    #[tokio::test]
    async fn test_find_user_not_found() {
        let user_store = MockUserStore::default();
        let use_case = FindUserUseCase::new(&user_store);

        let result = use_case
            .execute(&RequestContext::new(), &UserId::new("not-an-id"))
            .await;

        assert!(matches!(result, Err(UserServiceError::NotFound)));
    }
}
