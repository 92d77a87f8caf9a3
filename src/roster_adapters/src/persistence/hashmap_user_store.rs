use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use roster_core::{NewUser, Role, User, UserId, UserStore, UserStoreError};
use uuid::Uuid;

use crate::hashing::compute_password_hash;

#[derive(Default)]
struct Users {
    by_id: HashMap<Uuid, User>,
    by_email: HashMap<String, Uuid>,
}

/// In-memory user store for local runs and tests.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<Users>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn parse_id(id: &UserId) -> Result<Uuid, UserStoreError> {
    Uuid::parse_str(id.as_str()).map_err(|_| UserStoreError::UserNotFound)
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    #[tracing::instrument(name = "Adding user to HashMap store", skip_all)]
    async fn create(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        let password_hash = match user.password() {
            Some(password) => Some(
                compute_password_hash(password.clone())
                    .await
                    .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?,
            ),
            None => None,
        };

        let mut users = self.users.write().await;
        if users.by_email.contains_key(user.email()) {
            return Err(UserStoreError::Conflict);
        }

        let key = Uuid::new_v4();
        let id = UserId::new(key.to_string());
        let stored = User::new(
            id.clone(),
            user.email().to_owned(),
            user.name().to_owned(),
            password_hash,
            Role::default(),
        );
        users.by_email.insert(user.email().to_owned(), key);
        users.by_id.insert(key, stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        let key = parse_id(id)?;
        let users = self.users.read().await;
        users
            .by_id
            .get(&key)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .by_email
            .get(email)
            .and_then(|key| users.by_id.get(key))
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    #[tracing::instrument(name = "Delete user from HashMap store", skip_all)]
    async fn delete(&self, id: &UserId) -> Result<(), UserStoreError> {
        let key = parse_id(id)?;
        let mut users = self.users.write().await;
        let user = users.by_id.remove(&key).ok_or(UserStoreError::UserNotFound)?;
        users.by_email.remove(user.email());
        Ok(())
    }
}
