use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use roster_core::{
    EventPublisher, EventPublisherError, NewUser, RequestedUser, Role, User, UserId, UserStore,
    UserStoreError,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

// Mock user store enforcing email uniqueness under its write lock
#[derive(Clone, Default)]
pub struct MockUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
    next_id: Arc<AtomicUsize>,
    create_calls: Arc<AtomicUsize>,
    fail_deletes: Arc<AtomicBool>,
    fail_lookups: Arc<AtomicBool>,
    hang_creates: Arc<AtomicBool>,
}

impl MockUserStore {
    pub async fn insert(&self, email: &str, name: &str) -> UserId {
        let requested = RequestedUser::new(email, name, None);
        let new_user = NewUser::try_from(requested).unwrap();
        self.create(new_user).await.unwrap()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    pub fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    pub fn hang_creates(&self) {
        self.hang_creates.store(true, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn create(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.hang_creates.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }

        let mut users = self.users.write().await;
        if users.values().any(|u| u.email() == user.email()) {
            return Err(UserStoreError::Conflict);
        }

        let id = UserId::new(format!(
            "user-{}",
            self.next_id.fetch_add(1, Ordering::SeqCst)
        ));
        let hash = user
            .password()
            .map(|p| Secret::new(format!("hashed:{}", p.expose_secret().len())));
        let stored = User::new(
            id.clone(),
            user.email().to_owned(),
            user.name().to_owned(),
            hash,
            Role::default(),
        );
        users.insert(id.as_str().to_owned(), stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(id.as_str())
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, UserStoreError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(UserStoreError::UnexpectedError("connection reset".into()));
        }
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserStoreError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(UserStoreError::UnexpectedError("connection reset".into()));
        }
        self.users
            .write()
            .await
            .remove(id.as_str())
            .map(|_| ())
            .ok_or(UserStoreError::UserNotFound)
    }
}

// Mock event publisher recording every message
#[derive(Clone, Default)]
pub struct MockEventPublisher {
    published: Arc<RwLock<Vec<(String, Vec<u8>)>>>,
    fail: Arc<AtomicBool>,
    hang: Arc<AtomicBool>,
}

impl MockEventPublisher {
    pub fn failing() -> Self {
        let publisher = Self::default();
        publisher.fail.store(true, Ordering::SeqCst);
        publisher
    }

    pub fn hanging() -> Self {
        let publisher = Self::default();
        publisher.hang.store(true, Ordering::SeqCst);
        publisher
    }

    pub async fn published(&self) -> Vec<(String, serde_json::Value)> {
        self.published
            .read()
            .await
            .iter()
            .map(|(subject, payload)| (subject.clone(), serde_json::from_slice(payload).unwrap()))
            .collect()
    }
}

#[async_trait::async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), EventPublisherError> {
        if self.hang.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(EventPublisherError::Unavailable("nats: no responders".into()));
        }
        self.published
            .write()
            .await
            .push((subject.to_owned(), payload));
        Ok(())
    }
}

pub fn requested(email: &str, name: &str, password: &str) -> RequestedUser {
    RequestedUser::new(email, name, Some(Secret::new(password.to_string())))
}
