use std::{sync::Arc, time::Duration};

use fake::{Fake, faker::internet::en::SafeEmail};
use roster_adapters::{HashMapUserStore, InMemoryEventPublisher};
use roster_application::{Compensator, CredentialPolicy};
use roster_service::{RosterService, user_service};
use tokio::{net::TcpListener, sync::oneshot};

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub user_store: HashMapUserStore,
    pub event_publisher: InMemoryEventPublisher,
    pub compensator: Compensator,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_credential_policy(CredentialPolicy::Omit).await
    }

    pub async fn with_credential_policy(credential_policy: CredentialPolicy) -> Self {
        let user_store = HashMapUserStore::new();
        let event_publisher = InMemoryEventPublisher::new();
        let compensator = Compensator::new();

        let service = user_service(
            user_store.clone(),
            Some(Arc::new(event_publisher.clone())),
            credential_policy,
            compensator.clone(),
        );
        let app = RosterService::new(service, Duration::from_secs(30))
            .with_compensator(compensator.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let (shutdown, signal) = oneshot::channel::<()>();
        tokio::spawn(app.run_standalone(listener, async move {
            let _ = signal.await;
        }));

        Self {
            address,
            http_client: reqwest::Client::new(),
            user_store,
            event_publisher,
            compensator,
            shutdown: Some(shutdown),
        }
    }

    pub async fn post_user<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/users", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_user(&self, id: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/users/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_user(&self, id: &str) -> reqwest::Response {
        self.http_client
            .delete(format!("{}/users/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Creates a user and returns its id.
    pub async fn create_user(&self, email: &str, name: &str) -> String {
        let response = self
            .post_user(&serde_json::json!({
                "email": email,
                "name": name,
                "password": "supersecretpw12",
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: serde_json::Value = response.json().await.unwrap();
        body["id"].as_str().unwrap().to_owned()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

pub fn get_random_email() -> String {
    SafeEmail().fake()
}
