use roster_core::{UserId, UserStore};
use secrecy::ExposeSecret;
use serde_json::json;

use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_the_stored_user() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let id = app.create_user(&email, "John").await;

    let response = app.get_user(&id).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "id": id, "email": email, "name": "John", "role": "UNDEFINED" })
    );
}

#[tokio::test]
async fn should_store_a_hash_instead_of_the_password() {
    let app = TestApp::new().await;
    let id = app.create_user(&get_random_email(), "John").await;

    let user = app
        .user_store
        .find_by_id(&UserId::new(id))
        .await
        .unwrap();

    let hash = user.password_hash().unwrap().expose_secret();
    assert_ne!(hash.as_str(), "supersecretpw12");
}

#[tokio::test]
async fn should_return_404_for_unknown_or_malformed_ids() {
    let app = TestApp::new().await;

    for id in ["not-a-uuid", "00000000-0000-4000-8000-000000000000"] {
        let response = app.get_user(id).await;

        assert_eq!(response.status().as_u16(), 404);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["detail"], "user with given id doesn't exist");
    }
}
