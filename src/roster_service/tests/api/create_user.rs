use roster_application::CredentialPolicy;
use roster_core::USER_CREATED_SUBJECT;
use serde_json::json;

use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_201_and_announce_the_user() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app
        .post_user(&json!({ "email": email, "name": "John", "password": "supersecretpw12" }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    assert!(response.headers().contains_key("x-request-id"));
    let body: serde_json::Value = response.json().await.unwrap();
    let id = body["id"].as_str().unwrap();

    let events = app.event_publisher.published_on(USER_CREATED_SUBJECT).await;
    assert_eq!(events.len(), 1);
    let event = events[0].json().unwrap();
    assert_eq!(event["id"], id);
    assert_eq!(event["email"], email.as_str());
    assert_eq!(event["name"], "John");
    assert!(event.get("pwd").is_none());
}

#[tokio::test]
async fn should_carry_the_credential_when_configured() {
    let app = TestApp::with_credential_policy(CredentialPolicy::Include).await;

    app.create_user(&get_random_email(), "John").await;

    let events = app.event_publisher.published_on(USER_CREATED_SUBJECT).await;
    assert_eq!(events[0].json().unwrap()["pwd"], "supersecretpw12");
}

#[tokio::test]
async fn should_return_400_for_every_invalid_field() {
    let app = TestApp::new().await;

    let response = app
        .post_user(&json!({ "email": "  ", "name": "", "password": "short" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.headers()["content-type"],
        "application/problem+json"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "One of the parameters is invalid");
    let names: Vec<&str> = body["invalid-params"]
        .as_array()
        .unwrap()
        .iter()
        .map(|param| param["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["email", "password", "name"]);
    assert!(app.user_store.is_empty().await);
    assert!(app.event_publisher.published().await.is_empty());
}

#[tokio::test]
async fn should_return_400_for_a_missing_password() {
    let app = TestApp::new().await;

    let response = app
        .post_user(&json!({ "email": get_random_email(), "name": "John" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["invalid-params"][0]["name"], "password");
    assert!(app.user_store.is_empty().await);
}

#[tokio::test]
async fn should_return_400_if_email_already_exists() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.create_user(&email, "John").await;

    let response = app
        .post_user(&json!({ "email": email, "name": "Jane", "password": "anothersecret12" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["invalid-params"][0]["name"], "email");
    assert_eq!(
        body["invalid-params"][0]["reason"],
        "user with this email address already exists"
    );
    assert_eq!(app.user_store.len().await, 1);
}

#[tokio::test]
async fn should_create_exactly_one_user_under_concurrent_requests() {
    let app = TestApp::new().await;
    let body = json!({ "email": get_random_email(), "name": "John", "password": "supersecretpw12" });

    let (first, second) = tokio::join!(app.post_user(&body), app.post_user(&body));

    let mut statuses = vec![first.status().as_u16(), second.status().as_u16()];
    statuses.sort();
    assert_eq!(statuses, vec![201, 400]);
    assert_eq!(app.user_store.len().await, 1);
}

#[tokio::test]
async fn should_return_400_for_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/users", &app.address))
        .header("content-type", "application/json")
        .body("{\"email\":")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], 400);
}
