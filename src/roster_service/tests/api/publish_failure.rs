use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_remove_the_user_when_the_event_cannot_be_published() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.event_publisher.set_unavailable(true);

    let response = app
        .post_user(&serde_json::json!({
            "email": email,
            "name": "John",
            "password": "supersecretpw12",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    app.compensator.wait_idle().await;
    assert!(app.user_store.is_empty().await);
    assert_eq!(app.compensator.failure_count(), 0);

    app.event_publisher.set_unavailable(false);
    app.create_user(&email, "John").await;
    assert_eq!(app.user_store.len().await, 1);
}
