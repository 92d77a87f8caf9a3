use roster_core::USER_DELETED_SUBJECT;

use crate::helpers::{TestApp, get_random_email};

#[tokio::test]
async fn should_return_204_and_announce_the_deletion() {
    let app = TestApp::new().await;
    let id = app.create_user(&get_random_email(), "John").await;

    let response = app.delete_user(&id).await;

    assert_eq!(response.status().as_u16(), 204);
    assert_eq!(app.get_user(&id).await.status().as_u16(), 404);

    let events = app.event_publisher.published_on(USER_DELETED_SUBJECT).await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].json().unwrap()["id"], id.as_str());
}

#[tokio::test]
async fn should_return_404_when_deleting_twice() {
    let app = TestApp::new().await;
    let id = app.create_user(&get_random_email(), "John").await;

    app.delete_user(&id).await;
    let response = app.delete_user(&id).await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        app.event_publisher
            .published_on(USER_DELETED_SUBJECT)
            .await
            .len(),
        1
    );
}
