pub mod create_user;
pub mod delete_user;
pub mod find_user;

use roster_core::{DomainEvent, EventPublisher, EventPublisherError};

use crate::{context::RequestContext, error::UserServiceError};

/// Serializes `event` and hands it to the bus under the request's cancellation scope.
async fn publish_event(
    ctx: &RequestContext,
    event_publisher: &dyn EventPublisher,
    event: &DomainEvent,
) -> Result<(), UserServiceError> {
    let payload = event.to_payload().map_err(EventPublisherError::from)?;

    ctx.run(event_publisher.publish(event.subject(), payload))
        .await??;

    Ok(())
}
