use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use roster_core::UserId;

use crate::{problem::ApiError, state::AppState};

#[tracing::instrument(name = "Delete user", skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let ctx = state.request_context();
    state.service().delete(&ctx, &UserId::new(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
