use axum::{
    Json,
    extract::{Path, State},
};
use roster_core::{Role, User, UserId};
use serde::{Deserialize, Serialize};

use crate::{problem::ApiError, state::AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().to_owned(),
            name: user.name().to_owned(),
            role: user.role(),
        }
    }
}

#[tracing::instrument(name = "Find user", skip(state))]
pub async fn find_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let ctx = state.request_context();
    let user = state.service().find_by_id(&ctx, &UserId::new(id)).await?;

    Ok(Json(user.into()))
}
