use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use roster_core::RequestedUser;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{problem::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    /// A missing password is treated as blank and fails validation.
    #[serde(default = "blank_password")]
    pub password: Secret<String>,
}

fn blank_password() -> Secret<String> {
    Secret::new(String::new())
}

impl From<CreateUserRequest> for RequestedUser {
    fn from(request: CreateUserRequest) -> Self {
        RequestedUser::new(request.email, request.name, Some(request.password))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: String,
}

#[tracing::instrument(name = "Create user", skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    request: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = request.map_err(|e| ApiError::MalformedBody(e.body_text()))?;

    let ctx = state.request_context();
    let id = state.service().create(&ctx, request.into()).await?;

    let location = format!("/users/{id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreateUserResponse { id: id.to_string() }),
    ))
}
