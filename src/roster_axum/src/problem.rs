use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use roster_application::{ErrorKind, UserServiceError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

pub const EMAIL_IN_USE_REASON: &str = "user with this email address already exists";
pub const USER_NOT_FOUND_DETAIL: &str = "user with given id doesn't exist";
pub const VALIDATION_DETAIL: &str = "One of the parameters is invalid";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidParam {
    pub name: String,
    pub reason: String,
}

/// RFC 7807 problem document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(
        rename = "invalid-params",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub invalid_params: Vec<InvalidParam>,
}

impl Problem {
    pub fn new(status: StatusCode) -> Self {
        Self {
            problem_type: "about:blank".to_owned(),
            title: status.canonical_reason().unwrap_or("Error").to_owned(),
            status: status.as_u16(),
            detail: None,
            invalid_params: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_invalid_param(mut self, name: impl Into<String>, reason: impl Into<String>) -> Self {
        self.invalid_params.push(InvalidParam {
            name: name.into(),
            reason: reason.into(),
        });
        self
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] UserServiceError),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Service(error) => match error.kind() {
                ErrorKind::Validation | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
                ErrorKind::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
                ErrorKind::Infrastructure => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    pub fn problem(&self) -> Problem {
        let problem = Problem::new(self.status());
        match self {
            ApiError::MalformedBody(reason) => problem.with_detail(reason.clone()),
            ApiError::Service(UserServiceError::ValidationFailed(errors)) => errors
                .iter()
                .fold(problem.with_detail(VALIDATION_DETAIL), |problem, error| {
                    problem.with_invalid_param(error.name.clone(), error.reason.clone())
                }),
            ApiError::Service(UserServiceError::EmailAlreadyInUse) => {
                problem.with_invalid_param("email", EMAIL_IN_USE_REASON)
            }
            ApiError::Service(UserServiceError::NotFound) => {
                problem.with_detail(USER_NOT_FOUND_DETAIL)
            }
            ApiError::Service(error) => problem.with_detail(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (
            status,
            [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)],
            Json(self.problem()),
        )
            .into_response()
    }
}
